use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::model::{ActionType, Condition, Field, LogicType, Operator, Rule};
use crate::value::effective_entries;

pub type VisibilityMap = std::collections::BTreeMap<String, bool>;

/// Compute the set of field ids currently suppressed from view.
///
/// Pure and total: malformed rules, unknown field references, and
/// non-numeric entries under numeric operators never raise; they simply do
/// not trigger visibility changes. Recomputed in full on every call.
pub fn resolve_hidden(fields: &[Field], rules: &[Rule], values: &Value) -> BTreeSet<String> {
    resolve_visibility(fields, rules, values)
        .into_iter()
        .filter_map(|(id, visible)| (!visible).then_some(id))
        .collect()
}

/// Per-field visibility report over the same pass as [`resolve_hidden`].
pub fn resolve_visibility(fields: &[Field], rules: &[Rule], values: &Value) -> VisibilityMap {
    let value_map = values.as_object().cloned().unwrap_or_default();

    // A show target is hidden until some firing rule reveals it; a field no
    // rule ever shows is never auto-hidden.
    let show_targets: BTreeSet<&str> = rules
        .iter()
        .flat_map(|rule| rule.actions.iter())
        .filter(|action| action.kind == ActionType::Show)
        .map(|action| action.field_id.as_str())
        .collect();

    let mut shown = BTreeSet::new();
    let mut hidden = BTreeSet::new();
    for rule in rules {
        if rule.conditions.is_empty() {
            continue;
        }
        let fired = match rule.logic_type {
            LogicType::And => rule
                .conditions
                .iter()
                .all(|condition| condition_holds(condition, fields, &value_map)),
            LogicType::Or => rule
                .conditions
                .iter()
                .any(|condition| condition_holds(condition, fields, &value_map)),
        };
        if !fired {
            continue;
        }
        for action in &rule.actions {
            match action.kind {
                ActionType::Show => shown.insert(action.field_id.as_str()),
                ActionType::Hide => hidden.insert(action.field_id.as_str()),
            };
        }
    }

    // Flat merge of the two accumulators, not last-write-wins across rules:
    // an explicit hide beats an explicit show for the same field.
    let mut map = VisibilityMap::new();
    for field in fields {
        let id = field.id.as_str();
        let mut visible = true;
        if show_targets.contains(id) && !shown.contains(id) {
            visible = false;
        }
        if hidden.contains(id) {
            visible = false;
        }
        map.insert(field.id.clone(), visible);
    }
    map
}

fn condition_holds(condition: &Condition, fields: &[Field], values: &Map<String, Value>) -> bool {
    let entries = effective_entries(&condition.field_id, fields, values);
    let needle = condition.value.to_lowercase();
    match condition.operator {
        Operator::Equals => entries.iter().any(|entry| *entry == needle),
        // Emptiness satisfies the negated operators: no entry, nothing to
        // match against.
        Operator::NotEquals => !entries.iter().any(|entry| *entry == needle),
        Operator::Contains => entries.iter().any(|entry| entry.contains(&needle)),
        Operator::NotContains => !entries.iter().any(|entry| entry.contains(&needle)),
        Operator::StartsWith => entries.iter().any(|entry| entry.starts_with(&needle)),
        Operator::EndsWith => entries.iter().any(|entry| entry.ends_with(&needle)),
        Operator::IsEmpty => entries.is_empty(),
        Operator::IsNotEmpty => !entries.is_empty(),
        Operator::GreaterThan => compare_numeric(&entries, &needle, |entry, bound| entry > bound),
        Operator::LessThan => compare_numeric(&entries, &needle, |entry, bound| entry < bound),
    }
}

// Non-numeric entries never satisfy the comparison, and nothing compares
// against an unparsable bound.
fn compare_numeric(entries: &[String], bound: &str, compare: impl Fn(f64, f64) -> bool) -> bool {
    let Ok(bound) = bound.parse::<f64>() else {
        return false;
    };
    entries
        .iter()
        .filter_map(|entry| entry.parse::<f64>().ok())
        .any(|entry| compare(entry, bound))
}
