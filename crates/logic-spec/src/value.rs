use serde_json::{Map, Value};

use crate::model::Field;

/// True when a respondent entry counts as empty: null, the empty string,
/// or a zero-length list/object.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn entry_text(value: &Value) -> Option<String> {
    if is_empty_value(value) {
        return None;
    }
    let text = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    Some(text.to_lowercase())
}

/// Normalize whatever the respondent entered into an ordered list of
/// lower-cased string views.
///
/// Absent and empty entries normalize to an empty list; lists and objects
/// contribute one entry per non-empty element; scalars contribute a single
/// entry when non-empty.
pub fn normalize(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(entry_text).collect(),
        Some(Value::Object(map)) => map.values().filter_map(entry_text).collect(),
        Some(scalar) => entry_text(scalar).into_iter().collect(),
    }
}

/// Group detection for a condition source: the field's own type is the
/// group type, or at least one field's `groupId` points at it.
pub fn is_group_source(field_id: &str, fields: &[Field]) -> bool {
    fields.iter().any(|field| {
        (field.id == field_id && field.is_group()) || field.group_id.as_deref() == Some(field_id)
    })
}

/// Aggregate value of a group: an object keyed by child id holding each
/// non-empty child entry. Children without an entry, or with an empty one,
/// are left out.
pub fn aggregate_group(group_id: &str, fields: &[Field], values: &Map<String, Value>) -> Value {
    let mut aggregate = Map::new();
    for child in fields
        .iter()
        .filter(|field| field.group_id.as_deref() == Some(group_id))
    {
        if let Some(entry) = values.get(&child.id)
            && !is_empty_value(entry)
        {
            aggregate.insert(child.id.clone(), entry.clone());
        }
    }
    Value::Object(aggregate)
}

/// Effective, normalized entries for a condition source: group sources
/// aggregate their non-empty children; everything else reads its raw entry
/// from the value map.
pub fn effective_entries(
    field_id: &str,
    fields: &[Field],
    values: &Map<String, Value>,
) -> Vec<String> {
    if is_group_source(field_id, fields) {
        normalize(Some(&aggregate_group(field_id, fields, values)))
    } else {
        normalize(values.get(field_id))
    }
}
