use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Closed set of input kinds the designer can place on a form.
///
/// `Group` is the container kind: its children point back at it through
/// [`Field::group_id`] and its value is the aggregate of theirs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Email,
    Date,
    Dropdown,
    Radio,
    Checkbox,
    Group,
}

/// A single form input definition as the builder persists it.
///
/// The resolver only looks at `id`, `kind`, and `group_id`; display
/// attributes such as `label` ride along in the document format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Field {
    pub fn is_group(&self) -> bool {
        self.kind == FieldType::Group
    }
}
