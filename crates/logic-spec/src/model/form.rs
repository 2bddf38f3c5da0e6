use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::field::Field;
use crate::model::rule::Rule;

/// Top-level form document as the builder hands it around.
///
/// The resolver consumes `fields` and `rules` directly; the rest is
/// metadata carried by the persisted payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
}
