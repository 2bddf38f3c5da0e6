#![allow(missing_docs)]

pub mod model;
pub mod resolver;
pub mod value;

pub use model::{
    Action, ActionType, Condition, Field, FieldType, FormDefinition, LogicType, Operator, Rule,
};
pub use resolver::{VisibilityMap, resolve_hidden, resolve_visibility};
pub use value::{aggregate_group, effective_entries, is_group_source, normalize};
