pub mod field;
pub mod form;
pub mod rule;

pub use field::{Field, FieldType};
pub use form::FormDefinition;
pub use rule::{Action, ActionType, Condition, LogicType, Operator, Rule};
