use serde::{Deserialize, Serialize};

/// A placement rule restricting which hosts a task may run on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Host attribute the constraint is matched against.
    pub name: String,
    pub constraint: TaskConstraint,
}

/// Exactly one constraint kind is populated per constraint; the two
/// variants are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaskConstraint {
    Value(ValueConstraint),
    Limit(LimitConstraint),
}

/// Matches (or, when negated, avoids) a set of attribute values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueConstraint {
    pub negated: bool,
    pub values: Vec<String>,
}

/// Caps the number of tasks scheduled simultaneously on hosts sharing
/// an attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitConstraint {
    pub limit: i32,
}

impl Constraint {
    pub fn value(name: impl Into<String>, negated: bool, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            constraint: TaskConstraint::Value(ValueConstraint { negated, values }),
        }
    }

    pub fn limit(name: impl Into<String>, limit: i32) -> Self {
        Self {
            name: name.into(),
            constraint: TaskConstraint::Limit(LimitConstraint { limit }),
        }
    }
}
