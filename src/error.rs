use crate::conditions::{OperatorName, TimeUnit};
use crate::definition::ComponentType;
use thiserror::Error;

/// Errors raised while building or editing condition trees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("Cannot construct a condition group from a single condition")]
    SingleConditionGroup,

    #[error("Operator '{operator}' is not supported for fields of type '{field_type}'")]
    UnsupportedOperator {
        operator: OperatorName,
        field_type: ComponentType,
    },

    #[error("Operator '{operator}' requires a {expected} value")]
    ValueKindMismatch {
        operator: OperatorName,
        expected: &'static str,
    },

    #[error("Time unit '{unit}' cannot be used with fields of type '{field_type}'")]
    UnsupportedTimeUnit {
        unit: TimeUnit,
        field_type: ComponentType,
    },

    #[error("Time period '{0}' is not a whole number")]
    InvalidTimePeriod(String),

    #[error("No coordinator allowed on the first condition")]
    CoordinatorOnFirst,

    #[error("Coordinator must be present on subsequent conditions")]
    MissingCoordinator,

    #[error("Cannot replace condition {0} as no such condition exists")]
    NoSuchCondition(usize),

    #[error("last must be after first")]
    InvalidGroupRange { first: usize, last: usize },

    #[error("Group starting at {first} overlaps a group ending at {last}")]
    OverlappingGroups { first: usize, last: usize },
}

/// Errors raised by lookups, link edits and integrity checks on a form definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Page not found for path '{0}'")]
    PageNotFound(String),

    #[error("Link must be between different pages")]
    SelfLink,

    #[error("Link from '{from}' to '{to}' not found")]
    LinkNotFound { from: String, to: String },

    #[error("Component not found with name '{0}'")]
    ComponentNotFound(String),

    #[error("Component '{0}' is not backed by a list")]
    NotListComponent(String),

    #[error("List not found with name '{0}'")]
    ListNotFound(String),

    #[error("Condition '{0}' not found in form")]
    ConditionNotFound(String),

    #[error("Duplicate condition name '{0}'")]
    DuplicateCondition(String),

    #[error("Condition '{reference}' referenced by '{owner}' does not exist")]
    DanglingConditionRef { owner: String, reference: String },

    #[error("Condition '{name}' is invalid: {source}")]
    InvalidCondition {
        name: String,
        #[source]
        source: ConditionError,
    },
}
