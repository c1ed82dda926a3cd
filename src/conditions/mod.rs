//! Condition trees: values, refs and groups, plus their serialized shapes.

pub mod conditions_model;
pub mod coordinator;
pub mod data;
pub mod format;
pub mod model;
pub mod operators;
pub mod value;

pub use conditions_model::*;
pub use coordinator::*;
pub use data::*;
pub use format::{to_expression, to_presentation_html, to_presentation_string};
pub use model::*;
pub use operators::*;
pub use value::*;
