//! Prelude module for convenient imports
//!
//! Re-exports the condition model, the definition types and the graph helpers
//! so that most callers need a single `use`.
//!
//! # Example
//!
//! ```rust,no_run
//! use form_logic::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/form.json")?;
//! let definition: FormDefinition = serde_json::from_str(&json)?;
//!
//! for (wrapper, model) in load_conditions(&definition)? {
//!     println!("{}: {}", wrapper.display_name, model.to_presentation_string());
//! }
//! println!("{:?}", find_paths_to(&definition, "/summary"));
//! # Ok(())
//! # }
//! ```

// Condition trees
pub use crate::conditions::{
    AnyConditionData, Condition, ConditionField, ConditionGroup, ConditionNode, ConditionRef,
    ConditionValue, ConditionWrapper, Conditional, ConditionsModel, Coordinator, DateDirection,
    GroupDef, OperatorName, RelativeTimeValue, TimeUnit, condition_from, to_expression,
    to_presentation_html, to_presentation_string,
};

// Definitions and the page graph
pub use crate::definition::{
    Component, ComponentType, FormCondition, FormDefinition, Link, LinkOptions, List, Page,
    add_component, add_condition, add_link, check_condition_refs, delete_condition, find_page,
    find_paths_to, get_condition_v2, load_conditions, update_conditions, update_links_to,
};

// Error types
pub use crate::error::{ConditionError, DefinitionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
