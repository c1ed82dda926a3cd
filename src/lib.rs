//! # form-logic - Condition Trees and Page Graphs for Form Definitions
//!
//! **form-logic** models the data layer behind a GOV.UK form designer: named
//! conditions built from value predicates, references and parenthesized
//! groups, and the directed graph of pages those conditions route between.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Definition**: Deserialize a `FormDefinition` from JSON with `serde_json`.
//! 2.  **Build Conditions**: Create `Condition`, `ConditionRef` and `ConditionGroup` nodes, or load them from their serialized shapes with `condition_from`.
//! 3.  **Render**: Turn any node, or a whole `ConditionsModel`, into a presentation string, an HTML fragment or a machine expression.
//! 4.  **Edit**: Link pages, rename paths and store conditions. Edits never mutate their input; they return a new definition, or the input itself when nothing changed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use form_logic::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let country = ConditionField::new("country", ComponentType::SelectField, "Country");
//!     let age = ConditionField::new("age", ComponentType::NumberField, "Age");
//!
//!     let mut model = ConditionsModel::new();
//!     model.add(
//!         Condition::new(
//!             country,
//!             OperatorName::Is,
//!             ConditionValue::literal("england", "England"),
//!             None,
//!         )?
//!         .into(),
//!     )?;
//!     model.add(
//!         Condition::new(
//!             age,
//!             OperatorName::IsAtLeast,
//!             ConditionValue::literal("18", "18"),
//!             Some(Coordinator::And),
//!         )?
//!         .into(),
//!     )?;
//!
//!     // 'Country' is 'England' and 'Age' is at least '18'
//!     println!("{}", model.to_presentation_string());
//!     // country == 'england' and age >= 18
//!     println!("{}", model.to_expression());
//!
//!     let json = std::fs::read_to_string("path/to/form.json")?;
//!     let definition: FormDefinition = serde_json::from_str(&json)?;
//!     let definition = add_condition(&definition, "adultInEngland", "Adult in England", &model)?;
//!     let linked = add_link(&definition, "/start", "/adult", LinkOptions {
//!         condition: Some("adultInEngland".to_string()),
//!         ..LinkOptions::default()
//!     })?;
//!
//!     println!("{:?}", find_paths_to(&linked, "/adult"));
//!     Ok(())
//! }
//! ```

pub mod conditions;
pub mod definition;
pub mod error;
pub mod prelude;
