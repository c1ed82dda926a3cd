//! Copy-on-write edits. Each returns a new definition, or the input itself when
//! the edit would change nothing.

use super::component::Component;
use super::lookup::require_page_index;
use super::types::{FormCondition, FormDefinition, Page};
use crate::conditions::{ConditionWrapper, ConditionsModel, is_duplicate_condition};
use crate::error::DefinitionError;
use std::borrow::Cow;
use tracing::debug;

pub const SUMMARY_PATH: &str = "/summary";
const SUMMARY_CONTROLLER: &str = "SummaryPageController";

/// A new, empty definition holding only the summary page.
pub fn blank_definition() -> FormDefinition {
    let mut summary = Page::new(SUMMARY_PATH, "Summary");
    summary.controller = Some(SUMMARY_CONTROLLER.to_string());
    FormDefinition {
        pages: vec![summary],
        start_page: Some(SUMMARY_PATH.to_string()),
        ..FormDefinition::default()
    }
}

pub fn add_component(
    definition: &FormDefinition,
    page_path: &str,
    component: Component,
) -> Result<FormDefinition, DefinitionError> {
    let page_index = require_page_index(definition, page_path)?;
    let mut updated = definition.clone();
    updated.pages[page_index].components.push(component);
    Ok(updated)
}

/// Replaces the component named `component_name` on the page.
pub fn update_component<'a>(
    definition: &'a FormDefinition,
    page_path: &str,
    component_name: &str,
    component: Component,
) -> Result<Cow<'a, FormDefinition>, DefinitionError> {
    let page_index = require_page_index(definition, page_path)?;
    let component_index = definition.pages[page_index]
        .components
        .iter()
        .position(|c| c.name == component_name)
        .ok_or_else(|| DefinitionError::ComponentNotFound(component_name.to_string()))?;

    if definition.pages[page_index].components[component_index] == component {
        return Ok(Cow::Borrowed(definition));
    }

    let mut updated = definition.clone();
    updated.pages[page_index].components[component_index] = component;
    Ok(Cow::Owned(updated))
}

/// Stores `model` as a new named condition.
pub fn add_condition(
    definition: &FormDefinition,
    name: &str,
    display_name: &str,
    model: &ConditionsModel,
) -> Result<FormDefinition, DefinitionError> {
    if is_duplicate_condition(definition.legacy_conditions(), name) {
        return Err(DefinitionError::DuplicateCondition(name.to_string()));
    }

    let mut updated = definition.clone();
    updated
        .conditions
        .push(FormCondition::Legacy(wrap(name, display_name, model)));
    debug!(name, "added condition");
    Ok(updated)
}

/// Replaces the value and display name of the named condition.
pub fn update_conditions<'a>(
    definition: &'a FormDefinition,
    name: &str,
    display_name: &str,
    model: &ConditionsModel,
) -> Result<Cow<'a, FormDefinition>, DefinitionError> {
    let index = legacy_condition_index(definition, name)?;
    let replacement = FormCondition::Legacy(wrap(name, display_name, model));

    if definition.conditions[index] == replacement {
        debug!(name, "condition unchanged");
        return Ok(Cow::Borrowed(definition));
    }

    let mut updated = definition.clone();
    updated.conditions[index] = replacement;
    Ok(Cow::Owned(updated))
}

/// Removes the named condition and every link or list item gated on it.
pub fn delete_condition(
    definition: &FormDefinition,
    name: &str,
) -> Result<FormDefinition, DefinitionError> {
    let index = legacy_condition_index(definition, name)?;

    let mut updated = definition.clone();
    updated.conditions.remove(index);

    let mut stripped = 0usize;
    for link in updated.pages.iter_mut().flat_map(|page| page.next.iter_mut()) {
        if link.condition.as_deref() == Some(name) {
            link.condition = None;
            stripped += 1;
        }
    }
    for item in updated.lists.iter_mut().flat_map(|list| list.items.iter_mut()) {
        if item.condition.as_deref() == Some(name) {
            item.condition = None;
            stripped += 1;
        }
    }

    debug!(name, stripped, "deleted condition");
    Ok(updated)
}

fn wrap(name: &str, display_name: &str, model: &ConditionsModel) -> ConditionWrapper {
    let mut value = model.to_json();
    value.name = name.to_string();
    ConditionWrapper {
        name: name.to_string(),
        display_name: display_name.to_string(),
        value,
    }
}

fn legacy_condition_index(
    definition: &FormDefinition,
    name: &str,
) -> Result<usize, DefinitionError> {
    definition
        .conditions
        .iter()
        .position(|c| matches!(c, FormCondition::Legacy(w) if w.name == name))
        .ok_or_else(|| DefinitionError::ConditionNotFound(name.to_string()))
}
