use super::component::Component;
use super::types::{ConditionWrapperV2, FormDefinition, List, Page};
use crate::conditions::{ConditionField, ConditionWrapper};
use crate::error::DefinitionError;

/// Lenient page lookup; stale paths yield `None`.
pub fn find_page<'a>(definition: &'a FormDefinition, path: &str) -> Option<&'a Page> {
    definition.pages.iter().find(|page| page.path == path)
}

/// Strict page lookup by position, for edits that must not act on dead paths.
pub(crate) fn require_page_index(
    definition: &FormDefinition,
    path: &str,
) -> Result<usize, DefinitionError> {
    definition
        .pages
        .iter()
        .position(|page| page.path == path)
        .ok_or_else(|| DefinitionError::PageNotFound(path.to_string()))
}

pub fn find_component<'a>(
    definition: &'a FormDefinition,
    page_path: &str,
    component_name: &str,
) -> Result<&'a Component, DefinitionError> {
    let page = find_page(definition, page_path)
        .ok_or_else(|| DefinitionError::PageNotFound(page_path.to_string()))?;
    page.components
        .iter()
        .find(|component| component.name == component_name)
        .ok_or_else(|| DefinitionError::ComponentNotFound(component_name.to_string()))
}

pub fn find_list<'a>(definition: &'a FormDefinition, name: &str) -> Result<&'a List, DefinitionError> {
    definition
        .lists
        .iter()
        .find(|list| list.name == name)
        .ok_or_else(|| DefinitionError::ListNotFound(name.to_string()))
}

/// Resolves the list a list-backed component draws its options from.
pub fn list_for_component<'a>(
    definition: &'a FormDefinition,
    component: &Component,
) -> Result<&'a List, DefinitionError> {
    match (&component.list, component.component_type.is_list_backed()) {
        (Some(list), true) => find_list(definition, list),
        _ => Err(DefinitionError::NotListComponent(component.name.clone())),
    }
}

/// Looks up a name-addressed condition.
pub fn find_condition<'a>(
    definition: &'a FormDefinition,
    name: &str,
) -> Result<&'a ConditionWrapper, DefinitionError> {
    definition
        .legacy_conditions()
        .find(|wrapper| wrapper.name == name)
        .ok_or_else(|| DefinitionError::ConditionNotFound(name.to_string()))
}

/// Looks up an id-addressed condition. A miss is an error, unlike page lookups.
pub fn get_condition_v2<'a>(
    definition: &'a FormDefinition,
    condition_id: &str,
) -> Result<&'a ConditionWrapperV2, DefinitionError> {
    definition
        .v2_conditions()
        .find(|wrapper| wrapper.id == condition_id)
        .ok_or_else(|| DefinitionError::ConditionNotFound(condition_id.to_string()))
}

/// Fields conditions can be written against: every input component, in page order.
pub fn condition_fields(definition: &FormDefinition) -> Vec<ConditionField> {
    definition
        .pages
        .iter()
        .flat_map(|page| page.components.iter())
        .filter(|component| component.component_type.is_input())
        .map(|component| {
            ConditionField::new(&component.name, component.component_type, &component.title)
        })
        .collect()
}
