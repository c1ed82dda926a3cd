use super::types::{ConditionItemV2, FormDefinition};
use crate::conditions::{AnyConditionData, ConditionWrapper, ConditionsModel};
use crate::error::DefinitionError;
use ahash::AHashSet;
use tracing::warn;

/// Fails on the first condition ref, or link condition, naming a condition the
/// definition does not hold. Refs nested inside groups are checked too.
pub fn check_condition_refs(definition: &FormDefinition) -> Result<(), DefinitionError> {
    let names: AHashSet<&str> = definition
        .legacy_conditions()
        .map(|wrapper| wrapper.name.as_str())
        .chain(definition.v2_conditions().map(|wrapper| wrapper.id.as_str()))
        .collect();

    for wrapper in definition.legacy_conditions() {
        let mut refs = Vec::new();
        collect_refs(&wrapper.value.conditions, &mut refs);
        if let Some(missing) = refs.into_iter().find(|r| !names.contains(r)) {
            return Err(dangling(&wrapper.name, missing));
        }
    }

    for wrapper in definition.v2_conditions() {
        for item in &wrapper.items {
            if let ConditionItemV2::Ref { condition_id, .. } = item {
                if !names.contains(condition_id.as_str()) {
                    return Err(dangling(&wrapper.id, condition_id));
                }
            }
        }
    }

    for page in &definition.pages {
        for link in &page.next {
            if let Some(condition) = link.condition.as_deref() {
                if !names.contains(condition) {
                    let owner = format!("{} -> {}", page.path, link.path);
                    return Err(dangling(&owner, condition));
                }
            }
        }
    }

    Ok(())
}

/// Parses every name-addressed condition into an editable model.
pub fn load_conditions(
    definition: &FormDefinition,
) -> Result<Vec<(&ConditionWrapper, ConditionsModel)>, DefinitionError> {
    definition
        .legacy_conditions()
        .map(|wrapper| {
            ConditionsModel::from_data(&wrapper.value)
                .map(|model| (wrapper, model))
                .map_err(|source| DefinitionError::InvalidCondition {
                    name: wrapper.name.clone(),
                    source,
                })
        })
        .collect()
}

fn collect_refs<'a>(conditions: &'a [AnyConditionData], refs: &mut Vec<&'a str>) {
    for condition in conditions {
        match condition {
            AnyConditionData::Ref(reference) => refs.push(&reference.condition_name),
            AnyConditionData::Group(group) => collect_refs(&group.conditions, refs),
            AnyConditionData::Value(_) => {}
        }
    }
}

fn dangling(owner: &str, reference: &str) -> DefinitionError {
    warn!(owner, reference, "dangling condition reference");
    DefinitionError::DanglingConditionRef {
        owner: owner.to_string(),
        reference: reference.to_string(),
    }
}
