//! Plain serialized shapes of condition trees and the helpers that classify them.
//!
//! These mirror the JSON stored in a form definition and carry no invariants;
//! `model` converts them into validated condition nodes.

use super::coordinator::Coordinator;
use super::operators::OperatorName;
use super::value::{ConditionField, ConditionValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionData {
    pub field: ConditionField,
    pub operator: OperatorName,
    pub value: ConditionValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<Coordinator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRefData {
    pub condition_name: String,
    pub condition_display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<Coordinator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionGroupData {
    pub conditions: Vec<AnyConditionData>,
}

/// Any serialized condition node. Discriminated by which key is present:
/// `conditions` for a group, `conditionName` for a ref, `field` for a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnyConditionData {
    Group(ConditionGroupData),
    Ref(ConditionRefData),
    Value(ConditionData),
}

/// The value of a named condition: its name plus a flat, ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionsModelData {
    pub name: String,
    pub conditions: Vec<AnyConditionData>,
}

/// A named, reusable condition stored at form level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionWrapper {
    pub name: String,
    pub display_name: String,
    pub value: ConditionsModelData,
}

impl ConditionWrapper {
    pub fn new(name: &str, display_name: &str, conditions: Vec<AnyConditionData>) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            value: ConditionsModelData {
                name: name.to_string(),
                conditions,
            },
        }
    }
}

pub fn has_condition_field(condition: &AnyConditionData) -> bool {
    matches!(condition, AnyConditionData::Value(_))
}

pub fn has_condition_group(condition: &AnyConditionData) -> bool {
    matches!(condition, AnyConditionData::Group(_))
}

pub fn has_condition_name(condition: &AnyConditionData) -> bool {
    matches!(condition, AnyConditionData::Ref(_))
}

/// `true` when any top-level member of the wrapper refers to another named condition.
pub fn has_nested_condition(wrapper: &ConditionWrapper) -> bool {
    wrapper.value.conditions.iter().any(has_condition_name)
}

pub fn is_duplicate_condition<'a>(
    conditions: impl IntoIterator<Item = &'a ConditionWrapper>,
    name: &str,
) -> bool {
    conditions.into_iter().any(|c| c.name == name)
}
