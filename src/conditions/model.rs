use super::coordinator::Coordinator;
use super::data::{AnyConditionData, ConditionData, ConditionGroupData, ConditionRefData};
use super::format::{escape_html, to_expression, to_presentation_html, to_presentation_string};
use super::operators::{OperatorName, Rendering, render, resolve};
use super::value::{ConditionField, ConditionValue};
use crate::error::ConditionError;
use itertools::Itertools;

/// The surface shared by every node of a condition tree.
///
/// Formatting helpers only go through this trait, so plain conditions, refs and
/// groups are rendered the same way.
pub trait Conditional {
    fn coordinator(&self) -> Option<Coordinator>;

    fn set_coordinator(&mut self, coordinator: Option<Coordinator>);

    /// Human-readable predicate text.
    fn condition_string(&self) -> String;

    /// Machine-oriented expression fragment.
    fn condition_expression(&self) -> String;

    fn condition_html(&self) -> String {
        escape_html(&self.condition_string())
    }

    fn is_group(&self) -> bool {
        false
    }

    fn coordinator_string(&self) -> String {
        self.coordinator()
            .map(|c| format!("{} ", c))
            .unwrap_or_default()
    }

    fn coordinator_html(&self) -> String {
        self.coordinator()
            .map(|c| format!("<strong>{}</strong> ", c))
            .unwrap_or_default()
    }

    /// Normalizes the node for list position 0.
    fn as_first_condition(&mut self) {
        self.set_coordinator(None);
    }
}

/// A single predicate over a form field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Condition {
    field: ConditionField,
    operator: OperatorName,
    value: ConditionValue,
    coordinator: Option<Coordinator>,
    rendering: Rendering,
}

impl Condition {
    /// Builds a condition, rejecting operators the field type does not support.
    pub fn new(
        field: ConditionField,
        operator: OperatorName,
        value: ConditionValue,
        coordinator: Option<Coordinator>,
    ) -> Result<Self, ConditionError> {
        let rendering = resolve(field.field_type, operator, &value)?;
        Ok(Self {
            field,
            operator,
            value,
            coordinator,
            rendering,
        })
    }

    pub fn field(&self) -> &ConditionField {
        &self.field
    }

    pub fn operator(&self) -> OperatorName {
        self.operator
    }

    pub fn value(&self) -> &ConditionValue {
        &self.value
    }

    pub fn to_json(&self) -> ConditionData {
        ConditionData {
            field: self.field.clone(),
            operator: self.operator,
            value: self.value.clone(),
            coordinator: self.coordinator,
        }
    }
}

impl Conditional for Condition {
    fn coordinator(&self) -> Option<Coordinator> {
        self.coordinator
    }

    fn set_coordinator(&mut self, coordinator: Option<Coordinator>) {
        self.coordinator = coordinator;
    }

    fn condition_string(&self) -> String {
        format!(
            "'{}' {} '{}'",
            self.field.display,
            self.operator,
            self.value.to_presentation_string()
        )
    }

    fn condition_expression(&self) -> String {
        render(
            self.rendering,
            self.field.field_type,
            &self.field.name,
            &self.value,
        )
    }
}

impl TryFrom<&ConditionData> for Condition {
    type Error = ConditionError;

    fn try_from(data: &ConditionData) -> Result<Self, Self::Error> {
        Condition::new(
            data.field.clone(),
            data.operator,
            data.value.clone(),
            data.coordinator,
        )
    }
}

/// A reference, by name, to another named condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConditionRef {
    condition_name: String,
    condition_display_name: String,
    coordinator: Option<Coordinator>,
}

impl ConditionRef {
    pub fn new(
        condition_name: &str,
        condition_display_name: &str,
        coordinator: Option<Coordinator>,
    ) -> Self {
        Self {
            condition_name: condition_name.to_string(),
            condition_display_name: condition_display_name.to_string(),
            coordinator,
        }
    }

    pub fn condition_name(&self) -> &str {
        &self.condition_name
    }

    pub fn condition_display_name(&self) -> &str {
        &self.condition_display_name
    }

    pub fn to_json(&self) -> ConditionRefData {
        ConditionRefData {
            condition_name: self.condition_name.clone(),
            condition_display_name: self.condition_display_name.clone(),
            coordinator: self.coordinator,
        }
    }
}

impl Conditional for ConditionRef {
    fn coordinator(&self) -> Option<Coordinator> {
        self.coordinator
    }

    fn set_coordinator(&mut self, coordinator: Option<Coordinator>) {
        self.coordinator = coordinator;
    }

    fn condition_string(&self) -> String {
        format!("'{}'", self.condition_display_name)
    }

    fn condition_expression(&self) -> String {
        self.condition_name.clone()
    }
}

impl From<&ConditionRefData> for ConditionRef {
    fn from(data: &ConditionRefData) -> Self {
        ConditionRef::new(
            &data.condition_name,
            &data.condition_display_name,
            data.coordinator,
        )
    }
}

/// A parenthesized run of two or more nodes.
///
/// The group has no coordinator of its own: it is its first member's.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConditionGroup {
    conditions: Vec<ConditionNode>,
}

impl ConditionGroup {
    pub fn new(conditions: Vec<ConditionNode>) -> Result<Self, ConditionError> {
        if conditions.len() < 2 {
            return Err(ConditionError::SingleConditionGroup);
        }
        Ok(Self { conditions })
    }

    pub fn from_data(data: &ConditionGroupData) -> Result<Self, ConditionError> {
        let conditions = data
            .conditions
            .iter()
            .map(condition_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(conditions)
    }

    /// Normalizes an existing group into an independent copy.
    pub fn from_instance(group: &ConditionGroup) -> Self {
        group.clone()
    }

    pub fn conditions(&self) -> &[ConditionNode] {
        &self.conditions
    }

    /// Deep copies of the members, safe to edit without touching this group.
    pub fn grouped_conditions(&self) -> Vec<ConditionNode> {
        self.conditions.clone()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn to_json(&self) -> ConditionGroupData {
        ConditionGroupData {
            conditions: self.conditions.iter().map(ConditionNode::to_json).collect(),
        }
    }

    fn first(&self) -> &ConditionNode {
        &self.conditions[0]
    }
}

impl Conditional for ConditionGroup {
    fn coordinator(&self) -> Option<Coordinator> {
        self.first().coordinator()
    }

    fn set_coordinator(&mut self, coordinator: Option<Coordinator>) {
        self.conditions[0].set_coordinator(coordinator);
    }

    fn condition_string(&self) -> String {
        format!(
            "({} {})",
            self.first().condition_string(),
            self.conditions[1..]
                .iter()
                .map(|c| to_presentation_string(c))
                .join(" ")
        )
    }

    fn condition_html(&self) -> String {
        format!(
            "({} {})",
            self.first().condition_html(),
            self.conditions[1..]
                .iter()
                .map(|c| to_presentation_html(c))
                .join(" ")
        )
    }

    fn condition_expression(&self) -> String {
        format!(
            "({} {})",
            self.first().condition_expression(),
            self.conditions[1..]
                .iter()
                .map(|c| to_expression(c))
                .join(" ")
        )
    }

    fn is_group(&self) -> bool {
        true
    }

    fn as_first_condition(&mut self) {
        self.conditions[0].as_first_condition();
    }
}

impl TryFrom<&ConditionGroupData> for ConditionGroup {
    type Error = ConditionError;

    fn try_from(data: &ConditionGroupData) -> Result<Self, Self::Error> {
        ConditionGroup::from_data(data)
    }
}

/// Any node of a condition tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConditionNode {
    Value(Condition),
    Ref(ConditionRef),
    Group(ConditionGroup),
}

impl ConditionNode {
    pub fn to_json(&self) -> AnyConditionData {
        match self {
            ConditionNode::Value(c) => AnyConditionData::Value(c.to_json()),
            ConditionNode::Ref(r) => AnyConditionData::Ref(r.to_json()),
            ConditionNode::Group(g) => AnyConditionData::Group(g.to_json()),
        }
    }

    /// Same node, normalized for list position 0.
    pub fn into_first(mut self) -> Self {
        self.as_first_condition();
        self
    }

    pub fn with_coordinator(mut self, coordinator: Option<Coordinator>) -> Self {
        self.set_coordinator(coordinator);
        self
    }

    fn inner(&self) -> &dyn Conditional {
        match self {
            ConditionNode::Value(c) => c,
            ConditionNode::Ref(r) => r,
            ConditionNode::Group(g) => g,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Conditional {
        match self {
            ConditionNode::Value(c) => c,
            ConditionNode::Ref(r) => r,
            ConditionNode::Group(g) => g,
        }
    }
}

impl Conditional for ConditionNode {
    fn coordinator(&self) -> Option<Coordinator> {
        self.inner().coordinator()
    }

    fn set_coordinator(&mut self, coordinator: Option<Coordinator>) {
        self.inner_mut().set_coordinator(coordinator);
    }

    fn condition_string(&self) -> String {
        self.inner().condition_string()
    }

    fn condition_expression(&self) -> String {
        self.inner().condition_expression()
    }

    fn condition_html(&self) -> String {
        self.inner().condition_html()
    }

    fn is_group(&self) -> bool {
        self.inner().is_group()
    }

    fn as_first_condition(&mut self) {
        self.inner_mut().as_first_condition();
    }
}

impl From<Condition> for ConditionNode {
    fn from(condition: Condition) -> Self {
        ConditionNode::Value(condition)
    }
}

impl From<ConditionRef> for ConditionNode {
    fn from(reference: ConditionRef) -> Self {
        ConditionNode::Ref(reference)
    }
}

impl From<ConditionGroup> for ConditionNode {
    fn from(group: ConditionGroup) -> Self {
        ConditionNode::Group(group)
    }
}

impl TryFrom<&AnyConditionData> for ConditionNode {
    type Error = ConditionError;

    fn try_from(data: &AnyConditionData) -> Result<Self, Self::Error> {
        condition_from(data)
    }
}

/// Builds a validated node from any serialized condition shape.
pub fn condition_from(data: &AnyConditionData) -> Result<ConditionNode, ConditionError> {
    Ok(match data {
        AnyConditionData::Group(group) => ConditionNode::Group(ConditionGroup::from_data(group)?),
        AnyConditionData::Ref(reference) => ConditionNode::Ref(reference.into()),
        AnyConditionData::Value(value) => ConditionNode::Value(value.try_into()?),
    })
}
