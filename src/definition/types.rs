use super::component::Component;
use crate::conditions::{ConditionWrapper, Coordinator, OperatorName};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The aggregate root of a form: pages, lists, sections and named conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub lists: Vec<List>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub conditions: Vec<FormCondition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<Output>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_summary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_page: Option<String>,
}

impl FormDefinition {
    /// Name-addressed conditions, skipping id-addressed ones.
    pub fn legacy_conditions(&self) -> impl Iterator<Item = &ConditionWrapper> {
        self.conditions.iter().filter_map(|c| match c {
            FormCondition::Legacy(wrapper) => Some(wrapper),
            FormCondition::V2(_) => None,
        })
    }

    pub fn v2_conditions(&self) -> impl Iterator<Item = &ConditionWrapperV2> {
        self.conditions.iter().filter_map(|c| match c {
            FormCondition::V2(wrapper) => Some(wrapper),
            FormCondition::Legacy(_) => None,
        })
    }
}

/// A page in the form. Its `path` is its identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub path: String,
    pub title: String,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub next: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,
}

impl Page {
    pub fn new(path: &str, title: &str) -> Self {
        Self {
            path: path.to_string(),
            title: title.to_string(),
            components: Vec::new(),
            next: Vec::new(),
            section: None,
            controller: None,
        }
    }

    pub fn links_to(&self, path: &str) -> bool {
        self.next.iter().any(|link| link.path == path)
    }
}

/// An edge of the page graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// Optional attributes of a newly added link.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkOptions {
    pub condition: Option<String>,
    pub redirect: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hide_title: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    String,
    Number,
    Boolean,
}

/// A named set of options used by list-backed components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub list_type: ListType,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub text: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub output_type: String,
    #[serde(default)]
    pub output_configuration: Value,
}

/// An id-addressed condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionWrapperV2 {
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<Coordinator>,
    pub items: Vec<ConditionItemV2>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionItemV2 {
    #[serde(rename_all = "camelCase")]
    Ref { id: String, condition_id: String },
    #[serde(rename_all = "camelCase")]
    Value {
        id: String,
        component_id: String,
        operator: OperatorName,
        value: Value,
    },
}

/// Either shape of a form-level condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormCondition {
    V2(ConditionWrapperV2),
    Legacy(ConditionWrapper),
}

impl From<ConditionWrapper> for FormCondition {
    fn from(wrapper: ConditionWrapper) -> Self {
        FormCondition::Legacy(wrapper)
    }
}

impl From<ConditionWrapperV2> for FormCondition {
    fn from(wrapper: ConditionWrapperV2) -> Self {
        FormCondition::V2(wrapper)
    }
}
