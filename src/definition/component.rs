use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Every component type a page can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    // Inputs
    TextField,
    MultilineTextField,
    YesNoField,
    DateField,
    DatePartsField,
    MonthYearField,
    TimeField,
    DateTimeField,
    DateTimePartsField,
    NumberField,
    EmailAddressField,
    TelephoneNumberField,
    UkAddressField,
    FileUploadField,

    // List-backed inputs
    RadiosField,
    CheckboxesField,
    SelectField,
    AutocompleteField,

    // Content
    Html,
    InsetText,
    Details,
    List,
    Markdown,
}

impl ComponentType {
    /// `true` for components that collect an answer.
    pub fn is_input(&self) -> bool {
        !self.is_content()
    }

    /// `true` for components that only display content.
    pub fn is_content(&self) -> bool {
        matches!(
            self,
            ComponentType::Html
                | ComponentType::InsetText
                | ComponentType::Details
                | ComponentType::List
                | ComponentType::Markdown
        )
    }

    /// `true` for components that draw their options from a named list.
    ///
    /// `List` is a content component but still renders a list's items.
    pub fn is_list_backed(&self) -> bool {
        matches!(
            self,
            ComponentType::RadiosField
                | ComponentType::CheckboxesField
                | ComponentType::SelectField
                | ComponentType::AutocompleteField
                | ComponentType::List
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::TextField => "TextField",
            ComponentType::MultilineTextField => "MultilineTextField",
            ComponentType::YesNoField => "YesNoField",
            ComponentType::DateField => "DateField",
            ComponentType::DatePartsField => "DatePartsField",
            ComponentType::MonthYearField => "MonthYearField",
            ComponentType::TimeField => "TimeField",
            ComponentType::DateTimeField => "DateTimeField",
            ComponentType::DateTimePartsField => "DateTimePartsField",
            ComponentType::NumberField => "NumberField",
            ComponentType::EmailAddressField => "EmailAddressField",
            ComponentType::TelephoneNumberField => "TelephoneNumberField",
            ComponentType::UkAddressField => "UkAddressField",
            ComponentType::FileUploadField => "FileUploadField",
            ComponentType::RadiosField => "RadiosField",
            ComponentType::CheckboxesField => "CheckboxesField",
            ComponentType::SelectField => "SelectField",
            ComponentType::AutocompleteField => "AutocompleteField",
            ComponentType::Html => "Html",
            ComponentType::InsetText => "InsetText",
            ComponentType::Details => "Details",
            ComponentType::List => "List",
            ComponentType::Markdown => "Markdown",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single component on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default)]
    pub options: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub schema: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
}

impl Component {
    pub fn new(component_type: ComponentType, name: &str, title: &str) -> Self {
        Self {
            component_type,
            name: name.to_string(),
            title: title.to_string(),
            hint: None,
            options: Map::new(),
            schema: Map::new(),
            list: None,
        }
    }

    pub fn with_list(mut self, list: &str) -> Self {
        self.list = Some(list.to_string());
        self
    }
}
