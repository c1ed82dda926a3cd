//! Common test utilities for building conditions and form definitions.
use form_logic::prelude::*;

#[allow(dead_code)]
pub fn country_field() -> ConditionField {
    ConditionField::new("country", ComponentType::SelectField, "Country")
}

#[allow(dead_code)]
pub fn age_field() -> ConditionField {
    ConditionField::new("age", ComponentType::NumberField, "Age")
}

#[allow(dead_code)]
pub fn member_field() -> ConditionField {
    ConditionField::new("member", ComponentType::YesNoField, "Member")
}

/// `'Country' is 'England'`
#[allow(dead_code)]
pub fn is_england(coordinator: Option<Coordinator>) -> ConditionNode {
    Condition::new(
        country_field(),
        OperatorName::Is,
        ConditionValue::literal("england", "England"),
        coordinator,
    )
    .expect("valid condition")
    .into()
}

/// `'Age' is at least '18'`
#[allow(dead_code)]
pub fn is_adult(coordinator: Option<Coordinator>) -> ConditionNode {
    Condition::new(
        age_field(),
        OperatorName::IsAtLeast,
        ConditionValue::literal("18", "18"),
        coordinator,
    )
    .expect("valid condition")
    .into()
}

/// `'Member' is 'Yes'`
#[allow(dead_code)]
pub fn is_member(coordinator: Option<Coordinator>) -> ConditionNode {
    Condition::new(
        member_field(),
        OperatorName::Is,
        ConditionValue::literal("true", "Yes"),
        coordinator,
    )
    .expect("valid condition")
    .into()
}

/// Builds a model from nodes, in order.
#[allow(dead_code)]
pub fn model_of(nodes: Vec<ConditionNode>) -> ConditionsModel {
    let mut model = ConditionsModel::new();
    for node in nodes {
        model.add(node).expect("valid position");
    }
    model
}

/// A page with no components linking to each of `next`.
#[allow(dead_code)]
pub fn page(path: &str, next: &[&str]) -> Page {
    let mut page = Page::new(path, &format!("Page {}", path));
    page.next = next
        .iter()
        .map(|p| Link {
            path: p.to_string(),
            ..Link::default()
        })
        .collect();
    page
}

#[allow(dead_code)]
pub fn definition_of(pages: Vec<Page>) -> FormDefinition {
    FormDefinition {
        pages,
        ..FormDefinition::default()
    }
}

/// `/1 <-> /2`
#[allow(dead_code)]
pub fn create_cycle_definition() -> FormDefinition {
    definition_of(vec![page("/1", &["/2"]), page("/2", &["/1"])])
}

/// `/1 -> /2, /3; /2 -> /4; /3 -> /4`
#[allow(dead_code)]
pub fn create_diamond_definition() -> FormDefinition {
    definition_of(vec![
        page("/1", &["/2", "/3"]),
        page("/2", &["/4"]),
        page("/3", &["/4"]),
        page("/4", &[]),
    ])
}

/// A small but complete definition in its stored JSON form.
#[allow(dead_code)]
pub const SAMPLE_DEFINITION_JSON: &str = r#"{
  "startPage": "/country",
  "pages": [
    {
      "path": "/country",
      "title": "Where do you live?",
      "components": [
        {
          "type": "SelectField",
          "name": "country",
          "title": "Country",
          "options": {},
          "list": "countries"
        }
      ],
      "next": [
        { "path": "/age" },
        { "path": "/elsewhere", "condition": "outsideEngland" }
      ]
    },
    {
      "path": "/age",
      "title": "How old are you?",
      "components": [
        { "type": "NumberField", "name": "age", "title": "Age", "options": {} },
        { "type": "Html", "name": "ageHelp", "title": "Help", "options": {} }
      ],
      "next": [{ "path": "/summary", "condition": "adultInEngland" }]
    },
    {
      "path": "/elsewhere",
      "title": "Sorry",
      "components": [],
      "next": []
    },
    {
      "path": "/summary",
      "title": "Summary",
      "controller": "SummaryPageController",
      "components": []
    }
  ],
  "lists": [
    {
      "name": "countries",
      "title": "Countries",
      "type": "string",
      "items": [
        { "text": "England", "value": "england" },
        { "text": "Wales", "value": "wales", "condition": "outsideEngland" }
      ]
    }
  ],
  "sections": [],
  "conditions": [
    {
      "name": "outsideEngland",
      "displayName": "Outside England",
      "value": {
        "name": "outsideEngland",
        "conditions": [
          {
            "field": { "name": "country", "type": "SelectField", "display": "Country" },
            "operator": "is not",
            "value": { "type": "Value", "value": "england", "display": "England" }
          }
        ]
      }
    },
    {
      "name": "adultInEngland",
      "displayName": "Adult in England",
      "value": {
        "name": "adultInEngland",
        "conditions": [
          {
            "field": { "name": "age", "type": "NumberField", "display": "Age" },
            "operator": "is at least",
            "value": { "type": "Value", "value": "18", "display": "18" }
          },
          {
            "conditionName": "outsideEngland",
            "conditionDisplayName": "Outside England",
            "coordinator": "and"
          }
        ]
      }
    },
    {
      "id": "c0ffee",
      "displayName": "Lives in Wales",
      "items": [
        { "id": "i1", "componentId": "country", "operator": "is", "value": "wales" }
      ]
    }
  ]
}"#;

#[allow(dead_code)]
pub fn create_sample_definition() -> FormDefinition {
    serde_json::from_str(SAMPLE_DEFINITION_JSON).expect("sample definition parses")
}
