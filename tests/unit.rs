//! Unit tests for the small value types and error messages.
use form_logic::prelude::*;
use pretty_assertions::assert_eq;
use std::error::Error;

#[test]
fn test_coordinator_display_and_serde() {
    assert_eq!(format!("{}", Coordinator::And), "and");
    assert_eq!(Coordinator::Or.as_str(), "or");
    assert_eq!(
        serde_json::from_str::<Coordinator>("\"or\"").unwrap(),
        Coordinator::Or
    );
}

#[test]
fn test_operator_name_display_and_serde() {
    assert_eq!(format!("{}", OperatorName::IsAtLeast), "is at least");
    assert_eq!(OperatorName::DoesNotContain.as_str(), "does not contain");
    assert_eq!(
        serde_json::to_string(&OperatorName::IsLongerThan).unwrap(),
        "\"is longer than\""
    );
    assert!(serde_json::from_str::<OperatorName>("\"is roughly\"").is_err());
}

#[test]
fn test_component_type_classification() {
    assert!(ComponentType::TextField.is_input());
    assert!(!ComponentType::TextField.is_content());
    assert!(ComponentType::Html.is_content());
    assert!(!ComponentType::Html.is_input());
    assert!(ComponentType::SelectField.is_list_backed());
    assert!(ComponentType::List.is_list_backed());
    assert!(!ComponentType::NumberField.is_list_backed());
    assert_eq!(format!("{}", ComponentType::DatePartsField), "DatePartsField");
}

#[test]
fn test_time_unit_families() {
    assert!(TimeUnit::Days.is_date_unit());
    assert!(!TimeUnit::Minutes.is_date_unit());
    assert_eq!(format!("{}", TimeUnit::Hours), "hours");
}

#[test]
fn test_relative_time_value_validates_period() {
    let err = RelativeTimeValue::new("a week", TimeUnit::Days, DateDirection::Past, false)
        .unwrap_err();
    assert_eq!(err, ConditionError::InvalidTimePeriod("a week".to_string()));
    assert_eq!(err.to_string(), "Time period 'a week' is not a whole number");

    let value = RelativeTimeValue::new("3", TimeUnit::Days, DateDirection::Past, false).unwrap();
    assert_eq!(value.signed_period(), -3);
    assert_eq!(value.time_period(), "3");
    assert!(!value.time_only());
}

#[test]
fn test_condition_error_messages() {
    assert_eq!(
        ConditionError::SingleConditionGroup.to_string(),
        "Cannot construct a condition group from a single condition"
    );
    assert_eq!(
        ConditionError::OverlappingGroups { first: 1, last: 2 }.to_string(),
        "Group starting at 1 overlaps a group ending at 2"
    );
    assert_eq!(
        ConditionError::CoordinatorOnFirst.to_string(),
        "No coordinator allowed on the first condition"
    );
    assert_eq!(
        ConditionError::UnsupportedOperator {
            operator: OperatorName::HasLength,
            field_type: ComponentType::NumberField,
        }
        .to_string(),
        "Operator 'has length' is not supported for fields of type 'NumberField'"
    );
    assert_eq!(
        ConditionError::UnsupportedTimeUnit {
            unit: TimeUnit::Hours,
            field_type: ComponentType::DatePartsField,
        }
        .to_string(),
        "Time unit 'hours' cannot be used with fields of type 'DatePartsField'"
    );
}

#[test]
fn test_definition_error_messages() {
    assert_eq!(
        DefinitionError::PageNotFound("/x".to_string()).to_string(),
        "Page not found for path '/x'"
    );
    assert_eq!(
        DefinitionError::ConditionNotFound("x".to_string()).to_string(),
        "Condition 'x' not found in form"
    );
    assert_eq!(
        DefinitionError::ComponentNotFound("age".to_string()).to_string(),
        "Component not found with name 'age'"
    );
}

#[test]
fn test_invalid_condition_keeps_its_source() {
    let err = DefinitionError::InvalidCondition {
        name: "broken".to_string(),
        source: ConditionError::SingleConditionGroup,
    };
    assert_eq!(
        err.to_string(),
        "Condition 'broken' is invalid: Cannot construct a condition group from a single condition"
    );
    let source = err.source().map(|s| s.to_string());
    assert_eq!(
        source.as_deref(),
        Some("Cannot construct a condition group from a single condition")
    );
}
