//! Tests for the editable condition list and its automatic grouping.
mod common;
use common::*;
use form_logic::conditions::ConditionsModelData;
use form_logic::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

const ENGLAND: &str = "'Country' is 'England'";
const ADULT: &str = "'Age' is at least '18'";
const MEMBER: &str = "'Member' is 'Yes'";

#[test]
fn test_and_binds_tighter_than_or() {
    let model = model_of(vec![
        is_england(None),
        is_adult(Some(Coordinator::And)),
        is_member(Some(Coordinator::Or)),
    ]);

    assert_eq!(
        model.to_presentation_string(),
        format!("({} and {}) or {}", ENGLAND, ADULT, MEMBER)
    );
    assert_eq!(
        model.to_expression(),
        "(country == 'england' and age >= 18) or member == true"
    );
    // User groupings are untouched by the auto grouping.
    assert_eq!(model.as_per_user_groupings().len(), 3);
}

#[test]
fn test_trailing_and_run_is_grouped_after_or() {
    let model = model_of(vec![
        is_england(None),
        is_adult(Some(Coordinator::Or)),
        is_member(Some(Coordinator::And)),
    ]);

    assert_eq!(
        model.to_presentation_string(),
        format!("{} or ({} and {})", ENGLAND, ADULT, MEMBER)
    );
}

#[test]
fn test_single_coordinator_lists_are_not_grouped() {
    let model = model_of(vec![
        is_england(None),
        is_adult(Some(Coordinator::Or)),
        is_member(Some(Coordinator::Or)),
    ]);

    assert_eq!(
        model.to_presentation_string(),
        format!("{} or {} or {}", ENGLAND, ADULT, MEMBER)
    );
}

#[test]
fn test_presentation_html() {
    let model = model_of(vec![is_england(None), is_member(Some(Coordinator::Or))]);

    assert_eq!(
        model.to_presentation_html(),
        "&#39;Country&#39; is &#39;England&#39; <strong>or</strong> &#39;Member&#39; is &#39;Yes&#39;"
    );
}

#[test]
fn test_add_enforces_coordinator_positions() {
    let mut model = ConditionsModel::new();
    assert!(!model.has_conditions());
    assert_eq!(model.last_index(), None);

    let err = model.add(is_england(Some(Coordinator::And))).unwrap_err();
    assert_eq!(err, ConditionError::CoordinatorOnFirst);

    model.add(is_england(None)).unwrap();
    let err = model.add(is_adult(None)).unwrap_err();
    assert_eq!(err, ConditionError::MissingCoordinator);
    assert_eq!(
        err.to_string(),
        "Coordinator must be present on subsequent conditions"
    );

    model.add(is_adult(Some(Coordinator::And))).unwrap();
    assert!(model.has_conditions());
    assert_eq!(model.last_index(), Some(1));
}

#[test]
fn test_replace() {
    let mut model = model_of(vec![is_england(None), is_adult(Some(Coordinator::And))]);

    model.replace(1, is_member(Some(Coordinator::Or))).unwrap();
    assert_eq!(
        model.to_presentation_string(),
        format!("{} or {}", ENGLAND, MEMBER)
    );

    let err = model.replace(5, is_member(Some(Coordinator::Or))).unwrap_err();
    assert_eq!(err, ConditionError::NoSuchCondition(5));
    assert_eq!(
        err.to_string(),
        "Cannot replace condition 5 as no such condition exists"
    );

    let err = model.replace(0, is_member(Some(Coordinator::Or))).unwrap_err();
    assert_eq!(err, ConditionError::CoordinatorOnFirst);
}

#[test]
fn test_remove_clears_new_first_coordinator() {
    let mut model = model_of(vec![
        is_england(None),
        is_adult(Some(Coordinator::And)),
        is_member(Some(Coordinator::Or)),
    ]);

    model.remove(&[0]).unwrap();

    assert_eq!(model.as_per_user_groupings()[0].coordinator(), None);
    assert_eq!(
        model.to_presentation_string(),
        format!("{} or {}", ADULT, MEMBER)
    );
}

#[test]
fn test_move_later_and_earlier_swap_coordinators() {
    let mut model = model_of(vec![is_england(None), is_adult(Some(Coordinator::And))]);

    model.move_later(0).unwrap();
    assert_eq!(
        model.to_presentation_string(),
        format!("{} and {}", ADULT, ENGLAND)
    );
    assert_eq!(model.as_per_user_groupings()[0].coordinator(), None);

    model.move_earlier(1).unwrap();
    assert_eq!(
        model.to_presentation_string(),
        format!("{} and {}", ENGLAND, ADULT)
    );

    // Out-of-range moves are ignored.
    model.move_earlier(0).unwrap();
    model.move_later(1).unwrap();
    assert_eq!(
        model.to_presentation_string(),
        format!("{} and {}", ENGLAND, ADULT)
    );
}

#[test]
fn test_add_groups_and_split_group() {
    let mut model = model_of(vec![
        is_england(None),
        is_adult(Some(Coordinator::Or)),
        is_member(Some(Coordinator::And)),
    ]);

    model.add_groups(&[GroupDef::new(0, 1).unwrap()]).unwrap();
    assert_eq!(model.as_per_user_groupings().len(), 2);
    assert!(model.as_per_user_groupings()[0].is_group());
    assert_eq!(
        model.to_presentation_string(),
        format!("({} or {}) and {}", ENGLAND, ADULT, MEMBER)
    );

    model.split_group(0).unwrap();
    assert_eq!(model.as_per_user_groupings().len(), 3);
    assert_eq!(
        model.to_presentation_string(),
        format!("{} or ({} and {})", ENGLAND, ADULT, MEMBER)
    );

    // Splitting a plain condition changes nothing.
    model.split_group(1).unwrap();
    assert_eq!(model.as_per_user_groupings().len(), 3);
}

#[test]
fn test_add_groups_rejects_overlapping_ranges() {
    let mut model = model_of(vec![
        is_england(None),
        is_adult(Some(Coordinator::And)),
        is_member(Some(Coordinator::Or)),
        is_england(Some(Coordinator::Or)),
    ]);
    let before = model.to_json();

    let err = model
        .add_groups(&[GroupDef::new(0, 2).unwrap(), GroupDef::new(1, 3).unwrap()])
        .unwrap_err();
    assert_eq!(err, ConditionError::OverlappingGroups { first: 1, last: 2 });

    // Nothing is dropped.
    assert_eq!(model.as_per_user_groupings().len(), 4);
    assert_eq!(model.to_json(), before);

    // Disjoint ranges may come in any order.
    model
        .add_groups(&[GroupDef::new(2, 3).unwrap(), GroupDef::new(0, 1).unwrap()])
        .unwrap();
    assert_eq!(model.as_per_user_groupings().len(), 2);
    assert!(model.as_per_user_groupings().iter().all(|c| c.is_group()));
}

#[test]
fn test_add_groups_rejects_ranges_past_the_end() {
    let mut model = model_of(vec![is_england(None), is_adult(Some(Coordinator::And))]);

    let err = model.add_groups(&[GroupDef::new(5, 6).unwrap()]).unwrap_err();
    assert_eq!(err, ConditionError::NoSuchCondition(6));

    let err = model.add_groups(&[GroupDef::new(1, 2).unwrap()]).unwrap_err();
    assert_eq!(err, ConditionError::NoSuchCondition(2));

    assert_eq!(model.as_per_user_groupings().len(), 2);
    assert_eq!(
        model.to_presentation_string(),
        format!("{} and {}", ENGLAND, ADULT)
    );
}

#[test]
fn test_large_user_group_is_auto_grouped_inside() {
    let mut model = model_of(vec![
        is_member(None),
        is_england(Some(Coordinator::Or)),
        is_adult(Some(Coordinator::And)),
        is_member(Some(Coordinator::Or)),
    ]);

    model.add_groups(&[GroupDef::new(1, 3).unwrap()]).unwrap();

    assert_eq!(model.as_per_user_groupings().len(), 2);
    assert_eq!(
        model.to_presentation_string(),
        format!("{} or (({} and {}) or {})", MEMBER, ENGLAND, ADULT, MEMBER)
    );
    assert_eq!(
        model.to_expression(),
        "member == true or ((country == 'england' and age >= 18) or member == true)"
    );
}

#[test]
fn test_group_def_range() {
    assert_eq!(
        GroupDef::new(1, 1).unwrap_err().to_string(),
        "last must be after first"
    );
    let def = GroupDef::new(1, 3).unwrap();
    assert!(def.contains(1));
    assert!(def.contains(3));
    assert!(!def.contains(4));
    assert!(def.starts_with(1));
    assert!(!def.starts_with(2));
}

#[test]
fn test_clear() {
    let mut model = model_of(vec![is_england(None)]);
    model.set_name("inEngland");
    model.clear();

    assert!(!model.has_conditions());
    assert_eq!(model.name(), None);
    assert_eq!(model.to_presentation_string(), "");
}

#[test]
fn test_json_round_trip_keeps_user_groupings() {
    let json = json!({
        "name": "mixed",
        "conditions": [
            {
                "field": { "name": "country", "type": "SelectField", "display": "Country" },
                "operator": "is",
                "value": { "type": "Value", "value": "england", "display": "England" }
            },
            {
                "field": { "name": "age", "type": "NumberField", "display": "Age" },
                "operator": "is at least",
                "value": { "type": "Value", "value": "18", "display": "18" },
                "coordinator": "and"
            },
            {
                "conditionName": "isMember",
                "conditionDisplayName": "Is member",
                "coordinator": "or"
            }
        ]
    });

    let data: ConditionsModelData = serde_json::from_value(json.clone()).unwrap();
    let model = ConditionsModel::from_data(&data).unwrap();

    assert_eq!(model.name(), Some("mixed"));
    assert_eq!(
        model.to_presentation_string(),
        format!("({} and {}) or 'Is member'", ENGLAND, ADULT)
    );
    assert_eq!(serde_json::to_value(model.to_json()).unwrap(), json);
}
