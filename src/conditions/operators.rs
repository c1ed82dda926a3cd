use super::value::{ConditionValue, DateDirection, TimeUnit};
use crate::definition::ComponentType;
use crate::error::ConditionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators available in condition editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OperatorName {
    #[serde(rename = "is")]
    Is,
    #[serde(rename = "is not")]
    IsNot,
    #[serde(rename = "is longer than")]
    IsLongerThan,
    #[serde(rename = "is shorter than")]
    IsShorterThan,
    #[serde(rename = "has length")]
    HasLength,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "does not contain")]
    DoesNotContain,
    #[serde(rename = "is at least")]
    IsAtLeast,
    #[serde(rename = "is at most")]
    IsAtMost,
    #[serde(rename = "is less than")]
    IsLessThan,
    #[serde(rename = "is more than")]
    IsMoreThan,
    #[serde(rename = "is before")]
    IsBefore,
    #[serde(rename = "is after")]
    IsAfter,
}

impl OperatorName {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorName::Is => "is",
            OperatorName::IsNot => "is not",
            OperatorName::IsLongerThan => "is longer than",
            OperatorName::IsShorterThan => "is shorter than",
            OperatorName::HasLength => "has length",
            OperatorName::Contains => "contains",
            OperatorName::DoesNotContain => "does not contain",
            OperatorName::IsAtLeast => "is at least",
            OperatorName::IsAtMost => "is at most",
            OperatorName::IsLessThan => "is less than",
            OperatorName::IsMoreThan => "is more than",
            OperatorName::IsBefore => "is before",
            OperatorName::IsAfter => "is after",
        }
    }
}

impl fmt::Display for OperatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Groups of field types that share an operator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldFamily {
    Default,
    Text,
    Number,
    Checkboxes,
    Date,
    Time,
    DateTime,
}

impl FieldFamily {
    fn of(field_type: ComponentType) -> Self {
        match field_type {
            ComponentType::TextField
            | ComponentType::MultilineTextField
            | ComponentType::EmailAddressField => FieldFamily::Text,
            ComponentType::NumberField => FieldFamily::Number,
            ComponentType::CheckboxesField => FieldFamily::Checkboxes,
            ComponentType::DateField | ComponentType::DatePartsField => FieldFamily::Date,
            ComponentType::TimeField => FieldFamily::Time,
            ComponentType::DateTimeField | ComponentType::DateTimePartsField => {
                FieldFamily::DateTime
            }
            _ => FieldFamily::Default,
        }
    }

    fn allows_unit(&self, unit: TimeUnit) -> bool {
        match self {
            FieldFamily::Date => unit.is_date_unit(),
            FieldFamily::Time => !unit.is_date_unit(),
            _ => true,
        }
    }
}

/// How an operator turns a field and value into an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Rendering {
    /// `field op value`
    Inline(&'static str),
    /// `length(field) op value`
    LengthIs(&'static str),
    /// `value op field`, optionally negated.
    ReverseInline { op: &'static str, negated: bool },
    /// `field op 'value'`
    AbsoluteTime(&'static str),
    /// `field op dateForComparison(..)`, op chosen by direction.
    RelativeTime {
        past: &'static str,
        future: &'static str,
    },
}

impl Rendering {
    fn is_relative(&self) -> bool {
        matches!(self, Rendering::RelativeTime { .. })
    }
}

fn rendering(family: FieldFamily, operator: OperatorName) -> Option<Rendering> {
    use OperatorName::*;
    use Rendering::*;

    fn defaults(operator: OperatorName) -> Option<Rendering> {
        match operator {
            Is => Some(Inline("==")),
            IsNot => Some(Inline("!=")),
            _ => None,
        }
    }

    match family {
        FieldFamily::Default => defaults(operator),
        FieldFamily::Text => match operator {
            IsLongerThan => Some(LengthIs(">")),
            IsShorterThan => Some(LengthIs("<")),
            HasLength => Some(LengthIs("==")),
            other => defaults(other),
        },
        FieldFamily::Number => match operator {
            IsAtLeast => Some(Inline(">=")),
            IsAtMost => Some(Inline("<=")),
            IsLessThan => Some(Inline("<")),
            IsMoreThan => Some(Inline(">")),
            other => defaults(other),
        },
        FieldFamily::Checkboxes => match operator {
            Contains => Some(ReverseInline {
                op: "in",
                negated: false,
            }),
            DoesNotContain => Some(ReverseInline {
                op: "in",
                negated: true,
            }),
            _ => None,
        },
        FieldFamily::Date | FieldFamily::Time | FieldFamily::DateTime => match operator {
            Is => Some(AbsoluteTime("==")),
            IsNot => Some(AbsoluteTime("!=")),
            IsBefore => Some(AbsoluteTime("<")),
            IsAfter => Some(AbsoluteTime(">")),
            IsAtLeast => Some(RelativeTime {
                past: "<=",
                future: ">=",
            }),
            IsAtMost => Some(RelativeTime {
                past: ">=",
                future: "<=",
            }),
            IsLessThan => Some(RelativeTime {
                past: ">",
                future: "<",
            }),
            IsMoreThan => Some(RelativeTime {
                past: "<",
                future: ">",
            }),
            _ => None,
        },
    }
}

const ALL_OPERATORS: [OperatorName; 13] = [
    OperatorName::Is,
    OperatorName::IsNot,
    OperatorName::IsLongerThan,
    OperatorName::IsShorterThan,
    OperatorName::HasLength,
    OperatorName::Contains,
    OperatorName::DoesNotContain,
    OperatorName::IsAtLeast,
    OperatorName::IsAtMost,
    OperatorName::IsLessThan,
    OperatorName::IsMoreThan,
    OperatorName::IsBefore,
    OperatorName::IsAfter,
];

/// Operators a field of this type supports, sorted by their display name.
pub fn get_operator_names(field_type: ComponentType) -> Vec<OperatorName> {
    let family = FieldFamily::of(field_type);
    let mut names: Vec<OperatorName> = ALL_OPERATORS
        .into_iter()
        .filter(|op| rendering(family, *op).is_some())
        .collect();
    names.sort_by_key(|op| op.as_str());
    names
}

/// `true` when the operator compares against a relative time for this field type.
pub fn is_relative_operator(field_type: ComponentType, operator: OperatorName) -> bool {
    rendering(FieldFamily::of(field_type), operator).is_some_and(|r| r.is_relative())
}

/// Checks that an operator and value can be combined for a field type.
pub fn validate_operator(
    field_type: ComponentType,
    operator: OperatorName,
    value: &ConditionValue,
) -> Result<(), ConditionError> {
    resolve(field_type, operator, value).map(|_| ())
}

/// Validates the combination and picks how it renders.
pub(crate) fn resolve(
    field_type: ComponentType,
    operator: OperatorName,
    value: &ConditionValue,
) -> Result<Rendering, ConditionError> {
    let family = FieldFamily::of(field_type);
    let rendering = rendering(family, operator).ok_or(ConditionError::UnsupportedOperator {
        operator,
        field_type,
    })?;

    match (rendering.is_relative(), value) {
        (true, ConditionValue::RelativeTime(relative)) => {
            if !family.allows_unit(relative.time_unit()) {
                return Err(ConditionError::UnsupportedTimeUnit {
                    unit: relative.time_unit(),
                    field_type,
                });
            }
            Ok(rendering)
        }
        (true, ConditionValue::Value(_)) => Err(ConditionError::ValueKindMismatch {
            operator,
            expected: "relative time",
        }),
        (false, ConditionValue::RelativeTime(_)) => Err(ConditionError::ValueKindMismatch {
            operator,
            expected: "static",
        }),
        (false, ConditionValue::Value(_)) => Ok(rendering),
    }
}

/// Builds the machine expression for `field_name <operator> value`.
pub fn get_expression(
    field_type: ComponentType,
    field_name: &str,
    operator: OperatorName,
    value: &ConditionValue,
) -> Result<String, ConditionError> {
    let rendering = resolve(field_type, operator, value)?;
    Ok(render(rendering, field_type, field_name, value))
}

/// Renders an already resolved combination.
pub(crate) fn render(
    rendering: Rendering,
    field_type: ComponentType,
    field_name: &str,
    value: &ConditionValue,
) -> String {
    match rendering {
        Rendering::Inline(op) => {
            format!("{} {} {}", field_name, op, format_value(field_type, value))
        }
        Rendering::LengthIs(op) => {
            format!("length({}) {} {}", field_name, op, value.to_expression())
        }
        Rendering::ReverseInline { op, negated } => {
            let inner = format!("{} {} {}", format_value(field_type, value), op, field_name);
            if negated {
                format!("not ({})", inner)
            } else {
                inner
            }
        }
        Rendering::AbsoluteTime(op) => {
            format!("{} {} '{}'", field_name, op, value.to_expression())
        }
        Rendering::RelativeTime { past, future } => {
            let op = match value {
                ConditionValue::RelativeTime(v) if v.direction() == DateDirection::Past => past,
                _ => future,
            };
            format!("{} {} {}", field_name, op, value.to_expression())
        }
    }
}

fn format_value(field_type: ComponentType, value: &ConditionValue) -> String {
    match field_type {
        ComponentType::YesNoField | ComponentType::NumberField => value.to_expression(),
        _ => format!("'{}'", value.to_expression()),
    }
}
