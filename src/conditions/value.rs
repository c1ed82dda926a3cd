use crate::definition::ComponentType;
use crate::error::ConditionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The field a condition tests, as captured when the condition was authored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConditionField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: ComponentType,
    pub display: String,
}

impl ConditionField {
    pub fn new(name: &str, field_type: ComponentType, display: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            display: display.to_string(),
        }
    }
}

/// Units a relative time value can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub const DATE_UNITS: [TimeUnit; 3] = [TimeUnit::Years, TimeUnit::Months, TimeUnit::Days];
    pub const TIME_UNITS: [TimeUnit; 3] = [TimeUnit::Hours, TimeUnit::Minutes, TimeUnit::Seconds];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Years => "years",
            TimeUnit::Months => "months",
            TimeUnit::Days => "days",
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
        }
    }

    pub fn is_date_unit(&self) -> bool {
        Self::DATE_UNITS.contains(self)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateDirection {
    #[serde(rename = "in the future")]
    Future,
    #[serde(rename = "in the past")]
    Past,
}

impl DateDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateDirection::Future => "in the future",
            DateDirection::Past => "in the past",
        }
    }
}

/// A literal value compared against a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticValue {
    pub value: String,
    pub display: String,
}

/// A point in time relative to the moment of evaluation.
///
/// The period is checked when the value is built or deserialized, so a value
/// that exists always renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RelativeTimeData")]
pub struct RelativeTimeValue {
    time_period: String,
    time_unit: TimeUnit,
    direction: DateDirection,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    time_only: bool,
    #[serde(skip)]
    period: i64,
}

impl RelativeTimeValue {
    /// Builds a relative value, rejecting periods that are not whole numbers.
    pub fn new(
        time_period: &str,
        time_unit: TimeUnit,
        direction: DateDirection,
        time_only: bool,
    ) -> Result<Self, ConditionError> {
        let period = time_period
            .trim()
            .parse::<i64>()
            .map_err(|_| ConditionError::InvalidTimePeriod(time_period.to_string()))?;
        Ok(Self {
            time_period: time_period.to_string(),
            time_unit,
            direction,
            time_only,
            period,
        })
    }

    pub fn time_period(&self) -> &str {
        &self.time_period
    }

    pub fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    pub fn direction(&self) -> DateDirection {
        self.direction
    }

    /// Compare against the time of day only.
    pub fn time_only(&self) -> bool {
        self.time_only
    }

    /// The period as a signed number; past periods are negative.
    pub fn signed_period(&self) -> i64 {
        match self.direction {
            DateDirection::Past => -self.period,
            DateDirection::Future => self.period,
        }
    }
}

/// Stored shape of a relative value, validated into [`RelativeTimeValue`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelativeTimeData {
    time_period: String,
    time_unit: TimeUnit,
    direction: DateDirection,
    #[serde(default)]
    time_only: bool,
}

impl TryFrom<RelativeTimeData> for RelativeTimeValue {
    type Error = ConditionError;

    fn try_from(data: RelativeTimeData) -> Result<Self, Self::Error> {
        RelativeTimeValue::new(
            &data.time_period,
            data.time_unit,
            data.direction,
            data.time_only,
        )
    }
}

/// The right-hand side of a condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConditionValue {
    Value(StaticValue),
    RelativeTime(RelativeTimeValue),
}

impl ConditionValue {
    pub fn literal(value: &str, display: &str) -> Self {
        ConditionValue::Value(StaticValue {
            value: value.to_string(),
            display: display.to_string(),
        })
    }

    pub fn is_relative(&self) -> bool {
        matches!(self, ConditionValue::RelativeTime(_))
    }

    pub fn to_presentation_string(&self) -> String {
        match self {
            ConditionValue::Value(v) => v.display.clone(),
            ConditionValue::RelativeTime(v) => format!(
                "{} {} {}",
                v.time_period,
                v.time_unit.as_str(),
                v.direction.as_str()
            ),
        }
    }

    pub fn to_expression(&self) -> String {
        match self {
            ConditionValue::Value(v) => v.value.clone(),
            ConditionValue::RelativeTime(v) => {
                let period = v.signed_period();
                let function = if v.time_only {
                    "timeForComparison"
                } else {
                    "dateForComparison"
                };
                format!("{}({}, '{}')", function, period, v.time_unit)
            }
        }
    }
}
