//! Dynamic property values
//!
//! [`Value`] is what callers hand to [`EntityBuilder::prop`](crate::EntityBuilder::prop)
//! and what entities store after validation. Native Rust and chrono values
//! convert into it with `From`, so most call sites never name a variant.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use serde_json::Value as JsonValue;

use crate::data_type::{self, DataType};
use crate::enumeration::EnumMember;
use crate::thing::Thing;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value; dropped by validation
    Null,
    Text(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    ZonedDateTime(DateTime<FixedOffset>),
    Interval(TimeDelta),
    Data(DataType),
    Enum(EnumMember),
    Entity(Thing),
    List(Vec<Value>),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::DateTime(_) | Self::ZonedDateTime(_) => "date-time",
            Self::Interval(_) => "interval",
            Self::Data(data) => data.type_name(),
            Self::Enum(_) => "enumeration member",
            Self::Entity(_) => "entity",
            Self::List(_) => "list",
        }
    }

    /// Null and the empty string count as "no value".
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Data(DataType::Text(t)) => Some(t.value()),
            Self::Data(DataType::Url(u)) => Some(u.value()),
            Self::Enum(member) => Some(member.value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Data(DataType::Number(n)) => n.value().as_i64(),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<&Thing> {
        match self {
            Self::Entity(thing) => Some(thing),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// JSON form of the value. Nested entities omit `@context`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Text(s) => JsonValue::String(s.clone()),
            Self::Integer(i) => JsonValue::from(*i),
            Self::Number(f) => serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Self::Boolean(b) => JsonValue::Bool(*b),
            Self::Date(d) => JsonValue::String(data_type::Date::from(*d).value().to_string()),
            Self::Time(t) => JsonValue::String(data_type::Time::from(*t).value().to_string()),
            Self::DateTime(dt) => {
                JsonValue::String(data_type::DateTime::from(*dt).value().to_string())
            }
            Self::ZonedDateTime(dt) => {
                JsonValue::String(data_type::DateTime::from(*dt).value().to_string())
            }
            Self::Interval(delta) => data_type::Duration::from_time_delta(*delta)
                .map(|d| JsonValue::String(d.value().to_string()))
                .unwrap_or(JsonValue::Null),
            Self::Data(data) => data.to_json(),
            Self::Enum(member) => JsonValue::String(member.value.to_string()),
            Self::Entity(thing) => thing.to_dict_with(false),
            Self::List(items) => JsonValue::Array(items.iter().map(Value::to_json).collect()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveTime> for Value {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        Self::ZonedDateTime(value.fixed_offset())
    }
}

impl From<TimeDelta> for Value {
    fn from(value: TimeDelta) -> Self {
        Self::Interval(value)
    }
}

impl From<DataType> for Value {
    fn from(value: DataType) -> Self {
        Self::Data(value)
    }
}

impl From<EnumMember> for Value {
    fn from(value: EnumMember) -> Self {
        Self::Enum(value)
    }
}

impl From<Thing> for Value {
    fn from(value: Thing) -> Self {
        Self::Entity(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
