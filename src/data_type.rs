//! Primitive Schema.org data types
//!
//! Literal values such as dates, URLs and durations are validated once when
//! the wrapper is created and then serialize as their normalized string.

use std::fmt;
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeDelta, TimeZone};
use regex::Regex;
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::schema::Range;
use crate::value::Value;

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{2}:\d{2}:\d{2}(?:\.\d+)?$").unwrap())
}

fn date_time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?(Z|[+-]\d{2}:\d{2})?$").unwrap()
    })
}

fn duration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^P(?:\d+Y)?(?:\d+M)?(?:\d+D)?(?:T(?:\d+H)?(?:\d+M)?(?:\d+S)?)?$|^P\d+W$")
            .unwrap()
    })
}

fn invalid(kind: &'static str, value: &str) -> Error {
    Error::InvalidLiteral {
        kind,
        value: value.to_string(),
    }
}

/// A `true` or `false` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boolean(bool);

impl Boolean {
    pub fn new(value: bool) -> Self {
        Self(value)
    }

    pub fn value(self) -> bool {
        self.0
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

/// An integer or finite floating-point number.
#[derive(Debug, Clone, PartialEq)]
pub struct Number(serde_json::Number);

impl Number {
    /// Wrap a float, rejecting NaN and infinities.
    pub fn from_f64(value: f64) -> Result<Self> {
        serde_json::Number::from_f64(value)
            .map(Self)
            .ok_or_else(|| invalid("number", &value.to_string()))
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_i64() || self.0.is_u64()
    }

    pub fn value(&self) -> &serde_json::Number {
        &self.0
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self(value.into())
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self(value.into())
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self(value.into())
    }
}

impl TryFrom<f64> for Number {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}

/// A string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(String);

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A calendar date in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Date(String);

impl Date {
    pub fn parse(value: &str) -> Result<Self> {
        if !date_pattern().is_match(value) {
            return Err(invalid("ISO 8601 date", value));
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid("ISO 8601 date", value))?;
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }
}

/// A wall-clock time in `HH:MM:SS` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Time(String);

impl Time {
    pub fn parse(value: &str) -> Result<Self> {
        if !time_pattern().is_match(value) {
            return Err(invalid("ISO 8601 time", value));
        }
        NaiveTime::parse_from_str(value, "%H:%M:%S%.f").map_err(|_| invalid("ISO 8601 time", value))?;
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<NaiveTime> for Time {
    fn from(time: NaiveTime) -> Self {
        Self(time.format("%H:%M:%S%.f").to_string())
    }
}

/// A combined date and time, optionally with a UTC offset.
///
/// The literal is kept exactly as given; a naive value stays naive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime(String);

impl DateTime {
    pub fn parse(value: &str) -> Result<Self> {
        let Some(captures) = date_time_pattern().captures(value) else {
            return Err(invalid("ISO 8601 date-time", value));
        };
        let parsed = if captures.get(1).is_some() {
            chrono::DateTime::parse_from_rfc3339(value).map(|_| ())
        } else {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|_| ())
        };
        parsed.map_err(|_| invalid("ISO 8601 date-time", value))?;
        Ok(Self(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDateTime> for DateTime {
    fn from(date_time: NaiveDateTime) -> Self {
        Self(date_time.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
    }
}

impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for DateTime
where
    Tz::Offset: fmt::Display,
{
    fn from(date_time: chrono::DateTime<Tz>) -> Self {
        Self(date_time.to_rfc3339_opts(SecondsFormat::AutoSi, false))
    }
}

/// An absolute URL.
///
/// Inputs without a scheme are taken as `http://` URLs. The stored literal is
/// the (possibly prefixed) input, not the normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url(String);

impl Url {
    pub fn parse(raw: &str) -> Result<Self> {
        let value = if has_scheme(raw) {
            raw.to_string()
        } else {
            format!("http://{raw}")
        };
        let parsed = url::Url::parse(&value)?;
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(Error::InvalidUrl(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

fn has_scheme(raw: &str) -> bool {
    raw.split_once("://").is_some_and(|(scheme, _)| {
        let mut chars = scheme.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

impl TryFrom<&str> for Url {
    type Error = Error;

    fn try_from(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}

impl From<url::Url> for Url {
    fn from(url: url::Url) -> Self {
        Self(url.into())
    }
}

/// Component values for [`Duration::from_components`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationParts {
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// An ISO 8601 duration such as `P1DT2H` or `P3W`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duration(String);

impl Duration {
    pub fn parse(value: &str) -> Result<Self> {
        if !Self::is_valid_iso8601(value) {
            return Err(invalid("ISO 8601 duration", value));
        }
        Ok(Self(value.to_string()))
    }

    /// Whether `value` is a well-formed ISO 8601 duration.
    ///
    /// `P` alone and a trailing `T` with no time component are rejected.
    pub fn is_valid_iso8601(value: &str) -> bool {
        value != "P" && !value.ends_with('T') && duration_pattern().is_match(value)
    }

    /// Express an interval as days, hours, minutes and whole seconds.
    pub fn from_time_delta(delta: TimeDelta) -> Result<Self> {
        let total = delta.num_seconds();
        if total < 0 {
            return Err(invalid("ISO 8601 duration", &format!("{total} seconds")));
        }
        let total = total.unsigned_abs();
        Ok(Self::from_components(DurationParts {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
            ..Default::default()
        }))
    }

    /// Compose a duration from components, omitting zero fields.
    ///
    /// A non-zero `weeks` yields `PnW` and ignores every other field. All
    /// zero components yield `P0D`.
    pub fn from_components(parts: DurationParts) -> Self {
        if parts.weeks > 0 {
            return Self(format!("P{}W", parts.weeks));
        }

        let mut date = String::new();
        for (amount, unit) in [(parts.years, 'Y'), (parts.months, 'M'), (parts.days, 'D')] {
            if amount > 0 {
                date.push_str(&format!("{amount}{unit}"));
            }
        }
        let mut time = String::new();
        for (amount, unit) in [(parts.hours, 'H'), (parts.minutes, 'M'), (parts.seconds, 'S')] {
            if amount > 0 {
                time.push_str(&format!("{amount}{unit}"));
            }
        }

        match (date.is_empty(), time.is_empty()) {
            (true, true) => Self("P0D".to_string()),
            (_, true) => Self(format!("P{date}")),
            _ => Self(format!("P{date}T{time}")),
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<TimeDelta> for Duration {
    type Error = Error;

    fn try_from(delta: TimeDelta) -> Result<Self> {
        Self::from_time_delta(delta)
    }
}

impl From<std::time::Duration> for Duration {
    fn from(duration: std::time::Duration) -> Self {
        let total = duration.as_secs();
        Self::from_components(DurationParts {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
            ..Default::default()
        })
    }
}

/// Any validated primitive value.
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    Boolean(Boolean),
    Number(Number),
    Text(Text),
    Date(Date),
    Time(Time),
    DateTime(DateTime),
    Url(Url),
    Duration(Duration),
}

impl DataType {
    /// The Schema.org name of the data type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "Boolean",
            Self::Number(_) => "Number",
            Self::Text(_) => "Text",
            Self::Date(_) => "Date",
            Self::Time(_) => "Time",
            Self::DateTime(_) => "DateTime",
            Self::Url(_) => "URL",
            Self::Duration(_) => "Duration",
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Boolean(b) => JsonValue::Bool(b.value()),
            Self::Number(n) => JsonValue::Number(n.value().clone()),
            Self::Text(t) => JsonValue::String(t.value().to_string()),
            Self::Date(d) => JsonValue::String(d.value().to_string()),
            Self::Time(t) => JsonValue::String(t.value().to_string()),
            Self::DateTime(d) => JsonValue::String(d.value().to_string()),
            Self::Url(u) => JsonValue::String(u.value().to_string()),
            Self::Duration(d) => JsonValue::String(d.value().to_string()),
        }
    }

    /// Whether the value may be stored in a property declaring `range`.
    ///
    /// A URL also counts as text and an integral number as an integer.
    pub(crate) fn satisfies(&self, range: &Range) -> bool {
        match (self, range) {
            (Self::Boolean(_), Range::Boolean)
            | (Self::Number(_), Range::Number)
            | (Self::Text(_), Range::Text)
            | (Self::Date(_), Range::Date)
            | (Self::Time(_), Range::Time)
            | (Self::DateTime(_), Range::DateTime)
            | (Self::Url(_), Range::Url | Range::Text)
            | (Self::Duration(_), Range::Duration) => true,
            (Self::Number(n), Range::Integer) => n.is_integer(),
            _ => false,
        }
    }
}

macro_rules! data_type_conversions {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for DataType {
                fn from(value: $variant) -> Self {
                    DataType::$variant(value)
                }
            }

            impl From<$variant> for Value {
                fn from(value: $variant) -> Self {
                    Value::Data(DataType::$variant(value))
                }
            }
        )+
    };
}

data_type_conversions!(Boolean, Number, Text, Date, Time, DateTime, Url, Duration);

impl TryFrom<&Value> for Boolean {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Boolean(b) => Ok(Self(*b)),
            Value::Data(DataType::Boolean(b)) => Ok(*b),
            other => Err(Error::WrongKind {
                expected: "Boolean",
                found: other.kind_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for Number {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Integer(i) => Ok(Self::from(*i)),
            Value::Number(f) => Self::from_f64(*f),
            Value::Data(DataType::Number(n)) => Ok(n.clone()),
            other => Err(Error::WrongKind {
                expected: "Number",
                found: other.kind_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for Text {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Text(s) => Ok(Self(s.clone())),
            Value::Data(DataType::Text(t)) => Ok(t.clone()),
            other => Err(Error::WrongKind {
                expected: "Text",
                found: other.kind_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for Date {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Text(s) => Self::parse(s),
            Value::Date(d) => Ok(Self::from(*d)),
            Value::Data(DataType::Date(d)) => Ok(d.clone()),
            other => Err(Error::WrongKind {
                expected: "Date",
                found: other.kind_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for Time {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Text(s) => Self::parse(s),
            Value::Time(t) => Ok(Self::from(*t)),
            Value::Data(DataType::Time(t)) => Ok(t.clone()),
            other => Err(Error::WrongKind {
                expected: "Time",
                found: other.kind_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for DateTime {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Text(s) => Self::parse(s),
            Value::DateTime(dt) => Ok(Self::from(*dt)),
            Value::ZonedDateTime(dt) => Ok(Self::from(*dt)),
            Value::Data(DataType::DateTime(dt)) => Ok(dt.clone()),
            other => Err(Error::WrongKind {
                expected: "DateTime",
                found: other.kind_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for Url {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Text(s) => Self::parse(s),
            Value::Data(DataType::Url(u)) => Ok(u.clone()),
            other => Err(Error::WrongKind {
                expected: "URL",
                found: other.kind_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for Duration {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Text(s) => Self::parse(s),
            Value::Interval(delta) => Self::from_time_delta(*delta),
            Value::Data(DataType::Duration(d)) => Ok(d.clone()),
            other => Err(Error::WrongKind {
                expected: "Duration",
                found: other.kind_name(),
            }),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            JsonValue::String(s) => f.write_str(&s),
            other => write!(f, "{other}"),
        }
    }
}
