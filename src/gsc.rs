//! Google Search Console required-property checks
//!
//! Each kind carries a list of [`Requirement`]s, inherited from the nearest
//! ancestor that declares one. Validation walks dotted paths through the
//! serialized JSON-LD; a path crossing a list is mapped over its elements, so
//! `author.name` on a list of authors requires every author to have a name.

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::schema::{Requirement, registry};
use crate::thing::Thing;
use crate::types::EntityKind;

/// Outcome of a GSC validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GscReport {
    type_name: String,
    errors: Vec<String>,
}

impl GscReport {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable messages, one per unmet requirement.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_result(self) -> std::result::Result<(), Vec<String>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

enum Cursor<'a> {
    One(&'a JsonValue),
    Many(Vec<Option<&'a JsonValue>>),
}

/// Resolve a dotted path in JSON data.
///
/// Returns `None` when an object along the way lacks the key or a scalar is
/// reached. When a list is crossed, the remaining path is applied to each
/// element and the result is a list with `null` where an element lacks it.
pub fn get_property(path: &str, data: &JsonValue) -> Option<JsonValue> {
    let mut cursor = Cursor::One(data);
    for key in path.split('.') {
        cursor = match cursor {
            Cursor::One(JsonValue::Object(map)) => Cursor::One(map.get(key)?),
            Cursor::One(JsonValue::Array(items)) => Cursor::Many(
                items
                    .iter()
                    .map(|item| item.as_object().and_then(|map| map.get(key)))
                    .collect(),
            ),
            Cursor::One(_) => return None,
            Cursor::Many(items) => Cursor::Many(
                items
                    .into_iter()
                    .map(|item| item.and_then(JsonValue::as_object).and_then(|map| map.get(key)))
                    .collect(),
            ),
        };
    }
    Some(match cursor {
        Cursor::One(value) => value.clone(),
        Cursor::Many(items) => JsonValue::Array(
            items
                .into_iter()
                .map(|item| item.cloned().unwrap_or(JsonValue::Null))
                .collect(),
        ),
    })
}

fn elements(value: Option<JsonValue>) -> Vec<JsonValue> {
    match value {
        None => vec![JsonValue::Null],
        Some(JsonValue::Array(items)) => items,
        Some(other) => vec![other],
    }
}

fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(items) => !items.is_empty(),
        JsonValue::Object(map) => !map.is_empty(),
    }
}

/// For alternatives, a list counts as present when any element is.
fn is_present(value: Option<JsonValue>) -> bool {
    match value {
        None => false,
        Some(JsonValue::Array(items)) => items.iter().any(is_truthy),
        Some(other) => is_truthy(&other),
    }
}

pub(crate) fn validate(type_name: &str, requirements: &[Requirement], data: &JsonValue) -> GscReport {
    let mut errors = Vec::new();
    let missing =
        |path: &str| format!("{path} is required for Google Search Console for the feature {type_name}");

    for requirement in requirements {
        match requirement {
            Requirement::Path(path) => {
                if elements(get_property(path, data)).iter().any(JsonValue::is_null) {
                    errors.push(missing(path));
                }
            }
            Requirement::UnlessLastElement(path) => {
                let mut values = elements(get_property(path, data));
                values.pop();
                if values.iter().any(JsonValue::is_null) {
                    errors.push(missing(path));
                }
            }
            Requirement::AnyOf(paths) => {
                if !paths.iter().any(|path| is_present(get_property(path, data))) {
                    errors.push(format!(
                        "One of {} is required for Google Search Console in {type_name}",
                        paths.join(", ")
                    ));
                }
            }
        }
    }

    if !errors.is_empty() {
        debug!(type_name, missing = errors.len(), "GSC requirements not met");
    }
    GscReport {
        type_name: type_name.to_string(),
        errors,
    }
}

impl EntityKind {
    /// Check serialized data against this kind's GSC contract.
    pub fn validate_gsc(self, data: &JsonValue) -> GscReport {
        validate(self.name(), registry().get(self).required, data)
    }
}

impl Thing {
    /// Check `data` (normally [`to_dict`](Thing::to_dict)) against the GSC
    /// contract of this entity's kind.
    pub fn validate_gsc(&self, data: &JsonValue) -> GscReport {
        self.kind().validate_gsc(data)
    }
}
