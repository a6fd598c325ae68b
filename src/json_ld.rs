//! Rebuilding entities from JSON-LD

use std::str::FromStr;

use serde_json::Value as JsonValue;
use tracing::trace;

use crate::error::{Error, Result};
use crate::schema::registry;
use crate::thing::{DEFAULT_CONTEXT, EntityBuilder, Thing};
use crate::types::EntityKind;
use crate::value::Value;

impl EntityKind {
    /// Resolve an `@type` value: a single name, or the exact list of names a
    /// multi-typed kind serializes as.
    pub fn from_type_value(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::String(name) => Self::from_type_names(&[name.as_str()]),
            JsonValue::Array(items) => {
                let names: Option<Vec<&str>> = items.iter().map(JsonValue::as_str).collect();
                Self::from_type_names(&names?)
            }
            _ => None,
        }
    }

    pub fn from_type_names(names: &[&str]) -> Option<Self> {
        if let [single] = names
            && let Ok(kind) = Self::from_str(single)
            && registry().get(kind).type_names == [*single]
        {
            return Some(kind);
        }
        registry()
            .iter()
            .find(|resolved| resolved.type_names == names)
            .map(|resolved| resolved.def.kind)
    }
}

impl Thing {
    /// Rebuild a validated entity from JSON-LD produced by [`to_dict`](Thing::to_dict)
    /// or found on a page.
    ///
    /// Every property passes through the same validation as the builder.
    /// Keys of the form `name-annotation` are restored as annotations.
    pub fn from_json_ld(data: &JsonValue) -> Result<Thing> {
        let JsonValue::Object(map) = data else {
            return Err(Error::WrongKind {
                expected: "object",
                found: json_kind(data),
            });
        };

        let kind = match map.get("@type") {
            Some(type_value) => EntityKind::from_type_value(type_value)
                .ok_or_else(|| Error::UnknownType(type_value.to_string()))?,
            None => return Err(Error::UnknownType("(missing @type)".to_string())),
        };

        let mut builder = EntityBuilder::new(kind);
        if let Some(JsonValue::String(context)) = map.get("@context")
            && context != DEFAULT_CONTEXT
        {
            builder = builder.context(context.as_str());
        }

        for (key, value) in map {
            if key.starts_with('@') {
                continue;
            }
            let value = json_to_value(value)?;
            builder = match key.split_once('-') {
                Some((name, annotation)) => builder.annotated(name, annotation, value),
                None => builder.prop(key.as_str(), value),
            };
        }

        trace!(%kind, "rebuilding entity from JSON-LD");
        builder.build()
    }
}

fn json_to_value(value: &JsonValue) -> Result<Value> {
    Ok(match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Boolean(*b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => Value::Text(s.clone()),
        JsonValue::Array(items) => Value::List(items.iter().map(json_to_value).collect::<Result<_>>()?),
        JsonValue::Object(_) => Value::Entity(Thing::from_json_ld(value)?),
    })
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
