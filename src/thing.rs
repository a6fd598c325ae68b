//! The entity model: [`Thing`] and its builder
//!
//! Every Schema.org entity is a [`Thing`] tagged with an [`EntityKind`]. The
//! kind selects the merged property schema used to validate and coerce
//! values, so a `Course` and a `Person` share one representation but accept
//! different properties.
//!
//! Property keys may be given in `snake_case` or `camelCase`. A key of the
//! form `name__annotation` bypasses validation and is emitted as
//! `name-annotation`, which is how Google's action markup such as
//! `mathExpression-input` is produced.

use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::schema::{PropertySpec, Range, ResolvedType, registry};
use crate::types::EntityKind;
use crate::value::Value;
use crate::{data_type, data_type::DataType};

/// Default value of `@context`.
pub const DEFAULT_CONTEXT: &str = "https://schema.org/";

/// A validated Schema.org entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Thing {
    kind: EntityKind,
    context: Option<String>,
    properties: IndexMap<String, Value>,
}

impl Thing {
    /// Builder for a plain `Thing`.
    pub fn builder() -> EntityBuilder {
        EntityBuilder::new(EntityKind::Thing)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub(crate) fn resolved(&self) -> &'static ResolvedType {
        registry().get(self.kind)
    }

    /// Names emitted as `@type`.
    pub fn type_names(&self) -> &'static [&'static str] {
        &self.resolved().type_names
    }

    /// The `@context` emitted at the top level.
    pub fn context_url(&self) -> &str {
        self.context.as_deref().unwrap_or(DEFAULT_CONTEXT)
    }

    /// Stored value of a property, by wire name or `snake_case` name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties
            .get(key)
            .or_else(|| self.properties.get(&snake_to_camel(key)))
    }

    /// Stored properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether the kind or one of its ancestors is named `type_name`.
    pub fn is_a(&self, type_name: &str) -> bool {
        self.resolved().is_a(type_name)
    }

    /// Ancestor chain from `Thing` down to this kind, joined with `" > "`.
    pub fn super_paths(&self) -> String {
        self.kind.super_paths()
    }

    /// Validate and store a single property.
    ///
    /// Invariants of the kind are re-checked; on failure the entity is left
    /// exactly as it was.
    pub fn set_property(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        let resolved = self.resolved();
        let (wire, stored) = validate_property(resolved, key, value.into())?;

        let index = self.properties.get_index_of(&wire);
        let previous = match stored {
            Some(value) => self.properties.insert(wire.clone(), value),
            None => self.properties.shift_remove(&wire),
        };

        if let Err(err) = resolved.check_invariants(self) {
            match (previous, index) {
                (Some(old), Some(index)) => {
                    self.properties.shift_insert(index, wire, old);
                }
                _ => {
                    self.properties.shift_remove(&wire);
                }
            }
            return Err(err);
        }

        trace!(kind = %self.kind, property = %wire, "property updated");
        Ok(())
    }

    /// JSON-LD object including `@context`.
    pub fn to_dict(&self) -> JsonValue {
        self.to_dict_with(true)
    }

    /// JSON-LD object; nested entities are rendered without `@context`.
    pub fn to_dict_with(&self, include_context: bool) -> JsonValue {
        let mut data = Map::new();
        if include_context {
            data.insert(
                "@context".to_string(),
                JsonValue::String(self.context_url().to_string()),
            );
        }
        let type_names = self.type_names();
        let type_value = match type_names {
            [single] => JsonValue::String((*single).to_string()),
            many => JsonValue::Array(
                many.iter()
                    .map(|name| JsonValue::String((*name).to_string()))
                    .collect(),
            ),
        };
        data.insert("@type".to_string(), type_value);
        for (key, value) in &self.properties {
            data.insert(key.clone(), value.to_json());
        }
        JsonValue::Object(data)
    }

    /// Run the publish-time checks of the kind and its ancestors.
    ///
    /// These cover cross-property constraints that only matter once the
    /// entity is complete, such as an offline event needing an address.
    pub fn gsc_validate(&self) -> Result<()> {
        self.resolved().check_publishable(self)
    }
}

/// Collects properties for an entity and validates them in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct EntityBuilder {
    kind: EntityKind,
    context: Option<String>,
    entries: Vec<(String, Value)>,
}

impl EntityBuilder {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            context: None,
            entries: Vec::new(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Set a property. Later calls for the same key win.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Set an annotated property, emitted as `key-annotation` without validation.
    pub fn annotated(self, key: &str, annotation: &str, value: impl Into<Value>) -> Self {
        self.prop(format!("{key}__{annotation}"), value)
    }

    /// Override the top-level `@context` URL.
    pub fn context(mut self, url: impl Into<String>) -> Self {
        self.context = Some(url.into());
        self
    }

    pub fn build(self) -> Result<Thing> {
        let resolved = registry().get(self.kind);
        let mut properties = IndexMap::with_capacity(self.entries.len());

        for (key, value) in self.entries {
            match validate_property(resolved, &key, value)? {
                (wire, Some(value)) => {
                    properties.insert(wire, value);
                }
                (wire, None) => {
                    properties.shift_remove(&wire);
                }
            }
        }

        let thing = Thing {
            kind: self.kind,
            context: self.context,
            properties,
        };
        resolved.check_invariants(&thing)?;

        debug!(kind = %thing.kind, properties = thing.properties.len(), "built entity");
        Ok(thing)
    }
}

/// A property key split into its camelCase name and optional annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PropertyKey {
    pub name: String,
    pub annotation: Option<String>,
}

impl PropertyKey {
    pub(crate) fn parse(raw: &str) -> Self {
        match raw.split_once("__") {
            Some((name, annotation)) if !annotation.is_empty() => Self {
                name: snake_to_camel(name),
                annotation: Some(annotation.to_string()),
            },
            Some((name, _)) => Self {
                name: snake_to_camel(name),
                annotation: None,
            },
            None => Self {
                name: snake_to_camel(raw),
                annotation: None,
            },
        }
    }

    pub(crate) fn wire_name(&self) -> String {
        match &self.annotation {
            Some(annotation) => format!("{}-{annotation}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Convert `snake_case` to `camelCase`.
///
/// Every segment after the first is capitalized with the rest lowercased, so
/// `"a_bC"` becomes `"aBc"`. Keys without underscores are returned unchanged.
pub fn snake_to_camel(key: &str) -> String {
    let mut segments = key.split('_');
    let mut camel = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            camel.push_str(&chars.as_str().to_lowercase());
        }
    }
    camel
}

/// Validate one key/value pair against a resolved schema.
///
/// Returns the wire name and the coerced value, or `None` when every given
/// value was empty. Annotated values are kept as given, empty ones included.
fn validate_property(
    resolved: &ResolvedType,
    raw_key: &str,
    value: Value,
) -> Result<(String, Option<Value>)> {
    let key = PropertyKey::parse(raw_key);
    let Some(spec) = resolved.property(&key.name) else {
        return Err(Error::UnknownProperty {
            property: key.name,
            type_name: resolved.def.kind.name().to_string(),
        });
    };

    if key.annotation.is_some() {
        return Ok((key.wire_name(), Some(value)));
    }

    let values = match value {
        Value::List(items) => items,
        single => vec![single],
    };
    if values.len() > 1 && !spec.repeatable {
        return Err(Error::NotRepeatable {
            property: spec.name.to_string(),
        });
    }

    let mut accepted = values
        .into_iter()
        .filter(|v| !v.is_empty())
        .map(|v| coerce(spec, v))
        .collect::<Result<Vec<_>>>()?;

    let stored = match accepted.len() {
        0 => None,
        1 => accepted.pop(),
        _ => Some(Value::List(accepted)),
    };
    Ok((spec.name.to_string(), stored))
}

/// Check a single value against a property range, converting it to the
/// canonical stored form.
fn coerce(spec: &PropertySpec, value: Value) -> Result<Value> {
    let accepts = |range: Range| spec.range.contains(&range);

    let coerced = match value {
        Value::Enum(member) if accepts(Range::Enum(member.kind)) => Some(Value::Enum(member)),
        Value::Enum(member) if accepts(Range::Text) => Some(Value::Text(member.value.to_string())),
        Value::Text(text) if accepts(Range::Text) || accepts(Range::Url) => Some(Value::Text(text)),
        Value::Text(text) => coerce_text(spec, &text),
        Value::Integer(i) if accepts(Range::Integer) || accepts(Range::Number) => {
            Some(Value::Integer(i))
        }
        Value::Number(f) if accepts(Range::Number) => {
            if !f.is_finite() {
                return Err(Error::InvalidLiteral {
                    kind: "number",
                    value: f.to_string(),
                });
            }
            Some(Value::Number(f))
        }
        Value::Boolean(b) if accepts(Range::Boolean) => Some(Value::Boolean(b)),
        Value::Date(d) if accepts(Range::Date) => Some(data_type::Date::from(d).into()),
        Value::Time(t) if accepts(Range::Time) => Some(data_type::Time::from(t).into()),
        Value::DateTime(dt) if accepts(Range::DateTime) => {
            Some(data_type::DateTime::from(dt).into())
        }
        Value::ZonedDateTime(dt) if accepts(Range::DateTime) => {
            Some(data_type::DateTime::from(dt).into())
        }
        Value::Interval(delta) if accepts(Range::Duration) => {
            Some(data_type::Duration::from_time_delta(delta)?.into())
        }
        Value::Data(data) if spec.range.iter().any(|r| data.satisfies(r)) => {
            Some(Value::Data(data))
        }
        Value::Entity(thing) if accepts_entity(spec, &thing) => Some(Value::Entity(thing)),
        _ => None,
    };

    coerced.ok_or_else(|| Error::TypeMismatch {
        property: spec.name.to_string(),
        expected: spec.range.iter().map(|r| r.name().to_string()).collect(),
    })
}

/// Text offered to a property without a Text or URL range: try enumeration
/// members, then temporal literals in Date, DateTime, Time, Duration order.
fn coerce_text(spec: &PropertySpec, text: &str) -> Option<Value> {
    let member = spec.range.iter().find_map(|range| match range {
        Range::Enum(kind) => kind.member(text),
        _ => None,
    });
    if let Some(member) = member {
        return Some(Value::Enum(member));
    }

    spec.range.iter().find_map(|range| {
        let parsed: Option<DataType> = match range {
            Range::Date => data_type::Date::parse(text).ok().map(Into::into),
            Range::DateTime => data_type::DateTime::parse(text).ok().map(Into::into),
            Range::Time => data_type::Time::parse(text).ok().map(Into::into),
            Range::Duration => data_type::Duration::parse(text).ok().map(Into::into),
            _ => None,
        };
        parsed.map(Value::Data)
    })
}

fn accepts_entity(spec: &PropertySpec, thing: &Thing) -> bool {
    spec.range.iter().any(|range| match range {
        Range::Entity(name) => thing.is_a(name),
        _ => false,
    })
}
