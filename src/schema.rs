//! Static type schemas and the type registry
//!
//! Every entity kind is described by a [`TypeDef`]: its parents, the names it
//! serializes as, its own property table, the Google Search Console contract
//! and optional invariants. The [`Registry`] merges those tables along the
//! inheritance graph once, on first use.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::enumeration::EnumKind;
use crate::error::Result;
use crate::thing::Thing;
use crate::types::{self, EntityKind};

/// One type a property accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    Text,
    Url,
    Integer,
    Number,
    Boolean,
    Date,
    DateTime,
    Time,
    Duration,
    /// A member of the given enumeration
    Enum(EnumKind),
    /// An entity whose lineage contains this type name
    Entity(&'static str),
}

impl Range {
    /// Schema.org name of the accepted type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Url => "URL",
            Self::Integer => "Integer",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Time => "Time",
            Self::Duration => "Duration",
            Self::Enum(kind) => kind.name(),
            Self::Entity(name) => name,
        }
    }
}

/// Declaration of a single property.
#[derive(Debug)]
pub struct PropertySpec {
    /// camelCase wire name
    pub name: &'static str,
    /// Whether several values may be stored
    pub repeatable: bool,
    /// Accepted types, in declaration order
    pub range: &'static [Range],
}

/// A property holding at most one value.
pub(crate) const fn one(name: &'static str, range: &'static [Range]) -> PropertySpec {
    PropertySpec {
        name,
        repeatable: false,
        range,
    }
}

/// A property holding any number of values.
pub(crate) const fn many(name: &'static str, range: &'static [Range]) -> PropertySpec {
    PropertySpec {
        name,
        repeatable: true,
        range,
    }
}

/// One entry of a Google Search Console contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Dotted path that must resolve to a value everywhere
    Path(&'static str),
    /// Like `Path`, but the last element of a list may lack it
    UnlessLastElement(&'static str),
    /// At least one of the paths must be present
    AnyOf(&'static [&'static str]),
}

/// A check run against a fully built entity.
pub type Invariant = fn(&Thing) -> Result<()>;

/// Static description of an entity kind.
#[derive(Debug)]
pub struct TypeDef {
    pub kind: EntityKind,
    pub parents: &'static [EntityKind],
    /// Names emitted as `@type`; the kind name when empty
    pub type_names: &'static [&'static str],
    pub description: &'static str,
    /// Properties declared by this type, not inherited ones
    pub properties: &'static [PropertySpec],
    /// GSC contract; inherited from the nearest ancestor when `None`
    pub required: Option<&'static [Requirement]>,
    /// Checked on every build and mutation
    pub invariant: Option<Invariant>,
    /// Checked only by [`Thing::gsc_validate`]
    pub publish_check: Option<Invariant>,
}

impl TypeDef {
    pub(crate) const fn new(
        kind: EntityKind,
        parents: &'static [EntityKind],
        description: &'static str,
    ) -> Self {
        Self {
            kind,
            parents,
            type_names: &[],
            description,
            properties: &[],
            required: None,
            invariant: None,
            publish_check: None,
        }
    }

    pub(crate) const fn properties(mut self, properties: &'static [PropertySpec]) -> Self {
        self.properties = properties;
        self
    }

    pub(crate) const fn type_names(mut self, names: &'static [&'static str]) -> Self {
        self.type_names = names;
        self
    }

    pub(crate) const fn required(mut self, required: &'static [Requirement]) -> Self {
        self.required = Some(required);
        self
    }

    pub(crate) const fn invariant(mut self, check: Invariant) -> Self {
        self.invariant = Some(check);
        self
    }

    pub(crate) const fn publish_check(mut self, check: Invariant) -> Self {
        self.publish_check = Some(check);
        self
    }
}

/// Resolved view of one kind: merged properties, lineage and checks.
#[derive(Debug)]
pub struct ResolvedType {
    pub def: &'static TypeDef,
    /// C3 linearization, the kind itself first
    pub lineage: Vec<EntityKind>,
    pub type_names: Vec<&'static str>,
    pub required: &'static [Requirement],
    schema: HashMap<&'static str, &'static PropertySpec>,
    invariants: Vec<Invariant>,
    publish_checks: Vec<Invariant>,
}

impl ResolvedType {
    pub fn property(&self, name: &str) -> Option<&'static PropertySpec> {
        self.schema.get(name).copied()
    }

    pub fn property_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schema.keys().copied()
    }

    pub fn is_a(&self, type_name: &str) -> bool {
        self.lineage.iter().any(|kind| kind.name() == type_name)
    }

    /// Run the build-time invariants, ancestors first.
    pub(crate) fn check_invariants(&self, thing: &Thing) -> Result<()> {
        self.invariants.iter().try_for_each(|check| check(thing))
    }

    pub(crate) fn check_publishable(&self, thing: &Thing) -> Result<()> {
        self.publish_checks.iter().try_for_each(|check| check(thing))
    }
}

/// All resolved kinds, keyed by kind.
#[derive(Debug)]
pub struct Registry {
    types: HashMap<EntityKind, ResolvedType>,
}

impl Registry {
    fn build() -> Self {
        let defs: HashMap<EntityKind, &'static TypeDef> =
            types::definitions().map(|def| (def.kind, def)).collect();

        let mut lineages = HashMap::new();
        let mut schemas = HashMap::new();
        let mut types = HashMap::with_capacity(defs.len());

        for &def in defs.values() {
            let lineage = linearize(def.kind, &defs, &mut lineages);
            let schema = merge_schema(def.kind, &defs, &mut schemas);

            let required = lineage
                .iter()
                .find_map(|kind| defs.get(kind).and_then(|d| d.required))
                .unwrap_or(&[]);
            let invariants = lineage
                .iter()
                .rev()
                .filter_map(|kind| defs.get(kind).and_then(|d| d.invariant))
                .collect();
            let publish_checks = lineage
                .iter()
                .rev()
                .filter_map(|kind| defs.get(kind).and_then(|d| d.publish_check))
                .collect();
            let type_names = if def.type_names.is_empty() {
                vec![def.kind.name()]
            } else {
                def.type_names.to_vec()
            };

            types.insert(
                def.kind,
                ResolvedType {
                    def,
                    lineage,
                    type_names,
                    required,
                    schema,
                    invariants,
                    publish_checks,
                },
            );
        }

        debug!(kinds = types.len(), "resolved type registry");
        Self { types }
    }

    pub fn get(&self, kind: EntityKind) -> &ResolvedType {
        // Every EntityKind has a definition; covered by the registry tests.
        &self.types[&kind]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedType> {
        self.types.values()
    }
}

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::build)
}

fn linearize(
    kind: EntityKind,
    defs: &HashMap<EntityKind, &'static TypeDef>,
    memo: &mut HashMap<EntityKind, Vec<EntityKind>>,
) -> Vec<EntityKind> {
    if let Some(done) = memo.get(&kind) {
        return done.clone();
    }
    let parents = defs.get(&kind).map_or(&[][..], |d| d.parents);

    let mut sequences: Vec<Vec<EntityKind>> = parents
        .iter()
        .map(|&parent| linearize(parent, defs, memo))
        .collect();
    sequences.push(parents.to_vec());

    let mut result = vec![kind];
    loop {
        sequences.retain(|seq| !seq.is_empty());
        if sequences.is_empty() {
            break;
        }
        // A head that appears in no other tail; fall back to the first head
        // if the hierarchy is inconsistent.
        let head = sequences
            .iter()
            .map(|seq| seq[0])
            .find(|candidate| !sequences.iter().any(|seq| seq[1..].contains(candidate)))
            .unwrap_or(sequences[0][0]);
        result.push(head);
        for seq in &mut sequences {
            if seq[0] == head {
                seq.remove(0);
            }
        }
    }

    memo.insert(kind, result.clone());
    result
}

fn merge_schema(
    kind: EntityKind,
    defs: &HashMap<EntityKind, &'static TypeDef>,
    memo: &mut HashMap<EntityKind, HashMap<&'static str, &'static PropertySpec>>,
) -> HashMap<&'static str, &'static PropertySpec> {
    if let Some(done) = memo.get(&kind) {
        return done.clone();
    }
    let mut merged = HashMap::new();
    if let Some(def) = defs.get(&kind) {
        for &parent in def.parents {
            merged.extend(merge_schema(parent, defs, memo));
        }
        merged.extend(def.properties.iter().map(|spec| (spec.name, spec)));
    }
    memo.insert(kind, merged.clone());
    merged
}
