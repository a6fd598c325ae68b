//! Actions, mostly used as interaction types and potential actions

use super::EntityKind as K;
use crate::enumeration::EnumKind as E;
use crate::schema::{PropertySpec, Range::*, Requirement, TypeDef, many, one};
use crate::thing::EntityBuilder;
use crate::value::Value;

entity_types! {
    /// An action performed by a direct agent on a direct object.
    Action,
    CreateAction,
    WriteAction,
    ConsumeAction,
    WatchAction,
    ReactAction,
    LikeAction,
    /// Seeking to a point in a video, with `target` as a URL template.
    SeekToAction,
    /// Solving a math problem, with `target` as a URL template.
    SolveMathAction,
}

const ACTION_PROPERTIES: &[PropertySpec] = &[
    one("actionStatus", &[Text]),
    many("agent", &[Entity("Organization"), Entity("Person")]),
    one("endTime", &[DateTime, Time]),
    one("error", &[Entity("Thing")]),
    many("instrument", &[Entity("Thing")]),
    many(
        "location",
        &[Entity("Place"), Entity("PostalAddress"), Text, Entity("VirtualLocation")],
    ),
    many("object", &[Entity("Thing")]),
    many("participant", &[Entity("Organization"), Entity("Person")]),
    many("provider", &[Entity("Organization"), Entity("Person")]),
    many("result", &[Entity("Thing")]),
    one("startTime", &[DateTime, Time]),
    many("target", &[Entity("EntryPoint"), Url]),
];

const WRITE_ACTION_PROPERTIES: &[PropertySpec] = &[one("inLanguage", &[Text])];

const CONSUME_ACTION_PROPERTIES: &[PropertySpec] =
    &[many("expectsAcceptanceOf", &[Entity("Offer")])];

const SEEK_TO_ACTION_PROPERTIES: &[PropertySpec] = &[one("startOffset", &[Number])];

const SOLVE_MATH_ACTION_PROPERTIES: &[PropertySpec] = &[
    many("eduQuestionType", &[Enum(E::ProblemType), Text]),
    one("mathExpression", &[Text]),
];

const SEEK_TO_ACTION_REQUIRED: &[Requirement] = &[
    Requirement::Path("target"),
    Requirement::Path("startOffset-input"),
];

const SOLVE_MATH_ACTION_REQUIRED: &[Requirement] = &[
    Requirement::Path("target"),
    Requirement::Path("mathExpression-input"),
];

static ACTION: TypeDef = TypeDef::new(
    K::Action,
    &[K::Thing],
    "An action performed by a direct agent and indirect participants upon a direct object.",
)
.properties(ACTION_PROPERTIES);

static CREATE_ACTION: TypeDef = TypeDef::new(
    K::CreateAction,
    &[K::Action],
    "The act of deliberately creating/producing/generating/building a result out of the agent.",
);

static WRITE_ACTION: TypeDef = TypeDef::new(
    K::WriteAction,
    &[K::CreateAction],
    "The act of authoring written creative content.",
)
.properties(WRITE_ACTION_PROPERTIES);

static CONSUME_ACTION: TypeDef = TypeDef::new(
    K::ConsumeAction,
    &[K::Action],
    "The act of ingesting information/resources/food.",
)
.properties(CONSUME_ACTION_PROPERTIES);

static WATCH_ACTION: TypeDef = TypeDef::new(
    K::WatchAction,
    &[K::ConsumeAction],
    "The act of consuming dynamic/moving visual content.",
);

static REACT_ACTION: TypeDef = TypeDef::new(
    K::ReactAction,
    &[K::Action],
    "The act of responding instinctively and emotionally to an object, expressing a sentiment.",
);

static LIKE_ACTION: TypeDef = TypeDef::new(
    K::LikeAction,
    &[K::ReactAction],
    "The act of expressing a positive sentiment about the object.",
);

static SEEK_TO_ACTION: TypeDef = TypeDef::new(
    K::SeekToAction,
    &[K::Action],
    "The act of seeking to a specific point in a video or audio.",
)
.properties(SEEK_TO_ACTION_PROPERTIES)
.required(SEEK_TO_ACTION_REQUIRED);

static SOLVE_MATH_ACTION: TypeDef = TypeDef::new(
    K::SolveMathAction,
    &[K::Action],
    "The action that takes in a math expression and directs users to a page potentially capable of solving/simplifying that expression.",
)
.properties(SOLVE_MATH_ACTION_PROPERTIES)
.required(SOLVE_MATH_ACTION_REQUIRED);

pub(super) static DEFINITIONS: &[&TypeDef] = &[
    &ACTION,
    &CREATE_ACTION,
    &WRITE_ACTION,
    &CONSUME_ACTION,
    &WATCH_ACTION,
    &REACT_ACTION,
    &LIKE_ACTION,
    &SEEK_TO_ACTION,
    &SOLVE_MATH_ACTION,
];

impl SeekToAction {
    /// `target` is a URL template with a `{seek_to_second_number}` placeholder.
    pub fn new(target: &str) -> EntityBuilder {
        Self::builder().prop("target", target)
    }
}

impl SolveMathAction {
    pub fn new(target: &str, math_expression_input: impl Into<Value>) -> EntityBuilder {
        Self::builder()
            .prop("target", target)
            .annotated("math_expression", "input", math_expression_input)
    }
}
