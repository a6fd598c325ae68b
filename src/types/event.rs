//! Events, broadcasts and course sessions

use serde_json::Value as JsonValue;

use super::EntityKind as K;
use crate::enumeration::{EnumKind as E, EventAttendanceModeEnumeration};
use crate::error::{Error, Result};
use crate::gsc::get_property;
use crate::schema::{PropertySpec, Range::*, Requirement, TypeDef, many, one};
use crate::thing::{EntityBuilder, Thing};
use crate::value::Value;

entity_types! {
    /// An event happening at a certain time and location.
    Event,
    PublicationEvent,
    /// A broadcast of a video or live stream, e.g. a scheduled premiere.
    BroadcastEvent,
    /// One offering of a course: its mode, schedule and instructors.
    CourseInstance,
}

const EVENT_PROPERTIES: &[PropertySpec] = &[
    many("about", &[Entity("Thing")]),
    many("actor", &[Entity("PerformingGroup"), Entity("Person")]),
    many("attendee", &[Entity("Organization"), Entity("Person")]),
    many("audience", &[Text]),
    many("composer", &[Entity("Organization"), Entity("Person")]),
    many("contributor", &[Entity("Organization"), Entity("Person")]),
    many("director", &[Entity("Person")]),
    one("doorTime", &[DateTime, Time]),
    one("duration", &[Duration]),
    one("endDate", &[Date, DateTime]),
    one(
        "eventAttendanceMode",
        &[Enum(E::EventAttendanceModeEnumeration)],
    ),
    many("eventSchedule", &[Entity("Schedule")]),
    one("eventStatus", &[Enum(E::EventStatusType)]),
    many("funder", &[Entity("Organization"), Entity("Person")]),
    one("inLanguage", &[Text]),
    one("isAccessibleForFree", &[Boolean]),
    many("keywords", &[Entity("DefinedTerm"), Text, Url]),
    many(
        "location",
        &[Entity("Place"), Entity("PostalAddress"), Text, Entity("VirtualLocation")],
    ),
    one("maximumAttendeeCapacity", &[Integer]),
    many("offers", &[Entity("Offer")]),
    many("organizer", &[Entity("Organization"), Entity("Person")]),
    many("performer", &[Entity("Organization"), Entity("Person")]),
    one("previousStartDate", &[Date, DateTime]),
    one("recordedIn", &[Entity("CreativeWork")]),
    one("remainingAttendeeCapacity", &[Integer]),
    many("review", &[Entity("Review")]),
    many("sponsor", &[Entity("Organization"), Entity("Person")]),
    one("startDate", &[Date, DateTime]),
    many("subEvent", &[Entity("Event")]),
    one("superEvent", &[Entity("Event")]),
    many("translator", &[Entity("Organization"), Entity("Person")]),
    one("typicalAgeRange", &[Text]),
    many("workFeatured", &[Entity("CreativeWork")]),
    many("workPerformed", &[Entity("CreativeWork")]),
];

const PUBLICATION_EVENT_PROPERTIES: &[PropertySpec] = &[
    one("publishedBy", &[Entity("Organization"), Entity("Person")]),
    one("publishedOn", &[Entity("Organization"), Text]),
];

const BROADCAST_EVENT_PROPERTIES: &[PropertySpec] = &[
    one("broadcastOfEvent", &[Entity("Event")]),
    one("isLiveBroadcast", &[Boolean]),
    many("subtitleLanguage", &[Text]),
    one("videoFormat", &[Text]),
];

const COURSE_INSTANCE_PROPERTIES: &[PropertySpec] = &[
    many("courseMode", &[Enum(E::CourseMode), Text, Url]),
    one("courseSchedule", &[Entity("Schedule")]),
    one("courseWorkload", &[Duration, Text]),
    many("instructor", &[Entity("Person")]),
];

const EVENT_REQUIRED: &[Requirement] = &[
    Requirement::Path("name"),
    Requirement::Path("startDate"),
    Requirement::Path("location"),
];

const BROADCAST_EVENT_REQUIRED: &[Requirement] = &[
    Requirement::Path("isLiveBroadcast"),
    Requirement::Path("startDate"),
];

const COURSE_INSTANCE_REQUIRED: &[Requirement] = &[Requirement::Path("courseMode")];

static EVENT: TypeDef = TypeDef::new(
    K::Event,
    &[K::Thing],
    "An event happening at a certain time and location, such as a concert, lecture, or festival.",
)
.properties(EVENT_PROPERTIES)
.required(EVENT_REQUIRED)
.publish_check(check_attendance_location);

static PUBLICATION_EVENT: TypeDef = TypeDef::new(
    K::PublicationEvent,
    &[K::Event],
    "A PublicationEvent corresponds indifferently to the event of publication for a CreativeWork of any type.",
)
.properties(PUBLICATION_EVENT_PROPERTIES);

static BROADCAST_EVENT: TypeDef = TypeDef::new(
    K::BroadcastEvent,
    &[K::PublicationEvent],
    "An over the air or online broadcast event.",
)
.properties(BROADCAST_EVENT_PROPERTIES)
.required(BROADCAST_EVENT_REQUIRED);

static COURSE_INSTANCE: TypeDef = TypeDef::new(
    K::CourseInstance,
    &[K::Event],
    "An instance of a Course which is distinct from other instances because it is offered at a different time or location or through different media or modes of study.",
)
.properties(COURSE_INSTANCE_PROPERTIES)
.required(COURSE_INSTANCE_REQUIRED);

pub(super) static DEFINITIONS: &[&TypeDef] = &[
    &EVENT,
    &PUBLICATION_EVENT,
    &BROADCAST_EVENT,
    &COURSE_INSTANCE,
];

fn has_value(path: &str, data: &JsonValue) -> bool {
    match get_property(path, data) {
        None | Some(JsonValue::Null) => false,
        Some(JsonValue::String(s)) => !s.is_empty(),
        Some(JsonValue::Array(items)) => items.iter().any(|item| !item.is_null()),
        Some(_) => true,
    }
}

/// Offline events need a street address, online ones a URL.
fn check_attendance_location(event: &Thing) -> Result<()> {
    let Some(Value::Enum(mode)) = event.get("eventAttendanceMode") else {
        return Ok(());
    };
    let data = event.to_dict_with(false);
    let physical = has_value("location.address.streetAddress", &data)
        || get_property("location.address", &data).is_some_and(|address| address.is_string());
    let virtual_url = has_value("location.url", &data);

    let offline = EventAttendanceModeEnumeration::Offline.value();
    let online = EventAttendanceModeEnumeration::Online.value();
    let (satisfied, message) = if mode.value == offline {
        (
            physical,
            "an offline event needs location.address.streetAddress",
        )
    } else if mode.value == online {
        (virtual_url, "an online event needs location.url")
    } else {
        (
            physical || virtual_url,
            "a mixed event needs a street address or a virtual location url",
        )
    };

    if satisfied {
        Ok(())
    } else {
        Err(Error::constraint(event.kind().name(), message))
    }
}

impl Event {
    /// Convenience constructor for the usual name, start and venue triple.
    ///
    /// None of the three is required on an `Event`. Start from
    /// [`Event::builder`] to leave any of them out; an empty or `None`
    /// argument here is dropped like any other empty value.
    pub fn new(
        name: &str,
        start_date: impl Into<Value>,
        location: impl Into<Value>,
    ) -> EntityBuilder {
        Self::builder()
            .prop("name", name)
            .prop("startDate", start_date)
            .prop("location", location)
    }
}

impl BroadcastEvent {
    /// A live broadcast between two instants.
    pub fn new(
        name: &str,
        start_date: impl Into<Value>,
        end_date: impl Into<Value>,
    ) -> EntityBuilder {
        Self::builder()
            .prop("name", name)
            .prop("isLiveBroadcast", true)
            .prop("startDate", start_date)
            .prop("endDate", end_date)
    }
}

impl CourseInstance {
    pub fn new(course_mode: impl Into<Value>) -> EntityBuilder {
        Self::builder().prop("courseMode", course_mode)
    }
}
