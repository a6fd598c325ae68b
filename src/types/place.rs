//! Places and administrative areas

use super::EntityKind as K;
use crate::schema::{PropertySpec, Range::*, TypeDef, many, one};
use crate::thing::EntityBuilder;
use crate::value::Value;

entity_types! {
    /// Entities that have a somewhat fixed, physical extension.
    Place,
    AdministrativeArea,
    City,
    Country,
    State,
}

const PLACE_PROPERTIES: &[PropertySpec] = &[
    many("additionalProperty", &[Entity("PropertyValue")]),
    one("address", &[Entity("PostalAddress"), Text]),
    one("aggregateRating", &[Entity("AggregateRating")]),
    many("amenityFeature", &[Entity("LocationFeatureSpecification")]),
    one("branchCode", &[Text]),
    one("containedInPlace", &[Entity("Place")]),
    many("containsPlace", &[Entity("Place")]),
    many("event", &[Entity("Event")]),
    many("faxNumber", &[Text]),
    one("geo", &[Entity("GeoCoordinates"), Entity("GeoShape")]),
    one("geoContains", &[Entity("GeospatialGeometry"), Entity("Place")]),
    one("geoCoveredBy", &[Entity("GeospatialGeometry"), Entity("Place")]),
    one("geoCovers", &[Entity("GeospatialGeometry"), Entity("Place")]),
    one("geoCrosses", &[Entity("GeospatialGeometry"), Entity("Place")]),
    one("geoDisjoint", &[Entity("GeospatialGeometry"), Entity("Place")]),
    one("geoEquals", &[Entity("GeospatialGeometry"), Entity("Place")]),
    one("geoIntersects", &[Entity("GeospatialGeometry"), Entity("Place")]),
    one("geoOverlaps", &[Entity("GeospatialGeometry"), Entity("Place")]),
    one("geoTouches", &[Entity("GeospatialGeometry"), Entity("Place")]),
    one("geoWithin", &[Entity("GeospatialGeometry"), Entity("Place")]),
    one("globalLocationNumber", &[Text]),
    many("hasCertification", &[Entity("Certification")]),
    one("hasDriveThroughService", &[Boolean]),
    many("hasGS1DigitalLink", &[Url]),
    many("hasMap", &[Entity("Map"), Url]),
    one("isAccessibleForFree", &[Boolean]),
    one("isicV4", &[Text]),
    many("keywords", &[Entity("DefinedTerm"), Text, Url]),
    one("latitude", &[Number, Text]),
    one("logo", &[Entity("ImageObject"), Url]),
    one("longitude", &[Number, Text]),
    one("maximumAttendeeCapacity", &[Integer]),
    one(
        "openingHoursSpecification",
        &[Entity("OpeningHoursSpecification")],
    ),
    many("photo", &[Entity("ImageObject"), Entity("Photograph")]),
    one("publicAccess", &[Boolean]),
    many("review", &[Entity("Review")]),
    one("slogan", &[Text]),
    one("smokingAllowed", &[Boolean]),
    one(
        "specialOpeningHoursSpecification",
        &[Entity("OpeningHoursSpecification")],
    ),
    many("telephone", &[Text]),
    many("tourBookingPage", &[Url]),
];

static PLACE: TypeDef = TypeDef::new(
    K::Place,
    &[K::Thing],
    "Entities that have a somewhat fixed, physical extension.",
)
.properties(PLACE_PROPERTIES);

static ADMINISTRATIVE_AREA: TypeDef = TypeDef::new(
    K::AdministrativeArea,
    &[K::Place],
    "A geographical region, typically under the jurisdiction of a particular government.",
);

static CITY: TypeDef = TypeDef::new(K::City, &[K::AdministrativeArea], "A city or town.");

static COUNTRY: TypeDef = TypeDef::new(K::Country, &[K::AdministrativeArea], "A country.");

static STATE: TypeDef = TypeDef::new(
    K::State,
    &[K::AdministrativeArea],
    "A state or province of a country.",
);

pub(super) static DEFINITIONS: &[&TypeDef] =
    &[&PLACE, &ADMINISTRATIVE_AREA, &CITY, &COUNTRY, &STATE];

impl Place {
    pub fn new(name: &str, address: impl Into<Value>) -> EntityBuilder {
        Self::builder().prop("name", name).prop("address", address)
    }
}
