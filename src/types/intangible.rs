//! Intangibles: structured values, offers, ratings, lists and schedules

use super::EntityKind as K;
use crate::enumeration::{EnumKind as E, ItemAvailability};
use crate::error::{Error, Result};
use crate::schema::{PropertySpec, Range::*, Requirement, TypeDef, many, one};
use crate::thing::{EntityBuilder, Thing};
use crate::value::Value;

entity_types! {
    /// Umbrella for intangible things such as quantities and structured values.
    Intangible,
    /// Alignment between a learning resource and a node in an educational framework.
    AlignmentObject,
    StructuredValue,
    /// A property-value pair, e.g. a feature of a product or place.
    PropertyValue,
    /// A point value or interval for product characteristics.
    QuantitativeValue,
    QuantitativeValueDistribution,
    MonetaryAmountDistribution,
    /// An amount of money, or a range such as a salary band.
    MonetaryAmount,
    GeoShape,
    GeoCoordinates,
    ContactPoint,
    PostalAddress,
    OpeningHoursSpecification,
    /// A summary of how users have interacted with a work, e.g. comment count.
    InteractionCounter,
    DefinedTerm,
    EntryPoint,
    ListItem,
    ItemList,
    /// A chain of linked pages ending at the current page.
    BreadcrumbList,
    /// A list of Course, Movie, Recipe or Restaurant items for rich carousels.
    Carousel,
    /// An online location for attending events.
    VirtualLocation,
    /// An offer to sell, rent or otherwise provide an item or service.
    Offer,
    Rating,
    AggregateRating,
    /// Aggregate rating of an organization as an employer.
    EmployerAggregateRating,
    /// A recurring time frame, e.g. a course meeting every Monday.
    Schedule,
    /// A profession, with salary and location data for the occupation feature.
    Occupation,
    JobPosting,
}

const ALIGNMENT_OBJECT_PROPERTIES: &[PropertySpec] = &[
    one("alignmentType", &[Text]),
    one("educationalFramework", &[Text]),
    one("targetDescription", &[Text]),
    one("targetName", &[Text]),
    one("targetUrl", &[Url]),
];

const PROPERTY_VALUE_PROPERTIES: &[PropertySpec] = &[
    one("maxValue", &[Number]),
    many(
        "measurementMethod",
        &[Entity("DefinedTerm"), Entity("MeasurementMethodEnum"), Text, Url],
    ),
    many(
        "measurementTechnique",
        &[Entity("DefinedTerm"), Entity("MeasurementMethodEnum"), Text, Url],
    ),
    one("minValue", &[Number]),
    many("propertyID", &[Text, Url]),
    one("unitCode", &[Text, Url]),
    one("unitText", &[Text]),
    one("value", &[Boolean, Text, Number, Entity("StructuredValue")]),
    one(
        "valueReference",
        &[
            Entity("DefinedTerm"),
            Text,
            Entity("MeasurementTypeEnumeration"),
            Entity("PropertyValue"),
            Entity("QualitativeValue"),
            Entity("QuantitativeValue"),
            Entity("StructuredValue"),
        ],
    ),
];

const QUANTITATIVE_VALUE_PROPERTIES: &[PropertySpec] = &[
    many("additionalProperty", &[Entity("PropertyValue")]),
    one("maxValue", &[Number]),
    one("minValue", &[Number]),
    one("unitCode", &[Text, Url]),
    one("unitText", &[Text]),
    one("value", &[Boolean, Number, Entity("StructuredValue"), Text]),
    one(
        "valueReference",
        &[
            Entity("DefinedTerm"),
            Text,
            Entity("MeasurementTypeEnumeration"),
            Entity("PropertyValue"),
            Entity("QualitativeValue"),
            Entity("QuantitativeValue"),
            Entity("StructuredValue"),
        ],
    ),
];

const DISTRIBUTION_PROPERTIES: &[PropertySpec] = &[
    one("duration", &[Duration]),
    one("median", &[Number]),
    one("percentile10", &[Number]),
    one("percentile25", &[Number]),
    one("percentile75", &[Number]),
    one("percentile90", &[Number]),
];

const MONETARY_DISTRIBUTION_PROPERTIES: &[PropertySpec] = &[one("currency", &[Text])];

const MONETARY_AMOUNT_PROPERTIES: &[PropertySpec] = &[
    one("currency", &[Text]),
    one("maxValue", &[Number]),
    one("minValue", &[Number]),
    one("validFrom", &[Date, DateTime]),
    one("validThrough", &[Date, DateTime]),
    one("value", &[Boolean, Number, Entity("StructuredValue"), Text]),
];

const GEO_SHAPE_PROPERTIES: &[PropertySpec] = &[
    one("address", &[Entity("PostalAddress"), Text]),
    one("addressCountry", &[Entity("Country"), Text]),
    one("box", &[Text]),
    one("circle", &[Text]),
    one("elevation", &[Number, Text]),
    one("line", &[Text]),
    one("polygon", &[Text]),
    one("postalCode", &[Text]),
];

const GEO_COORDINATES_PROPERTIES: &[PropertySpec] = &[
    one("address", &[Entity("PostalAddress"), Text]),
    one("addressCountry", &[Entity("Country"), Text]),
    one("elevation", &[Number, Text]),
    one("latitude", &[Number, Text]),
    one("longitude", &[Number, Text]),
    one("postalCode", &[Text]),
];

const CONTACT_POINT_PROPERTIES: &[PropertySpec] = &[
    many(
        "areaServed",
        &[Entity("AdministrativeArea"), Entity("GeoShape"), Entity("Place"), Text],
    ),
    many("availableLanguage", &[Entity("Language"), Text]),
    many("contactOption", &[Entity("ContactPointOption")]),
    one("contactType", &[Text]),
    one("email", &[Text]),
    many("faxNumber", &[Text]),
    one("hoursAvailable", &[Entity("OpeningHoursSpecification")]),
    many("productSupported", &[Entity("Product"), Text]),
    many("telephone", &[Text]),
];

const POSTAL_ADDRESS_PROPERTIES: &[PropertySpec] = &[
    one("addressCountry", &[Entity("Country"), Text]),
    one("addressLocality", &[Text]),
    one("addressRegion", &[Text]),
    one("postOfficeBoxNumber", &[Text]),
    one("postalCode", &[Text]),
    one("streetAddress", &[Text]),
];

const OPENING_HOURS_PROPERTIES: &[PropertySpec] = &[
    one("closes", &[Time]),
    many("dayOfWeek", &[Enum(E::DayOfWeek)]),
    one("opens", &[Time]),
    one("validFrom", &[Date, DateTime]),
    one("validThrough", &[Date, DateTime]),
];

const INTERACTION_COUNTER_PROPERTIES: &[PropertySpec] = &[
    one("endTime", &[DateTime, Time]),
    one("interactionService", &[Entity("WebSite")]),
    one("interactionType", &[Entity("Action")]),
    one(
        "location",
        &[Entity("Place"), Entity("PostalAddress"), Text, Entity("VirtualLocation")],
    ),
    one("startTime", &[DateTime, Time]),
    one("userInteractionCount", &[Integer]),
];

const DEFINED_TERM_PROPERTIES: &[PropertySpec] = &[
    one("inDefinedTermSet", &[Url]),
    one("termCode", &[Text]),
];

const ENTRY_POINT_PROPERTIES: &[PropertySpec] = &[
    many("actionPlatform", &[Text, Url]),
    many("contentType", &[Text]),
    many("encodingType", &[Text]),
    one("httpMethod", &[Text]),
    one("urlTemplate", &[Text]),
];

const LIST_ITEM_PROPERTIES: &[PropertySpec] = &[
    one("item", &[Entity("Thing"), Url, Text]),
    one("nextItem", &[Entity("ListItem")]),
    one("position", &[Integer, Text]),
    one("previousItem", &[Entity("ListItem")]),
];

const ITEM_LIST_PROPERTIES: &[PropertySpec] = &[
    many("itemListElement", &[Entity("ListItem"), Text, Entity("Thing")]),
    one("itemListOrder", &[Enum(E::ItemListOrderType), Text]),
    one("numberOfItems", &[Integer]),
];

const OFFER_PROPERTIES: &[PropertySpec] = &[
    many(
        "acceptedPaymentMethod",
        &[Entity("LoanOrCredit"), Entity("PaymentMethod"), Text],
    ),
    many("addOn", &[Entity("Offer")]),
    many("additionalProperty", &[Entity("PropertyValue")]),
    one("advanceBookingRequirement", &[Entity("QuantitativeValue")]),
    many(
        "areaServed",
        &[Entity("AdministrativeArea"), Entity("GeoShape"), Entity("Place"), Text],
    ),
    one("asin", &[Text]),
    one("availability", &[Enum(E::ItemAvailability)]),
    one("availabilityEnds", &[DateTime, Time]),
    one("availabilityStarts", &[DateTime, Time]),
    one("availableAtOrFrom", &[Entity("Place")]),
    one("availableDeliveryMethod", &[Entity("DeliveryMethod")]),
    one("businessFunction", &[Entity("BusinessFunction")]),
    many(
        "category",
        &[
            Enum(E::OfferCategory),
            Entity("CategoryCode"),
            Entity("PhysicalActivityCategory"),
            Entity("Thing"),
            Text,
        ],
    ),
    one("deliveryLeadTime", &[Entity("QuantitativeValue")]),
    one("eligibleDuration", &[Entity("QuantitativeValue")]),
    one("eligibleCustomerType", &[Entity("BusinessEntityType")]),
    one("eligibleQuantity", &[Entity("QuantitativeValue")]),
    many("eligibleRegion", &[Entity("GeoShape"), Entity("Place"), Text]),
    one("eligibleTransactionVolume", &[Entity("PriceSpecification")]),
    one("gtin", &[Text]),
    one("gtin12", &[Text]),
    one("gtin13", &[Text]),
    one("gtin14", &[Text]),
    one("gtin8", &[Text]),
    one("hasAdultConsideration", &[Entity("AdultOrientedEnumeration")]),
    one("includesObject", &[Entity("TypeAndQuantityNode")]),
    many("ineligibleRegion", &[Entity("GeoShape"), Entity("Place"), Text]),
    one("inventoryLevel", &[Entity("QuantitativeValue")]),
    one("itemCondition", &[Enum(E::OfferItemCondition)]),
    one("itemOffered", &[Entity("Product")]),
    one("mpn", &[Text]),
    one("offeredBy", &[Entity("Organization"), Entity("Person")]),
    one("price", &[Number]),
    one("priceCurrency", &[Text]),
    many("priceSpecification", &[Entity("PriceSpecification")]),
    one("priceValidUntil", &[Date]),
    many("review", &[Entity("Review")]),
    one("seller", &[Entity("Organization"), Entity("Person")]),
    one("serialNumber", &[Text]),
    one("sku", &[Text]),
    one("validFrom", &[DateTime]),
    one("validThrough", &[DateTime]),
    one("warranty", &[Entity("WarrantyPromise")]),
];

const RATING_PROPERTIES: &[PropertySpec] = &[
    one("author", &[Entity("Organization"), Entity("Person")]),
    one("bestRating", &[Number, Text]),
    one("ratingExplanation", &[Text]),
    one("ratingValue", &[Number, Text]),
    one("reviewAspect", &[Text]),
    one("worstRating", &[Number, Text]),
];

const AGGREGATE_RATING_PROPERTIES: &[PropertySpec] = &[
    one("itemReviewed", &[Entity("Thing")]),
    one("ratingCount", &[Integer]),
    one("reviewCount", &[Integer]),
];

const SCHEDULE_PROPERTIES: &[PropertySpec] = &[
    many("byDay", &[Enum(E::DayOfWeek), Text]),
    many("byMonth", &[Integer]),
    many("byMonthDay", &[Integer]),
    many("byMonthWeek", &[Integer]),
    one("duration", &[Duration]),
    one("endDate", &[Date, DateTime]),
    one("endTime", &[DateTime, Time]),
    many("exceptDate", &[Date, DateTime]),
    one("repeatCount", &[Integer]),
    one(
        "repeatFrequency",
        &[Duration, Enum(E::RepeatFrequency), Text],
    ),
    one("scheduleTimezone", &[Text]),
    one("startDate", &[Date, DateTime]),
    one("startTime", &[DateTime, Time]),
];

const OCCUPATION_PROPERTIES: &[PropertySpec] = &[
    one(
        "educationRequirements",
        &[Entity("EducationalOccupationalCredential"), Text],
    ),
    many(
        "estimatedSalary",
        &[Entity("MonetaryAmount"), Entity("MonetaryAmountDistribution"), Number],
    ),
    one("experienceRequirements", &[Text]),
    many("occupationLocation", &[Entity("AdministrativeArea")]),
    many("occupationalCategory", &[Text]),
    one(
        "qualifications",
        &[Entity("EducationalOccupationalCredential"), Text],
    ),
    many("responsibilities", &[Text]),
    many("skills", &[Entity("DefinedTerm"), Text]),
];

const JOB_POSTING_PROPERTIES: &[PropertySpec] = &[
    many("applicantLocationRequirements", &[Entity("AdministrativeArea")]),
    one("applicationContact", &[Entity("ContactPoint")]),
    one(
        "baseSalary",
        &[Entity("MonetaryAmount"), Number],
    ),
    one("datePosted", &[Date, DateTime]),
    one("directApply", &[Boolean]),
    one(
        "educationRequirements",
        &[Entity("EducationalOccupationalCredential"), Text],
    ),
    one("employerOverview", &[Text]),
    many("employmentType", &[Enum(E::EmploymentType), Text]),
    many(
        "estimatedSalary",
        &[Entity("MonetaryAmount"), Entity("MonetaryAmountDistribution"), Number],
    ),
    one("experienceRequirements", &[Text]),
    one("hiringOrganization", &[Entity("Organization"), Entity("Person")]),
    one("incentiveCompensation", &[Text]),
    many("industry", &[Entity("DefinedTerm"), Text]),
    one("jobBenefits", &[Text]),
    one("jobImmediateStart", &[Boolean]),
    many("jobLocation", &[Entity("Place")]),
    one("jobLocationType", &[Text]),
    one("jobStartDate", &[Date, Text]),
    one("occupationalCategory", &[Text]),
    one(
        "qualifications",
        &[Entity("EducationalOccupationalCredential"), Text],
    ),
    one("relevantOccupation", &[Entity("Occupation")]),
    one("responsibilities", &[Text]),
    one("salaryCurrency", &[Text]),
    many("skills", &[Entity("DefinedTerm"), Text]),
    one("specialCommitments", &[Text]),
    one("title", &[Text]),
    one("totalJobOpenings", &[Integer]),
    one("validThrough", &[Date, DateTime]),
    one("workHours", &[Text]),
];

const BREADCRUMB_REQUIRED: &[Requirement] = &[
    Requirement::Path("itemListElement.name"),
    Requirement::Path("itemListElement.position"),
    Requirement::UnlessLastElement("itemListElement.item"),
];

const CAROUSEL_REQUIRED: &[Requirement] = &[
    Requirement::Path("itemListElement.position"),
    Requirement::Path("itemListElement.item"),
];

const AGGREGATE_RATING_REQUIRED: &[Requirement] = &[
    Requirement::Path("ratingValue"),
    Requirement::AnyOf(&["ratingCount", "reviewCount"]),
];

const EMPLOYER_AGGREGATE_RATING_REQUIRED: &[Requirement] = &[
    Requirement::Path("itemReviewed.name"),
    Requirement::Path("ratingValue"),
    Requirement::AnyOf(&["ratingCount", "reviewCount"]),
];

const SCHEDULE_REQUIRED: &[Requirement] = &[
    Requirement::Path("duration"),
    Requirement::Path("repeatFrequency"),
    Requirement::Path("repeatCount"),
];

const OCCUPATION_REQUIRED: &[Requirement] = &[
    Requirement::Path("name"),
    Requirement::Path("estimatedSalary.currency"),
    Requirement::Path("estimatedSalary.duration"),
    Requirement::Path("estimatedSalary.name"),
    Requirement::Path("occupationLocation"),
];

const JOB_POSTING_REQUIRED: &[Requirement] = &[
    Requirement::Path("datePosted"),
    Requirement::Path("description"),
    Requirement::Path("hiringOrganization.name"),
    Requirement::Path("title"),
    Requirement::AnyOf(&["jobLocation", "applicantLocationRequirements"]),
];

static INTANGIBLE: TypeDef = TypeDef::new(
    K::Intangible,
    &[K::Thing],
    "A utility class that serves as the umbrella for a number of intangible things such as quantities and structured values.",
);

static ALIGNMENT_OBJECT: TypeDef = TypeDef::new(
    K::AlignmentObject,
    &[K::Intangible],
    "An alignment between a learning resource and a node in an educational framework.",
)
.properties(ALIGNMENT_OBJECT_PROPERTIES);

static STRUCTURED_VALUE: TypeDef = TypeDef::new(
    K::StructuredValue,
    &[K::Intangible],
    "A value with more structure than plain text or a reference to another thing.",
);

static PROPERTY_VALUE: TypeDef = TypeDef::new(
    K::PropertyValue,
    &[K::StructuredValue],
    "A property-value pair, e.g. representing a feature of a product or place.",
)
.properties(PROPERTY_VALUE_PROPERTIES);

static QUANTITATIVE_VALUE: TypeDef = TypeDef::new(
    K::QuantitativeValue,
    &[K::StructuredValue],
    "A point value or interval for product characteristics and other purposes.",
)
.properties(QUANTITATIVE_VALUE_PROPERTIES);

static QUANTITATIVE_VALUE_DISTRIBUTION: TypeDef = TypeDef::new(
    K::QuantitativeValueDistribution,
    &[K::StructuredValue],
    "A statistical distribution of values.",
)
.properties(DISTRIBUTION_PROPERTIES);

static MONETARY_AMOUNT_DISTRIBUTION: TypeDef = TypeDef::new(
    K::MonetaryAmountDistribution,
    &[K::QuantitativeValueDistribution],
    "A statistical distribution of monetary amounts.",
)
.properties(MONETARY_DISTRIBUTION_PROPERTIES);

static MONETARY_AMOUNT: TypeDef = TypeDef::new(
    K::MonetaryAmount,
    &[K::StructuredValue],
    "A monetary value or range.",
)
.properties(MONETARY_AMOUNT_PROPERTIES);

static GEO_SHAPE: TypeDef = TypeDef::new(
    K::GeoShape,
    &[K::StructuredValue],
    "The geographic shape of a place, described by latitude/longitude pairs.",
)
.properties(GEO_SHAPE_PROPERTIES);

static GEO_COORDINATES: TypeDef = TypeDef::new(
    K::GeoCoordinates,
    &[K::StructuredValue],
    "The geographic coordinates of a place or event.",
)
.properties(GEO_COORDINATES_PROPERTIES);

static CONTACT_POINT: TypeDef = TypeDef::new(
    K::ContactPoint,
    &[K::StructuredValue],
    "A contact point, for example a customer complaints department.",
)
.properties(CONTACT_POINT_PROPERTIES);

static POSTAL_ADDRESS: TypeDef =
    TypeDef::new(K::PostalAddress, &[K::ContactPoint], "The mailing address.")
        .properties(POSTAL_ADDRESS_PROPERTIES);

static OPENING_HOURS_SPECIFICATION: TypeDef = TypeDef::new(
    K::OpeningHoursSpecification,
    &[K::StructuredValue],
    "Hours during which a business or service is open.",
)
.properties(OPENING_HOURS_PROPERTIES);

static INTERACTION_COUNTER: TypeDef = TypeDef::new(
    K::InteractionCounter,
    &[K::StructuredValue],
    "A summary of how users have interacted with this creative work.",
)
.properties(INTERACTION_COUNTER_PROPERTIES)
.invariant(check_interaction_count);

static DEFINED_TERM: TypeDef = TypeDef::new(
    K::DefinedTerm,
    &[K::Intangible],
    "A word, name, acronym or phrase with a formal definition.",
)
.properties(DEFINED_TERM_PROPERTIES);

static ENTRY_POINT: TypeDef = TypeDef::new(
    K::EntryPoint,
    &[K::Intangible],
    "An entry point, within some web-based protocol.",
)
.properties(ENTRY_POINT_PROPERTIES);

static LIST_ITEM: TypeDef = TypeDef::new(
    K::ListItem,
    &[K::Intangible],
    "A list item, e.g. a step in a checklist or how-to description.",
)
.properties(LIST_ITEM_PROPERTIES);

static ITEM_LIST: TypeDef =
    TypeDef::new(K::ItemList, &[K::Intangible], "A list of items of any sort.")
        .properties(ITEM_LIST_PROPERTIES)
        .invariant(check_item_list_order);

static BREADCRUMB_LIST: TypeDef = TypeDef::new(
    K::BreadcrumbList,
    &[K::ItemList],
    "A chain of linked web pages, typically described using at least their URL and name, ending with the current page.",
)
.required(BREADCRUMB_REQUIRED);

static CAROUSEL: TypeDef = TypeDef::new(
    K::Carousel,
    &[K::ItemList],
    "A list of Course, Movie, Recipe or Restaurant items shown as a carousel.",
)
.type_names(&["ItemList"])
.required(CAROUSEL_REQUIRED)
.invariant(super::composite::check_carousel_items);

static VIRTUAL_LOCATION: TypeDef = TypeDef::new(
    K::VirtualLocation,
    &[K::Intangible],
    "An online or virtual location for attending events.",
);

static OFFER: TypeDef = TypeDef::new(
    K::Offer,
    &[K::Intangible],
    "An offer to transfer some rights to an item or to provide a service.",
)
.properties(OFFER_PROPERTIES);

static RATING: TypeDef = TypeDef::new(
    K::Rating,
    &[K::Intangible],
    "An evaluation on a numeric scale, such as 1 to 5 stars.",
)
.properties(RATING_PROPERTIES);

static AGGREGATE_RATING: TypeDef = TypeDef::new(
    K::AggregateRating,
    &[K::Rating],
    "The average rating based on multiple ratings or reviews.",
)
.properties(AGGREGATE_RATING_PROPERTIES)
.required(AGGREGATE_RATING_REQUIRED)
.invariant(check_rating_counts);

static EMPLOYER_AGGREGATE_RATING: TypeDef = TypeDef::new(
    K::EmployerAggregateRating,
    &[K::AggregateRating],
    "An aggregate rating of an organization related to its role as an employer.",
)
.required(EMPLOYER_AGGREGATE_RATING_REQUIRED);

static SCHEDULE: TypeDef = TypeDef::new(
    K::Schedule,
    &[K::Intangible],
    "A schedule defines a repeating time period used to describe a regularly occurring event.",
)
.properties(SCHEDULE_PROPERTIES)
.required(SCHEDULE_REQUIRED);

static OCCUPATION: TypeDef = TypeDef::new(
    K::Occupation,
    &[K::Intangible],
    "A profession, may involve prolonged training and/or a formal qualification.",
)
.properties(OCCUPATION_PROPERTIES)
.required(OCCUPATION_REQUIRED);

static JOB_POSTING: TypeDef = TypeDef::new(
    K::JobPosting,
    &[K::Intangible],
    "A listing that describes a job opening in a certain organization.",
)
.properties(JOB_POSTING_PROPERTIES)
.required(JOB_POSTING_REQUIRED);

pub(super) static DEFINITIONS: &[&TypeDef] = &[
    &INTANGIBLE,
    &ALIGNMENT_OBJECT,
    &STRUCTURED_VALUE,
    &PROPERTY_VALUE,
    &QUANTITATIVE_VALUE,
    &QUANTITATIVE_VALUE_DISTRIBUTION,
    &MONETARY_AMOUNT_DISTRIBUTION,
    &MONETARY_AMOUNT,
    &GEO_SHAPE,
    &GEO_COORDINATES,
    &CONTACT_POINT,
    &POSTAL_ADDRESS,
    &OPENING_HOURS_SPECIFICATION,
    &INTERACTION_COUNTER,
    &DEFINED_TERM,
    &ENTRY_POINT,
    &LIST_ITEM,
    &ITEM_LIST,
    &BREADCRUMB_LIST,
    &CAROUSEL,
    &VIRTUAL_LOCATION,
    &OFFER,
    &RATING,
    &AGGREGATE_RATING,
    &EMPLOYER_AGGREGATE_RATING,
    &SCHEDULE,
    &OCCUPATION,
    &JOB_POSTING,
];

fn check_rating_counts(rating: &Thing) -> Result<()> {
    if rating.get("ratingCount").is_none() && rating.get("reviewCount").is_none() {
        return Err(Error::constraint(
            rating.kind().name(),
            "at least one of rating_count or review_count is required",
        ));
    }
    Ok(())
}

fn check_item_list_order(list: &Thing) -> Result<()> {
    match list.get("itemListOrder") {
        None | Some(Value::Enum(_)) => Ok(()),
        Some(Value::Text(order)) if matches!(order.as_str(), "Ascending" | "Descending" | "Unordered") => {
            Ok(())
        }
        Some(_) => Err(Error::constraint(list.kind().name(), "Bad item list order")),
    }
}

fn check_interaction_count(counter: &Thing) -> Result<()> {
    match counter.get("userInteractionCount").and_then(Value::as_i64) {
        Some(count) if count < 0 => Err(Error::constraint(
            counter.kind().name(),
            format!("user_interaction_count must be non-negative, got {count}"),
        )),
        _ => Ok(()),
    }
}

impl PropertyValue {
    pub fn new(name: &str, value: impl Into<Value>) -> EntityBuilder {
        Self::builder().prop("name", name).prop("value", value)
    }
}

impl QuantitativeValue {
    pub fn new(value: impl Into<Value>) -> EntityBuilder {
        Self::builder().prop("value", value)
    }
}

impl MonetaryAmount {
    pub fn new(value: impl Into<Value>, currency: &str) -> EntityBuilder {
        Self::builder().prop("value", value).prop("currency", currency)
    }
}

impl InteractionCounter {
    pub fn new(user_interaction_count: i64, interaction_type: Thing) -> EntityBuilder {
        Self::builder()
            .prop("userInteractionCount", user_interaction_count)
            .prop("interactionType", interaction_type)
    }
}

impl ItemList {
    pub fn new(item_list_element: impl Into<Value>) -> EntityBuilder {
        Self::builder().prop("itemListElement", item_list_element)
    }
}

impl BreadcrumbList {
    pub fn new(item_list_element: impl Into<Value>) -> EntityBuilder {
        Self::builder().prop("itemListElement", item_list_element)
    }
}

impl VirtualLocation {
    pub fn new(url: &str) -> EntityBuilder {
        Self::builder().prop("url", url)
    }
}

impl Offer {
    pub fn new(availability: ItemAvailability) -> EntityBuilder {
        Self::builder().prop("availability", availability)
    }
}

impl Rating {
    /// A rating on the default 0 to 5 scale.
    pub fn new(rating_value: impl Into<Value>) -> EntityBuilder {
        Self::builder()
            .prop("ratingValue", rating_value)
            .prop("bestRating", 5.0)
            .prop("worstRating", 0.0)
    }
}

impl AggregateRating {
    /// An aggregate rating on the default 0 to 5 scale. A rating or review
    /// count must still be set before `build()`.
    pub fn new(rating_value: impl Into<Value>) -> EntityBuilder {
        Self::builder()
            .prop("ratingValue", rating_value)
            .prop("bestRating", 5.0)
            .prop("worstRating", 0.0)
    }
}

impl EmployerAggregateRating {
    pub fn new(item_reviewed: Thing, rating_value: impl Into<Value>) -> EntityBuilder {
        Self::builder()
            .prop("itemReviewed", item_reviewed)
            .prop("ratingValue", rating_value)
            .prop("bestRating", 5.0)
            .prop("worstRating", 0.0)
    }
}

impl JobPosting {
    pub fn new(
        title: &str,
        description: &str,
        date_posted: impl Into<Value>,
        hiring_organization: Thing,
    ) -> EntityBuilder {
        Self::builder()
            .prop("title", title)
            .prop("description", description)
            .prop("datePosted", date_posted)
            .prop("hiringOrganization", hiring_organization)
    }
}
