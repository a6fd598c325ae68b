//! People and organizations

use super::EntityKind as K;
use crate::enumeration::EnumKind as E;
use crate::schema::{PropertySpec, Range::*, Requirement, TypeDef, many, one};
use crate::thing::EntityBuilder;

entity_types! {
    /// A person (alive, dead, undead, or fictional).
    Person,
    /// An organization such as a school, NGO, corporation or club.
    Organization,
    PerformingGroup,
    EducationalOrganization,
    /// A physical business or branch; both an organization and a place.
    LocalBusiness,
    FoodEstablishment,
    Restaurant,
}

const PERSON_PROPERTIES: &[PropertySpec] = &[
    many("additionalName", &[Text]),
    one("address", &[Entity("PostalAddress"), Text]),
    many("affiliation", &[Entity("Organization")]),
    one("agentInteractionStatistic", &[Entity("InteractionCounter")]),
    many(
        "alumniOf",
        &[Entity("EducationalOrganization"), Entity("Organization")],
    ),
    many("award", &[Text]),
    one("birthDate", &[Date]),
    one("birthPlace", &[Entity("Place")]),
    many("brand", &[Entity("Brand"), Entity("Organization")]),
    many("callSign", &[Text]),
    many("children", &[Entity("Person")]),
    many("colleague", &[Entity("Person"), Url]),
    many("contactPoint", &[Entity("ContactPoint")]),
    one("deathDate", &[Date]),
    one("deathPlace", &[Entity("Place")]),
    one("duns", &[Text]),
    many("email", &[Text]),
    one("familyName", &[Text]),
    many("faxNumber", &[Text]),
    many("follows", &[Entity("Person")]),
    many("funder", &[Entity("Person"), Entity("Organization")]),
    many("funding", &[Entity("Grant")]),
    one("gender", &[Enum(E::GenderType), Text]),
    one("givenName", &[Text]),
    one("globalLocationNumber", &[Text]),
    many("hasCertification", &[Entity("Certification")]),
    many(
        "hasCredential",
        &[Entity("EducationalOccupationalCredential")],
    ),
    many("hasOccupation", &[Entity("Occupation")]),
    many("hasOfferCatalog", &[Entity("OfferCatalog")]),
    many("hasPOS", &[Entity("Place")]),
    one("height", &[Entity("Distance"), Entity("QuantitativeValue")]),
    one("homeLocation", &[Entity("ContactPoint"), Entity("Place")]),
    one("honorificPrefix", &[Text]),
    one("honorificSuffix", &[Text]),
    one("interactionStatistic", &[Entity("InteractionCounter")]),
    one("isicV4", &[Text]),
    many("jobTitle", &[Entity("DefinedTerm"), Text]),
    many("knows", &[Entity("Person")]),
    many("knowsAbout", &[Entity("Thing"), Text, Url]),
    many("knowsLanguage", &[Entity("Language"), Text]),
    many("makesOffer", &[Entity("Offer")]),
    many(
        "memberOf",
        &[
            Entity("MemberProgramTier"),
            Entity("Organization"),
            Entity("ProgramMembership"),
        ],
    ),
    one("naics", &[Text]),
    many("nationality", &[Entity("Country")]),
    one("netWorth", &[Entity("MonetaryAmount"), Entity("PriceSpecification")]),
    many("owns", &[Entity("OwnershipInfo"), Entity("Product")]),
    many("parent", &[Entity("Person")]),
    many("performerIn", &[Entity("Event")]),
    many("publishingPrinciples", &[Entity("CreativeWork"), Url]),
    many("relatedTo", &[Entity("Person")]),
    many("seeks", &[Entity("Demand")]),
    many("sibling", &[Entity("Person")]),
    many("skills", &[Entity("DefinedTerm"), Text]),
    many("sponsor", &[Entity("Organization"), Entity("Person")]),
    one("spouse", &[Entity("Person")]),
    one("taxID", &[Text]),
    many("telephone", &[Text]),
    one("vatID", &[Text]),
    one("weight", &[Entity("QuantitativeValue")]),
    many("workLocation", &[Entity("ContactPoint"), Entity("Place")]),
    many("worksFor", &[Entity("Organization")]),
];

const ORGANIZATION_PROPERTIES: &[PropertySpec] = &[
    many(
        "acceptedPaymentMethod",
        &[Entity("LoanOrCredit"), Entity("PaymentMethod"), Text],
    ),
    many("actionableFeedbackPolicy", &[Entity("CreativeWork"), Url]),
    one("address", &[Entity("PostalAddress"), Text]),
    one("agentInteractionStatistic", &[Entity("InteractionCounter")]),
    one("aggregateRating", &[Entity("AggregateRating")]),
    many("alumni", &[Entity("Person")]),
    many(
        "areaServed",
        &[Entity("AdministrativeArea"), Entity("GeoShape"), Entity("Place"), Text],
    ),
    many("award", &[Text]),
    many("brand", &[Entity("Brand"), Entity("Organization")]),
    many("contactPoint", &[Entity("ContactPoint")]),
    many("correctionsPolicy", &[Entity("CreativeWork"), Url]),
    many("department", &[Entity("Organization")]),
    one("dissolutionDate", &[Date]),
    many("diversityPolicy", &[Entity("CreativeWork"), Url]),
    many("diversityStaffingReport", &[Entity("Article"), Url]),
    one("duns", &[Text]),
    many("email", &[Text]),
    many("employee", &[Entity("Person")]),
    many("ethicsPolicy", &[Entity("CreativeWork"), Url]),
    many("event", &[Entity("Event")]),
    many("faxNumber", &[Text]),
    many("founder", &[Entity("Person")]),
    one("foundingDate", &[Date]),
    one("foundingLocation", &[Entity("Place")]),
    many("funder", &[Entity("Organization"), Entity("Person")]),
    one("globalLocationNumber", &[Text]),
    many(
        "hasCredential",
        &[Entity("EducationalOccupationalCredential")],
    ),
    many("hasMerchantReturnPolicy", &[Entity("MerchantReturnPolicy")]),
    many("hasOfferCatalog", &[Entity("OfferCatalog")]),
    many("hasPOS", &[Entity("Place")]),
    one("isicV4", &[Text]),
    many("keywords", &[Entity("DefinedTerm"), Text, Url]),
    many("knowsAbout", &[Text, Url, Entity("Thing")]),
    many("knowsLanguage", &[Text, Entity("Language")]),
    one("legalName", &[Text]),
    one("leiCode", &[Text]),
    many(
        "location",
        &[Entity("Place"), Entity("PostalAddress"), Text, Entity("VirtualLocation")],
    ),
    one("logo", &[Entity("ImageObject"), Url]),
    many("makesOffer", &[Entity("Offer")]),
    many("member", &[Entity("Organization"), Entity("Person")]),
    many(
        "memberOf",
        &[Entity("Organization"), Entity("ProgramMembership")],
    ),
    one("naics", &[Text]),
    one("numberOfEmployees", &[Entity("QuantitativeValue")]),
    many("owns", &[Entity("OwnershipInfo"), Entity("Product")]),
    many("ownershipFundingInfo", &[Entity("CreativeWork"), Text, Url]),
    one("parentOrganization", &[Entity("Organization")]),
    many("publishingPrinciples", &[Entity("CreativeWork"), Url]),
    many("review", &[Entity("Review")]),
    many("seeks", &[Entity("Demand")]),
    one("slogan", &[Text]),
    many("sponsor", &[Entity("Organization"), Entity("Person")]),
    many("subOrganization", &[Entity("Organization")]),
    one("taxID", &[Text]),
    many("telephone", &[Text]),
    many("unnamedSourcesPolicy", &[Entity("CreativeWork"), Url]),
    one("vatID", &[Text]),
];

const LOCAL_BUSINESS_PROPERTIES: &[PropertySpec] = &[
    one("currenciesAccepted", &[Text]),
    many("openingHours", &[Text]),
    one("paymentAccepted", &[Text]),
    one("priceRange", &[Text]),
];

const FOOD_ESTABLISHMENT_PROPERTIES: &[PropertySpec] = &[
    one("acceptsReservations", &[Boolean, Text, Url]),
    one("hasMenu", &[Text, Url]),
    many("servesCuisine", &[Text]),
    many("starRating", &[Entity("Rating")]),
];

const LOCAL_BUSINESS_REQUIRED: &[Requirement] =
    &[Requirement::Path("name"), Requirement::Path("address")];

static PERSON: TypeDef = TypeDef::new(
    K::Person,
    &[K::Thing],
    "A person (alive, dead, undead, or fictional).",
)
.properties(PERSON_PROPERTIES);

static ORGANIZATION: TypeDef = TypeDef::new(
    K::Organization,
    &[K::Thing],
    "An organization such as a school, NGO, corporation, club, etc.",
)
.properties(ORGANIZATION_PROPERTIES);

static PERFORMING_GROUP: TypeDef = TypeDef::new(
    K::PerformingGroup,
    &[K::Organization],
    "A performance group, such as a band, an orchestra, or a circus.",
);

static EDUCATIONAL_ORGANIZATION: TypeDef = TypeDef::new(
    K::EducationalOrganization,
    &[K::Organization],
    "An educational organization.",
);

static LOCAL_BUSINESS: TypeDef = TypeDef::new(
    K::LocalBusiness,
    &[K::Organization, K::Place],
    "A particular physical business or branch of an organization.",
)
.properties(LOCAL_BUSINESS_PROPERTIES)
.required(LOCAL_BUSINESS_REQUIRED);

static FOOD_ESTABLISHMENT: TypeDef = TypeDef::new(
    K::FoodEstablishment,
    &[K::LocalBusiness],
    "A food-related business.",
)
.properties(FOOD_ESTABLISHMENT_PROPERTIES);

static RESTAURANT: TypeDef = TypeDef::new(K::Restaurant, &[K::FoodEstablishment], "A restaurant.");

pub(super) static DEFINITIONS: &[&TypeDef] = &[
    &PERSON,
    &ORGANIZATION,
    &PERFORMING_GROUP,
    &EDUCATIONAL_ORGANIZATION,
    &LOCAL_BUSINESS,
    &FOOD_ESTABLISHMENT,
    &RESTAURANT,
];

impl Person {
    pub fn new(name: &str) -> EntityBuilder {
        Self::builder().prop("name", name)
    }
}

impl Organization {
    pub fn new(name: &str) -> EntityBuilder {
        Self::builder().prop("name", name)
    }
}
