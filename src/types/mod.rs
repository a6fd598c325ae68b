//! Schema.org entity types
//!
//! Each kind is a unit struct whose `builder()` starts an [`EntityBuilder`]
//! for that kind. Kinds whose markup has obviously required fields also get a
//! `new(...)` constructor taking them; the result is still a builder so
//! further properties can be chained before `build()`.
//!
//! ```
//! use structured_data::{Organization, Person};
//!
//! let org = Organization::new("Example University")
//!     .prop("url", "https://example.edu")
//!     .build()
//!     .unwrap();
//! let person = Person::new("Ada").prop("works_for", org).build().unwrap();
//! assert_eq!(person.to_dict()["worksFor"]["name"], "Example University");
//! ```

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::schema::{PropertySpec, Range::*, TypeDef, many, one, registry};
use crate::thing::EntityBuilder;

macro_rules! entity_types {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name;

            impl $name {
                pub const KIND: $crate::types::EntityKind = $crate::types::EntityKind::$name;

                pub fn builder() -> $crate::thing::EntityBuilder {
                    $crate::thing::EntityBuilder::new(Self::KIND)
                }
            }
        )+
    };
}

mod action;
mod agent;
mod composite;
mod creative_work;
mod event;
mod intangible;
mod learning;
mod place;

pub use action::*;
pub use agent::*;
pub use creative_work::*;
pub use event::*;
pub use intangible::*;
pub use learning::*;
pub use place::*;

/// Every registered entity kind.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
)]
pub enum EntityKind {
    Thing,
    // Intangibles
    Intangible,
    StructuredValue,
    PropertyValue,
    QuantitativeValue,
    QuantitativeValueDistribution,
    MonetaryAmountDistribution,
    MonetaryAmount,
    GeoShape,
    GeoCoordinates,
    ContactPoint,
    PostalAddress,
    OpeningHoursSpecification,
    InteractionCounter,
    AlignmentObject,
    DefinedTerm,
    EntryPoint,
    ListItem,
    ItemList,
    BreadcrumbList,
    Carousel,
    VirtualLocation,
    Offer,
    Rating,
    AggregateRating,
    EmployerAggregateRating,
    Schedule,
    Occupation,
    JobPosting,
    // Agents
    Person,
    Organization,
    PerformingGroup,
    EducationalOrganization,
    LocalBusiness,
    FoodEstablishment,
    Restaurant,
    // Places
    Place,
    AdministrativeArea,
    City,
    Country,
    State,
    // Events
    Event,
    PublicationEvent,
    BroadcastEvent,
    CourseInstance,
    // Actions
    Action,
    CreateAction,
    WriteAction,
    ConsumeAction,
    WatchAction,
    ReactAction,
    LikeAction,
    SeekToAction,
    SolveMathAction,
    // Creative works
    CreativeWork,
    WebPage,
    FAQPage,
    QAPage,
    WebSite,
    MediaObject,
    ImageObject,
    VideoObject,
    DataDownload,
    Clip,
    Article,
    NewsArticle,
    SocialMediaPosting,
    BlogPosting,
    DiscussionForumPosting,
    Comment,
    Answer,
    Question,
    Review,
    ClaimReview,
    Claim,
    Dataset,
    DataCatalog,
    Movie,
    HowTo,
    Recipe,
    // Learning
    LearningResource,
    LearningVideo,
    LearningClip,
    Syllabus,
    Quiz,
    MathSolver,
    LearningMathSolver,
    Course,
    EducationalOccupationalCredential,
}

impl EntityKind {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn builder(self) -> EntityBuilder {
        EntityBuilder::new(self)
    }

    pub fn definition(self) -> &'static TypeDef {
        registry().get(self).def
    }

    /// Ancestors in resolution order, starting with `self`.
    pub fn lineage(self) -> &'static [EntityKind] {
        &registry().get(self).lineage
    }

    pub fn is_a(self, type_name: &str) -> bool {
        registry().get(self).is_a(type_name)
    }

    /// `"Thing > ... > Self"`.
    pub fn super_paths(self) -> String {
        self.lineage()
            .iter()
            .rev()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

const THING_PROPERTIES: &[PropertySpec] = &[
    one("additionalType", &[Text, Url]),
    one("alternateName", &[Text]),
    one("description", &[Text]),
    one("disambiguatingDescription", &[Text]),
    many("identifier", &[Entity("PropertyValue"), Text, Url]),
    many("image", &[Entity("ImageObject"), Url, Text]),
    one("mainEntityOfPage", &[Entity("CreativeWork"), Url]),
    one("name", &[Text]),
    one("potentialAction", &[Entity("Action")]),
    one("sameAs", &[Url]),
    many("subjectOf", &[Entity("CreativeWork"), Entity("Event")]),
    many("url", &[Url, Text]),
];

static THING: TypeDef = TypeDef::new(
    EntityKind::Thing,
    &[],
    "The most generic type of item.",
)
.properties(THING_PROPERTIES);

/// All type definitions, `Thing` first.
pub(crate) fn definitions() -> impl Iterator<Item = &'static TypeDef> {
    std::iter::once(&THING)
        .chain(intangible::DEFINITIONS.iter().copied())
        .chain(agent::DEFINITIONS.iter().copied())
        .chain(place::DEFINITIONS.iter().copied())
        .chain(event::DEFINITIONS.iter().copied())
        .chain(action::DEFINITIONS.iter().copied())
        .chain(creative_work::DEFINITIONS.iter().copied())
        .chain(learning::DEFINITIONS.iter().copied())
}
