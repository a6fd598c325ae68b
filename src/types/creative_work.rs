//! Creative works: pages, media, articles, Q&A, reviews and datasets

use super::EntityKind as K;
use crate::enumeration::EnumKind as E;
use crate::schema::{PropertySpec, Range::*, Requirement, TypeDef, many, one};
use crate::thing::{EntityBuilder, Thing};
use crate::value::Value;

entity_types! {
    /// The most generic kind of creative work, including books, movies, photographs, software programs, etc.
    CreativeWork,
    WebPage,
    /// A page presenting one or more frequently asked questions with their answers.
    FAQPage,
    /// A page focused on one question and its answers.
    QAPage,
    WebSite,
    MediaObject,
    ImageObject,
    VideoObject,
    DataDownload,
    /// A short segment of a video or episode.
    Clip,
    Article,
    NewsArticle,
    SocialMediaPosting,
    BlogPosting,
    /// A post in a forum thread or on a social site.
    DiscussionForumPosting,
    Comment,
    Answer,
    Question,
    Review,
    /// A fact-checking review of a claim.
    ClaimReview,
    Claim,
    /// A body of structured information, described for dataset search.
    Dataset,
    DataCatalog,
    Movie,
    HowTo,
    Recipe,
}

const CREATIVE_WORK_PROPERTIES: &[PropertySpec] = &[
    many("about", &[Entity("Thing"), Text]),
    one("abstract", &[Text]),
    many("accessMode", &[Text]),
    many("accessModeSufficient", &[Text]),
    many("accessibilityAPI", &[Text]),
    many("accessibilityControl", &[Text]),
    many("accessibilityFeature", &[Text]),
    many("accessibilityHazard", &[Text]),
    one("accessibilitySummary", &[Text]),
    one("accountablePerson", &[Entity("Person")]),
    one("aggregateRating", &[Entity("AggregateRating")]),
    one("alternativeHeadline", &[Text]),
    many("archivedAt", &[Entity("WebPage"), Url]),
    many("assesses", &[Entity("DefinedTerm"), Text]),
    many("associatedMedia", &[Entity("MediaObject")]),
    many("audience", &[Entity("Audience")]),
    many("audio", &[Entity("AudioObject"), Entity("Clip")]),
    many("author", &[Entity("Organization"), Entity("Person")]),
    many("award", &[Text]),
    many("character", &[Entity("Person")]),
    many("citation", &[Entity("CreativeWork"), Text]),
    many("comment", &[Entity("Comment")]),
    one("commentCount", &[Integer]),
    one("conditionsOfAccess", &[Text]),
    one("contentLocation", &[Entity("Place")]),
    many("contentRating", &[Text, Entity("Rating")]),
    one("contentReferenceTime", &[DateTime]),
    many("contributor", &[Entity("Organization"), Entity("Person")]),
    many("copyrightHolder", &[Entity("Organization"), Entity("Person")]),
    one("copyrightNotice", &[Text]),
    one("copyrightYear", &[Number]),
    many("correction", &[Entity("CreativeWork"), Text]),
    one("countryOfOrigin", &[Entity("Country")]),
    many("creativeWorkStatus", &[Entity("DefinedTerm"), Text]),
    many("creator", &[Entity("Organization"), Entity("Person")]),
    one("creditText", &[Text]),
    one("dateCreated", &[Date, DateTime]),
    one("dateModified", &[Date, DateTime]),
    one("datePublished", &[Date, DateTime]),
    one("discussionUrl", &[Url]),
    many("editor", &[Entity("Person")]),
    many("educationalAlignment", &[Entity("AlignmentObject")]),
    many(
        "educationalLevel",
        &[Enum(E::EducationalLevel), Entity("DefinedTerm"), Text],
    ),
    many("educationalUse", &[Entity("DefinedTerm"), Text]),
    many("encoding", &[Entity("MediaObject")]),
    many("exampleOfWork", &[Entity("CreativeWork")]),
    one("expires", &[Date]),
    many("funder", &[Entity("Organization"), Entity("Person")]),
    many("genre", &[Text, Url]),
    many("hasPart", &[Entity("CreativeWork")]),
    one("headline", &[Text]),
    many("inLanguage", &[Entity("Language"), Text]),
    many("interactionStatistic", &[Entity("InteractionCounter")]),
    one("interactivityType", &[Text]),
    one("isAccessibleForFree", &[Boolean]),
    many("isBasedOn", &[Entity("CreativeWork"), Entity("Product"), Url]),
    one("isFamilyFriendly", &[Boolean]),
    many("isPartOf", &[Entity("CreativeWork")]),
    many("keywords", &[Entity("DefinedTerm"), Text, Url]),
    many("learningResourceType", &[Entity("DefinedTerm"), Text]),
    many("license", &[Entity("CreativeWork"), Url]),
    one("locationCreated", &[Entity("Place")]),
    many("mainEntity", &[Entity("Thing")]),
    many("mainEntityOfPage", &[Entity("CreativeWork"), Url]),
    many("material", &[Entity("Product"), Text, Url]),
    many("mentions", &[Entity("Thing")]),
    many("offers", &[Entity("Offer")]),
    many("pattern", &[Entity("DefinedTerm"), Text]),
    one("position", &[Integer, Text]),
    many("producer", &[Entity("Organization"), Entity("Person")]),
    many("provider", &[Entity("Organization"), Entity("Person")]),
    many("publication", &[Entity("PublicationEvent")]),
    many("publisher", &[Entity("Organization"), Entity("Person")]),
    one("publisherImprint", &[Entity("Organization")]),
    many("publishingPrinciples", &[Entity("CreativeWork"), Url]),
    many("recordedAt", &[Entity("Event")]),
    many("releasedEvent", &[Entity("PublicationEvent")]),
    many("review", &[Entity("Review")]),
    many("schemaVersion", &[Text, Url]),
    one("sdDatePublished", &[Date]),
    many("sdLicense", &[Entity("CreativeWork"), Url]),
    many("sdPublisher", &[Entity("Organization"), Entity("Person"), Url]),
    one("sourceOrganization", &[Entity("Organization")]),
    one("spatialCoverage", &[Entity("Place")]),
    many("sponsor", &[Entity("Organization"), Entity("Person")]),
    many("teaches", &[Entity("DefinedTerm"), Text]),
    many("temporalCoverage", &[DateTime, Text, Url]),
    one("text", &[Text]),
    many("thumbnailUrl", &[Url]),
    one("timeRequired", &[Duration]),
    one("translationOfWork", &[Entity("CreativeWork")]),
    many("translator", &[Entity("Organization"), Entity("Person")]),
    one("typicalAgeRange", &[Text]),
    many("usageInfo", &[Entity("CreativeWork"), Url]),
    one("version", &[Number, Text]),
    many("video", &[Entity("Clip"), Entity("VideoObject")]),
    many("workExample", &[Entity("CreativeWork")]),
    one("workTranslation", &[Entity("CreativeWork")]),
];

const WEB_PAGE_PROPERTIES: &[PropertySpec] = &[
    one("breadcrumb", &[Entity("BreadcrumbList"), Text]),
    one("lastReviewed", &[Date]),
    one("mainContentOfPage", &[Entity("WebPageElement")]),
    one("primaryImageOfPage", &[Entity("ImageObject")]),
    many("relatedLink", &[Url]),
    many("reviewedBy", &[Entity("Organization"), Entity("Person")]),
    many("significantLink", &[Url]),
    many("speakable", &[Entity("SpeakableSpecification"), Url]),
    many("specialty", &[Entity("Specialty")]),
];

const WEB_SITE_PROPERTIES: &[PropertySpec] = &[one("issn", &[Text])];

const MEDIA_OBJECT_PROPERTIES: &[PropertySpec] = &[
    many("associatedArticle", &[Entity("NewsArticle")]),
    one("bitrate", &[Text]),
    one("contentSize", &[Text]),
    one("contentUrl", &[Url]),
    one("duration", &[Duration]),
    one("embedUrl", &[Url]),
    one("encodesCreativeWork", &[Entity("CreativeWork")]),
    many("encodingFormat", &[Text, Url]),
    one("endTime", &[DateTime, Time]),
    one("height", &[Entity("Distance"), Entity("QuantitativeValue")]),
    many("ineligibleRegion", &[Entity("GeoShape"), Entity("Place"), Text]),
    many("interpretedAsClaim", &[Entity("Claim")]),
    many("playerType", &[Text]),
    many("productionCompany", &[Entity("Organization")]),
    many("regionsAllowed", &[Entity("Place"), Text]),
    one("requiresSubscription", &[Boolean, Entity("MediaSubscription")]),
    one("sha256", &[Text]),
    one("startTime", &[DateTime, Time]),
    one("uploadDate", &[Date, DateTime]),
    one("width", &[Entity("Distance"), Entity("QuantitativeValue")]),
];

const IMAGE_OBJECT_PROPERTIES: &[PropertySpec] = &[
    one("caption", &[Entity("MediaObject"), Text]),
    one("embeddedTextCaption", &[Text]),
    one("exifData", &[Entity("PropertyValue"), Text]),
    one("representativeOfPage", &[Boolean]),
];

const VIDEO_OBJECT_PROPERTIES: &[PropertySpec] = &[
    many("actor", &[Entity("PerformingGroup"), Entity("Person")]),
    one("caption", &[Entity("MediaObject"), Text]),
    many("director", &[Entity("Person")]),
    one("embeddedTextCaption", &[Text]),
    many("musicBy", &[Entity("PerformingGroup"), Entity("Person")]),
    one("transcript", &[Text]),
    one("videoFrameSize", &[Text]),
    one("videoQuality", &[Text]),
];

const DATA_DOWNLOAD_PROPERTIES: &[PropertySpec] = &[many(
    "measurementTechnique",
    &[Entity("DefinedTerm"), Text, Url],
)];

const CLIP_PROPERTIES: &[PropertySpec] = &[
    many("actor", &[Entity("PerformingGroup"), Entity("Person")]),
    one("clipNumber", &[Integer, Text]),
    many("director", &[Entity("Person")]),
    one("endOffset", &[Number]),
    many("musicBy", &[Entity("PerformingGroup"), Entity("Person")]),
    one("startOffset", &[Number]),
];

const ARTICLE_PROPERTIES: &[PropertySpec] = &[
    one("articleBody", &[Text]),
    many("articleSection", &[Text]),
    one("backstory", &[Entity("CreativeWork"), Text]),
    one("pageEnd", &[Integer, Text]),
    one("pageStart", &[Integer, Text]),
    one("pagination", &[Text]),
    many("speakable", &[Url]),
    one("wordCount", &[Integer]),
];

const NEWS_ARTICLE_PROPERTIES: &[PropertySpec] = &[
    one("dateline", &[Text]),
    one("printColumn", &[Text]),
    one("printEdition", &[Text]),
    one("printPage", &[Text]),
    one("printSection", &[Text]),
];

const SOCIAL_MEDIA_POSTING_PROPERTIES: &[PropertySpec] =
    &[many("sharedContent", &[Entity("CreativeWork")])];

const COMMENT_PROPERTIES: &[PropertySpec] = &[
    one("downvoteCount", &[Integer]),
    one("parentItem", &[Entity("Comment"), Entity("CreativeWork")]),
    many("sharedContent", &[Entity("CreativeWork")]),
    one("upvoteCount", &[Integer]),
];

const ANSWER_PROPERTIES: &[PropertySpec] = &[one(
    "answerExplanation",
    &[Entity("Comment"), Entity("CreativeWork")],
)];

const QUESTION_PROPERTIES: &[PropertySpec] = &[
    many("acceptedAnswer", &[Entity("Answer"), Entity("ItemList")]),
    one("answerCount", &[Integer]),
    many("eduQuestionType", &[Text]),
    many("suggestedAnswer", &[Entity("Answer"), Entity("ItemList")]),
];

const REVIEW_PROPERTIES: &[PropertySpec] = &[
    many("associatedClaimReview", &[Entity("Review")]),
    one("itemReviewed", &[Entity("Thing")]),
    one("negativeNotes", &[Entity("ItemList"), Entity("ListItem"), Text]),
    one("positiveNotes", &[Entity("ItemList"), Entity("ListItem"), Text]),
    many("reviewAspect", &[Text]),
    one("reviewBody", &[Text]),
    one("reviewRating", &[Entity("Rating")]),
];

const CLAIM_REVIEW_PROPERTIES: &[PropertySpec] = &[one("claimReviewed", &[Text])];

const CLAIM_PROPERTIES: &[PropertySpec] = &[
    many("appearance", &[Entity("CreativeWork")]),
    one("claimInterpreter", &[Entity("Organization"), Entity("Person")]),
    one("firstAppearance", &[Entity("CreativeWork")]),
];

const DATASET_PROPERTIES: &[PropertySpec] = &[
    many("distribution", &[Entity("DataDownload")]),
    one("includedInDataCatalog", &[Entity("DataCatalog")]),
    many("issn", &[Text]),
    many("measurementMethod", &[Entity("DefinedTerm"), Text, Url]),
    many("measurementTechnique", &[Entity("DefinedTerm"), Text, Url]),
    many("variableMeasured", &[Entity("PropertyValue"), Text]),
];

const DATA_CATALOG_PROPERTIES: &[PropertySpec] = &[
    many("dataset", &[Entity("Dataset")]),
    many("measurementTechnique", &[Entity("DefinedTerm"), Text, Url]),
];

const MOVIE_PROPERTIES: &[PropertySpec] = &[
    many("actor", &[Entity("PerformingGroup"), Entity("Person")]),
    one("countryOfOrigin", &[Entity("Country")]),
    many("director", &[Entity("Person")]),
    one("duration", &[Duration]),
    many("musicBy", &[Entity("PerformingGroup"), Entity("Person")]),
    many("productionCompany", &[Entity("Organization")]),
    many("subtitleLanguage", &[Text]),
    one("titleEIDR", &[Text, Url]),
    many("trailer", &[Entity("VideoObject")]),
];

const HOW_TO_PROPERTIES: &[PropertySpec] = &[
    one("estimatedCost", &[Entity("MonetaryAmount"), Text]),
    one("performTime", &[Duration]),
    one("prepTime", &[Duration]),
    many("step", &[Entity("CreativeWork"), Entity("ItemList"), Text]),
    many("supply", &[Text]),
    many("tool", &[Text]),
    one("totalTime", &[Duration]),
    one("yield", &[Entity("QuantitativeValue"), Text]),
];

const RECIPE_PROPERTIES: &[PropertySpec] = &[
    one("cookTime", &[Duration]),
    one("cookingMethod", &[Text]),
    many("recipeCategory", &[Text]),
    many("recipeCuisine", &[Text]),
    many("recipeIngredient", &[Text]),
    many(
        "recipeInstructions",
        &[Entity("CreativeWork"), Entity("ItemList"), Text],
    ),
    one("recipeYield", &[Entity("QuantitativeValue"), Text]),
    many("suitableForDiet", &[Text]),
];

const FAQ_PAGE_REQUIRED: &[Requirement] = &[
    Requirement::Path("mainEntity.name"),
    Requirement::Path("mainEntity.acceptedAnswer.text"),
];

const QA_PAGE_REQUIRED: &[Requirement] = &[
    Requirement::Path("mainEntity.name"),
    Requirement::Path("mainEntity.answerCount"),
    Requirement::AnyOf(&["mainEntity.acceptedAnswer", "mainEntity.suggestedAnswer"]),
];

const VIDEO_OBJECT_REQUIRED: &[Requirement] = &[
    Requirement::Path("name"),
    Requirement::Path("thumbnailUrl"),
    Requirement::Path("uploadDate"),
];

const CLIP_REQUIRED: &[Requirement] = &[
    Requirement::Path("name"),
    Requirement::Path("startOffset"),
    Requirement::Path("url"),
];

const ARTICLE_REQUIRED: &[Requirement] =
    &[Requirement::Path("headline"), Requirement::Path("author.name")];

const DISCUSSION_FORUM_POSTING_REQUIRED: &[Requirement] = &[
    Requirement::Path("author.name"),
    Requirement::Path("datePublished"),
    Requirement::AnyOf(&["text", "image", "video"]),
];

const REVIEW_REQUIRED: &[Requirement] = &[
    Requirement::Path("author.name"),
    Requirement::Path("reviewRating.ratingValue"),
];

const CLAIM_REVIEW_REQUIRED: &[Requirement] = &[
    Requirement::Path("claimReviewed"),
    Requirement::Path("reviewRating.alternateName"),
    Requirement::Path("url"),
];

const DATASET_REQUIRED: &[Requirement] =
    &[Requirement::Path("name"), Requirement::Path("description")];

const NAME_AND_IMAGE_REQUIRED: &[Requirement] =
    &[Requirement::Path("name"), Requirement::Path("image")];

static CREATIVE_WORK: TypeDef = TypeDef::new(
    K::CreativeWork,
    &[K::Thing],
    "The most generic kind of creative work, including books, movies, photographs, software programs, etc.",
)
.properties(CREATIVE_WORK_PROPERTIES);

static WEB_PAGE: TypeDef = TypeDef::new(
    K::WebPage,
    &[K::CreativeWork],
    "A web page. Every web page is implicitly assumed to be declared to be of type WebPage.",
)
.properties(WEB_PAGE_PROPERTIES);

static FAQ_PAGE: TypeDef = TypeDef::new(
    K::FAQPage,
    &[K::WebPage],
    "A FAQPage is a WebPage presenting one or more Frequently asked questions.",
)
.required(FAQ_PAGE_REQUIRED);

static QA_PAGE: TypeDef = TypeDef::new(
    K::QAPage,
    &[K::WebPage],
    "A QAPage is a WebPage focussed on a specific Question and its Answer(s).",
)
.required(QA_PAGE_REQUIRED);

static WEB_SITE: TypeDef = TypeDef::new(
    K::WebSite,
    &[K::CreativeWork],
    "A WebSite is a set of related web pages and other items typically served from a single web domain.",
)
.properties(WEB_SITE_PROPERTIES);

static MEDIA_OBJECT: TypeDef = TypeDef::new(
    K::MediaObject,
    &[K::CreativeWork],
    "A media object, such as an image, video, audio, or text object embedded in a web page or a downloadable dataset.",
)
.properties(MEDIA_OBJECT_PROPERTIES);

static IMAGE_OBJECT: TypeDef =
    TypeDef::new(K::ImageObject, &[K::MediaObject], "An image file.")
        .properties(IMAGE_OBJECT_PROPERTIES);

static VIDEO_OBJECT: TypeDef =
    TypeDef::new(K::VideoObject, &[K::MediaObject], "A video file.")
        .properties(VIDEO_OBJECT_PROPERTIES)
        .required(VIDEO_OBJECT_REQUIRED);

static DATA_DOWNLOAD: TypeDef = TypeDef::new(
    K::DataDownload,
    &[K::MediaObject],
    "All or part of a Dataset in downloadable form.",
)
.properties(DATA_DOWNLOAD_PROPERTIES);

static CLIP: TypeDef = TypeDef::new(
    K::Clip,
    &[K::CreativeWork],
    "A short TV or radio program or a segment/part of a program.",
)
.properties(CLIP_PROPERTIES)
.required(CLIP_REQUIRED);

static ARTICLE: TypeDef = TypeDef::new(
    K::Article,
    &[K::CreativeWork],
    "An article, such as a news article or piece of investigative report.",
)
.properties(ARTICLE_PROPERTIES)
.required(ARTICLE_REQUIRED);

static NEWS_ARTICLE: TypeDef = TypeDef::new(
    K::NewsArticle,
    &[K::Article],
    "A NewsArticle is an article whose content reports news, or provides background context and supporting materials for understanding the news.",
)
.properties(NEWS_ARTICLE_PROPERTIES);

static SOCIAL_MEDIA_POSTING: TypeDef = TypeDef::new(
    K::SocialMediaPosting,
    &[K::Article],
    "A post to a social media platform, including blog posts, tweets, Facebook posts, etc.",
)
.properties(SOCIAL_MEDIA_POSTING_PROPERTIES);

static BLOG_POSTING: TypeDef = TypeDef::new(
    K::BlogPosting,
    &[K::SocialMediaPosting],
    "A blog post.",
);

static DISCUSSION_FORUM_POSTING: TypeDef = TypeDef::new(
    K::DiscussionForumPosting,
    &[K::SocialMediaPosting],
    "A posting to a discussion forum.",
)
.required(DISCUSSION_FORUM_POSTING_REQUIRED);

static COMMENT: TypeDef = TypeDef::new(
    K::Comment,
    &[K::CreativeWork],
    "A comment on an item - for example, a comment on a blog post.",
)
.properties(COMMENT_PROPERTIES);

static ANSWER: TypeDef = TypeDef::new(
    K::Answer,
    &[K::Comment],
    "An answer offered to a question; perhaps correct, perhaps opinionated or wrong.",
)
.properties(ANSWER_PROPERTIES);

static QUESTION: TypeDef = TypeDef::new(
    K::Question,
    &[K::Comment],
    "A specific question - e.g. from a user seeking answers online, or collected in a Frequently Asked Questions document.",
)
.properties(QUESTION_PROPERTIES);

static REVIEW: TypeDef = TypeDef::new(
    K::Review,
    &[K::CreativeWork],
    "A review of an item - for example, of a restaurant, movie, or store.",
)
.properties(REVIEW_PROPERTIES)
.required(REVIEW_REQUIRED);

static CLAIM_REVIEW: TypeDef = TypeDef::new(
    K::ClaimReview,
    &[K::Review],
    "A fact-checking review of claims made (or reported) in some creative work.",
)
.properties(CLAIM_REVIEW_PROPERTIES)
.required(CLAIM_REVIEW_REQUIRED);

static CLAIM: TypeDef = TypeDef::new(
    K::Claim,
    &[K::CreativeWork],
    "A specific, identifiable point of view that people may hold.",
)
.properties(CLAIM_PROPERTIES);

static DATASET: TypeDef = TypeDef::new(
    K::Dataset,
    &[K::CreativeWork],
    "A body of structured information describing some topic(s) of interest.",
)
.properties(DATASET_PROPERTIES)
.required(DATASET_REQUIRED);

static DATA_CATALOG: TypeDef = TypeDef::new(
    K::DataCatalog,
    &[K::CreativeWork],
    "A collection of datasets.",
)
.properties(DATA_CATALOG_PROPERTIES);

static MOVIE: TypeDef = TypeDef::new(K::Movie, &[K::CreativeWork], "A movie.")
    .properties(MOVIE_PROPERTIES)
    .required(NAME_AND_IMAGE_REQUIRED);

static HOW_TO: TypeDef = TypeDef::new(
    K::HowTo,
    &[K::CreativeWork],
    "Instructions that explain how to achieve a result by performing a sequence of steps.",
)
.properties(HOW_TO_PROPERTIES);

static RECIPE: TypeDef = TypeDef::new(
    K::Recipe,
    &[K::HowTo],
    "A recipe: instructions for preparing a particular dish.",
)
.properties(RECIPE_PROPERTIES)
.required(NAME_AND_IMAGE_REQUIRED);

pub(super) static DEFINITIONS: &[&TypeDef] = &[
    &CREATIVE_WORK,
    &WEB_PAGE,
    &FAQ_PAGE,
    &QA_PAGE,
    &WEB_SITE,
    &MEDIA_OBJECT,
    &IMAGE_OBJECT,
    &VIDEO_OBJECT,
    &DATA_DOWNLOAD,
    &CLIP,
    &ARTICLE,
    &NEWS_ARTICLE,
    &SOCIAL_MEDIA_POSTING,
    &BLOG_POSTING,
    &DISCUSSION_FORUM_POSTING,
    &COMMENT,
    &ANSWER,
    &QUESTION,
    &REVIEW,
    &CLAIM_REVIEW,
    &CLAIM,
    &DATASET,
    &DATA_CATALOG,
    &MOVIE,
    &HOW_TO,
    &RECIPE,
];

impl ImageObject {
    pub fn new(content_url: &str) -> EntityBuilder {
        Self::builder().prop("contentUrl", content_url)
    }
}

impl VideoObject {
    pub fn new(
        name: &str,
        thumbnail_url: impl Into<Value>,
        upload_date: impl Into<Value>,
    ) -> EntityBuilder {
        Self::builder()
            .prop("name", name)
            .prop("thumbnailUrl", thumbnail_url)
            .prop("uploadDate", upload_date)
    }
}

impl Answer {
    pub fn new(text: &str) -> EntityBuilder {
        Self::builder().prop("text", text)
    }
}

impl Question {
    /// A question with its accepted answer, as listed on a FAQ page.
    pub fn new(name: &str, accepted_answer: Thing) -> EntityBuilder {
        Self::builder()
            .prop("name", name)
            .prop("acceptedAnswer", accepted_answer)
    }
}

impl Review {
    pub fn new(author: Thing, review_rating: Thing) -> EntityBuilder {
        Self::builder()
            .prop("author", author)
            .prop("reviewRating", review_rating)
    }
}

impl Dataset {
    pub fn new(name: &str, description: &str) -> EntityBuilder {
        Self::builder()
            .prop("name", name)
            .prop("description", description)
    }
}

impl Movie {
    pub fn new(name: &str, image: impl Into<Value>) -> EntityBuilder {
        Self::builder().prop("name", name).prop("image", image)
    }
}

impl Recipe {
    pub fn new(name: &str, image: impl Into<Value>) -> EntityBuilder {
        Self::builder().prop("name", name).prop("image", image)
    }
}
