//! # structured-data
//!
//! Typed Schema.org entities for emitting JSON-LD structured data, with the
//! required-property checks Google Search Console applies to rich results.
//!
//! ## Features
//!
//! - Builders for about ninety Schema.org kinds, validated against merged
//!   property schemas (including multi-typed kinds such as `LearningVideo`)
//! - ISO-8601 dates, times and durations, URLs and Schema.org enumerations
//! - `to_dict()` JSON-LD objects and ready-to-embed `<script>` tags
//! - Google Search Console requirement checks per kind
//! - Carousel and breadcrumb builders
//! - Rebuilding entities from JSON-LD and auditing the markup of HTML pages
//!
//! ## Quick Start
//!
//! ```rust
//! use structured_data::{Article, Person};
//!
//! let author = Person::new("Jane Doe")
//!     .prop("url", "https://example.com/profile/janedoe123")
//!     .build()?;
//! let article = Article::builder()
//!     .prop("headline", "Title of a News Article")
//!     .prop("date_published", "2024-01-05T08:00:00+08:00")
//!     .prop("author", author)
//!     .build()?;
//!
//! let data = article.to_dict();
//! assert_eq!(data["author"]["name"], "Jane Doe");
//! assert!(article.validate_gsc(&data).is_valid());
//!
//! let script = article.to_json_ld_script()?;
//! assert!(script.starts_with(r#"<script type="application/ld+json">"#));
//! # Ok::<(), structured_data::Error>(())
//! ```
//!
//! ## Validation
//!
//! Properties are checked against the kind's schema when `build()` runs. Keys
//! may be `snake_case` or `camelCase`; unknown keys, values of the wrong type
//! and several values for a single-valued property are rejected.
//!
//! ```rust
//! use structured_data::Person;
//!
//! let err = Person::new("Jane").prop("birth_date", "yesterday").build().unwrap_err();
//! assert!(err.is_type_error());
//! ```
//!
//! ## Auditing Pages
//!
//! With the default `html` feature, JSON-LD embedded in a page can be
//! extracted and checked:
//!
//! ```rust
//! # #[cfg(feature = "html")]
//! # {
//! use structured_data::{AuditOptions, StructuredDataDocument};
//!
//! let html = r#"<script type="application/ld+json">
//!     {"@context": "https://schema.org/", "@type": "Dataset", "name": "Rainfall"}
//! </script>"#;
//! let entries = StructuredDataDocument::from_html(html).audit(&AuditOptions::default());
//! assert!(!entries[0].is_clean());
//! # }
//! ```
//!
//! Without it, `scraper` is not pulled in:
//!
//! ```toml
//! [dependencies]
//! structured-data = { version = "1.0", default-features = false }
//! ```

mod data_type;
mod enumeration;
mod error;
mod gsc;
mod json_ld;
mod schema;
mod script;
mod thing;
mod types;
mod value;

#[cfg(feature = "html")]
mod document;

pub use data_type::{
    Boolean, DataType, Date, DateTime, Duration, DurationParts, Number, Text, Time, Url,
};
pub use enumeration::{
    CourseMode, CredentialCategory, DayOfWeek, EducationalLevel, EmploymentType, EnumKind,
    EnumMember, EventAttendanceModeEnumeration, EventStatusType, GenderType, ItemAvailability,
    ItemListOrderType, OfferCategory, OfferItemCondition, ProblemType, RepeatFrequency,
};
pub use error::{Error, Result};
pub use gsc::{GscReport, get_property};
pub use schema::{
    Invariant, PropertySpec, Range, Registry, Requirement, ResolvedType, TypeDef, registry,
};
pub use script::ScriptOptions;
pub use thing::{DEFAULT_CONTEXT, EntityBuilder, Thing, snake_to_camel};
pub use types::*;
pub use value::Value;

#[cfg(feature = "html")]
pub use document::{AuditEntry, AuditOptions, AuditOutcome, JsonLdBlock, StructuredDataDocument};
