//! Schema.org enumerations
//!
//! Each enumeration is a plain Rust enum whose members know the literal they
//! serialize as. Properties declare which enumeration they accept through
//! [`Range::Enum`](crate::Range::Enum); a member offered to a property that
//! only accepts `Text` is stored as its literal.

use strum::{Display, EnumIter, IntoStaticStr};

use crate::value::Value;

/// A member of any enumeration, as stored in an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumMember {
    /// The enumeration the member belongs to
    pub kind: EnumKind,
    /// The Rust-side member name (e.g. `"InStock"`)
    pub name: &'static str,
    /// The serialized literal (e.g. `"https://schema.org/InStock"`)
    pub value: &'static str,
}

macro_rules! schema_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// `(name, literal)` pairs of every member, in declaration order.
            pub const MEMBERS: &'static [(&'static str, &'static str)] =
                &[$((stringify!($variant), $value)),+];

            /// The literal this member serializes as.
            pub fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            /// The member name.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl From<$name> for EnumMember {
            fn from(member: $name) -> Self {
                EnumMember {
                    kind: EnumKind::$name,
                    name: member.name(),
                    value: member.value(),
                }
            }
        }

        impl From<$name> for Value {
            fn from(member: $name) -> Self {
                Value::Enum(member.into())
            }
        }
    };
}

/// Identifies an enumeration in property ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter)]
pub enum EnumKind {
    ItemAvailability,
    OfferCategory,
    OfferItemCondition,
    EducationalLevel,
    CredentialCategory,
    CourseMode,
    RepeatFrequency,
    EventAttendanceModeEnumeration,
    EventStatusType,
    ProblemType,
    DayOfWeek,
    ItemListOrderType,
    EmploymentType,
    GenderType,
}

impl EnumKind {
    /// The enumeration name as used in error messages.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// `(name, literal)` pairs of every member.
    pub fn members(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::ItemAvailability => ItemAvailability::MEMBERS,
            Self::OfferCategory => OfferCategory::MEMBERS,
            Self::OfferItemCondition => OfferItemCondition::MEMBERS,
            Self::EducationalLevel => EducationalLevel::MEMBERS,
            Self::CredentialCategory => CredentialCategory::MEMBERS,
            Self::CourseMode => CourseMode::MEMBERS,
            Self::RepeatFrequency => RepeatFrequency::MEMBERS,
            Self::EventAttendanceModeEnumeration => EventAttendanceModeEnumeration::MEMBERS,
            Self::EventStatusType => EventStatusType::MEMBERS,
            Self::ProblemType => ProblemType::MEMBERS,
            Self::DayOfWeek => DayOfWeek::MEMBERS,
            Self::ItemListOrderType => ItemListOrderType::MEMBERS,
            Self::EmploymentType => EmploymentType::MEMBERS,
            Self::GenderType => GenderType::MEMBERS,
        }
    }

    /// Look up a member by literal or by name.
    pub fn member(self, raw: &str) -> Option<EnumMember> {
        self.members()
            .iter()
            .find(|(name, value)| *value == raw || *name == raw)
            .map(|&(name, value)| EnumMember {
                kind: self,
                name,
                value,
            })
    }
}

schema_enum! {
    /// A list of possible product availability options.
    ItemAvailability {
        InStock => "https://schema.org/InStock",
        SoldOut => "https://schema.org/SoldOut",
        PreOrder => "https://schema.org/PreOrder",
        PreSale => "https://schema.org/PreSale",
        BackOrder => "https://schema.org/BackOrder",
        OutOfStock => "https://schema.org/OutOfStock",
        Discontinued => "https://schema.org/Discontinued",
        LimitedAvailability => "https://schema.org/LimitedAvailability",
        OnlineOnly => "https://schema.org/OnlineOnly",
        InStoreOnly => "https://schema.org/InStoreOnly",
    }
}

schema_enum! {
    /// Pricing category of a course offer.
    OfferCategory {
        Free => "Free",
        PartiallyFree => "Partially Free",
        Subscription => "Subscription",
        Paid => "Paid",
    }
}

schema_enum! {
    /// Condition of an offered item.
    OfferItemCondition {
        NewCondition => "https://schema.org/NewCondition",
        UsedCondition => "https://schema.org/UsedCondition",
        RefurbishedCondition => "https://schema.org/RefurbishedCondition",
        DamagedCondition => "https://schema.org/DamagedCondition",
    }
}

schema_enum! {
    EducationalLevel {
        Beginner => "Beginner",
        Intermediate => "Intermediate",
        Advanced => "Advanced",
    }
}

schema_enum! {
    CredentialCategory {
        Certificate => "Certificate",
        Certification => "Certification",
        Degree => "Degree",
        Diploma => "Diploma",
    }
}

schema_enum! {
    /// Medium through which a course instance is delivered.
    CourseMode {
        Online => "Online",
        Onsite => "Onsite",
        Blended => "Blended",
    }
}

schema_enum! {
    RepeatFrequency {
        Daily => "Daily",
        Weekly => "Weekly",
        Monthly => "Monthly",
        Yearly => "Yearly",
    }
}

schema_enum! {
    /// Whether an event happens online, offline, or both.
    EventAttendanceModeEnumeration {
        Offline => "https://schema.org/OfflineEventAttendanceMode",
        Online => "https://schema.org/OnlineEventAttendanceMode",
        Mixed => "https://schema.org/MixedEventAttendanceMode",
    }
}

schema_enum! {
    EventStatusType {
        Scheduled => "https://schema.org/EventScheduled",
        Cancelled => "https://schema.org/EventCancelled",
        MovedOnline => "https://schema.org/EventMovedOnline",
        Postponed => "https://schema.org/EventPostponed",
        Rescheduled => "https://schema.org/EventRescheduled",
    }
}

schema_enum! {
    /// Problem kinds a math solver can handle.
    ProblemType {
        Arithmetic => "Arithmetic",
        AbsoluteValueEquation => "Absolute Value Equation",
        Derivative => "Derivative",
        ExponentialEquation => "Exponential Equation",
        Inequality => "Inequality",
        Integral => "Integral",
        Limits => "Limits",
        LinearEquation => "Linear Equation",
        LinearInequality => "Linear Inequality",
        LogarithmicEquation => "Logarithmic Equation",
        Matrix => "Matrix",
        PolynomialEquation => "Polynomial Equation",
        QuadraticEquation => "Quadratic Equation",
        RadicalEquation => "Radical Equation",
        RationalEquation => "Rational Equation",
        Statistics => "Statistics",
        SystemOfEquations => "System of Equations",
        TrigonometricEquation => "Trigonometric Equation",
    }
}

schema_enum! {
    DayOfWeek {
        Monday => "https://schema.org/Monday",
        Tuesday => "https://schema.org/Tuesday",
        Wednesday => "https://schema.org/Wednesday",
        Thursday => "https://schema.org/Thursday",
        Friday => "https://schema.org/Friday",
        Saturday => "https://schema.org/Saturday",
        Sunday => "https://schema.org/Sunday",
        PublicHolidays => "https://schema.org/PublicHolidays",
    }
}

schema_enum! {
    ItemListOrderType {
        Ascending => "https://schema.org/ItemListOrderAscending",
        Descending => "https://schema.org/ItemListOrderDescending",
        Unordered => "https://schema.org/ItemListUnordered",
    }
}

schema_enum! {
    /// Employment types accepted by Google for job postings.
    EmploymentType {
        FullTime => "FULL_TIME",
        PartTime => "PART_TIME",
        Contractor => "CONTRACTOR",
        Temporary => "TEMPORARY",
        Intern => "INTERN",
        Volunteer => "VOLUNTEER",
        PerDiem => "PER_DIEM",
        Other => "OTHER",
    }
}

schema_enum! {
    GenderType {
        Male => "https://schema.org/Male",
        Female => "https://schema.org/Female",
    }
}
