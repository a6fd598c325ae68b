//! Education: courses, learning resources, quizzes and math solvers

use super::EntityKind as K;
use crate::enumeration::EnumKind as E;
use crate::schema::{PropertySpec, Range::*, Requirement, TypeDef, many, one};
use crate::thing::{EntityBuilder, Thing};
use crate::value::Value;

entity_types! {
    /// A resource used in education, such as a lesson, quiz or lecture video.
    LearningResource,
    /// A video that is also a learning resource; serializes with both types.
    LearningVideo,
    /// A clip that is also a learning resource; serializes with both types.
    LearningClip,
    Syllabus,
    /// Flashcards or practice questions about a topic.
    Quiz,
    /// A tool that solves math problems from a submitted expression.
    MathSolver,
    /// A math solver that is also a learning resource.
    LearningMathSolver,
    /// A course of study, e.g. a university course or online class.
    Course,
    EducationalOccupationalCredential,
}

const LEARNING_RESOURCE_PROPERTIES: &[PropertySpec] = &[many(
    "competencyRequired",
    &[Entity("DefinedTerm"), Text, Url],
)];

const MATH_SOLVER_PROPERTIES: &[PropertySpec] = &[many(
    "mathExpression",
    &[Entity("SolveMathAction"), Text],
)];

const COURSE_PROPERTIES: &[PropertySpec] = &[
    many("availableLanguage", &[Text]),
    one("courseCode", &[Text]),
    many(
        "coursePrerequisites",
        &[Entity("AlignmentObject"), Entity("Course"), Text],
    ),
    many(
        "educationalCredentialAwarded",
        &[Entity("EducationalOccupationalCredential"), Text, Url],
    ),
    many("financialAidEligible", &[Entity("DefinedTerm"), Text]),
    many("hasCourseInstance", &[Entity("CourseInstance")]),
    one("numberOfCredits", &[Integer, Entity("StructuredValue")]),
    many(
        "occupationalCredentialAwarded",
        &[Entity("EducationalOccupationalCredential"), Text, Url],
    ),
    many("syllabusSections", &[Entity("Syllabus")]),
    one("totalHistoricalEnrollment", &[Integer]),
];

const CREDENTIAL_PROPERTIES: &[PropertySpec] = &[
    many("competencyRequired", &[Entity("DefinedTerm"), Text, Url]),
    many(
        "credentialCategory",
        &[Enum(E::CredentialCategory), Entity("DefinedTerm"), Text, Url],
    ),
    many("recognizedBy", &[Entity("Organization")]),
    one("validFor", &[Duration]),
    many("validIn", &[Entity("AdministrativeArea")]),
];

const QUIZ_REQUIRED: &[Requirement] = &[
    Requirement::Path("hasPart.acceptedAnswer.text"),
    Requirement::Path("hasPart.eduQuestionType"),
    Requirement::Path("hasPart.text"),
];

const MATH_SOLVER_REQUIRED: &[Requirement] = &[
    Requirement::Path("url"),
    Requirement::Path("usageInfo"),
    Requirement::Path("potentialAction.target"),
    Requirement::Path("potentialAction.mathExpression-input"),
];

const LEARNING_MATH_SOLVER_REQUIRED: &[Requirement] = &[
    Requirement::Path("url"),
    Requirement::Path("usageInfo"),
    Requirement::Path("potentialAction.target"),
    Requirement::Path("potentialAction.mathExpression-input"),
    Requirement::Path("learningResourceType"),
];

const COURSE_REQUIRED: &[Requirement] = &[
    Requirement::Path("name"),
    Requirement::Path("description"),
    Requirement::Path("provider.name"),
    Requirement::Path("offers.category"),
    Requirement::Path("hasCourseInstance.courseMode"),
    Requirement::AnyOf(&[
        "hasCourseInstance.courseSchedule",
        "hasCourseInstance.courseWorkload",
    ]),
];

static LEARNING_RESOURCE: TypeDef = TypeDef::new(
    K::LearningResource,
    &[K::CreativeWork],
    "A LearningResource is a resource used in education, whose properties describe its educational use.",
)
.properties(LEARNING_RESOURCE_PROPERTIES);

static LEARNING_VIDEO: TypeDef = TypeDef::new(
    K::LearningVideo,
    &[K::VideoObject, K::LearningResource],
    "A video used as a learning resource.",
)
.type_names(&["VideoObject", "LearningResource"]);

static LEARNING_CLIP: TypeDef = TypeDef::new(
    K::LearningClip,
    &[K::Clip, K::LearningResource],
    "A video clip used as a learning resource.",
)
.type_names(&["Clip", "LearningResource"]);

static SYLLABUS: TypeDef = TypeDef::new(
    K::Syllabus,
    &[K::LearningResource],
    "A syllabus that describes the material covered in a course, often with several such sections per Course.",
);

static QUIZ: TypeDef = TypeDef::new(
    K::Quiz,
    &[K::LearningResource],
    "Quiz: A test of knowledge, skills and abilities.",
)
.required(QUIZ_REQUIRED);

static MATH_SOLVER: TypeDef = TypeDef::new(
    K::MathSolver,
    &[K::CreativeWork],
    "A math solver which is capable of solving a subset of mathematical problems.",
)
.properties(MATH_SOLVER_PROPERTIES)
.required(MATH_SOLVER_REQUIRED);

static LEARNING_MATH_SOLVER: TypeDef = TypeDef::new(
    K::LearningMathSolver,
    &[K::MathSolver, K::LearningResource],
    "A math solver that is also a learning resource.",
)
.type_names(&["MathSolver", "LearningResource"])
.required(LEARNING_MATH_SOLVER_REQUIRED);

static COURSE: TypeDef = TypeDef::new(
    K::Course,
    &[K::LearningResource],
    "A description of an educational course which may be offered as distinct instances which take place at different times or take place at different locations, or be offered through different media or modes of study.",
)
.properties(COURSE_PROPERTIES)
.required(COURSE_REQUIRED);

static EDUCATIONAL_OCCUPATIONAL_CREDENTIAL: TypeDef = TypeDef::new(
    K::EducationalOccupationalCredential,
    &[K::CreativeWork],
    "An educational or occupational credential, such as a diploma, certificate or license.",
)
.properties(CREDENTIAL_PROPERTIES);

pub(super) static DEFINITIONS: &[&TypeDef] = &[
    &LEARNING_RESOURCE,
    &LEARNING_VIDEO,
    &LEARNING_CLIP,
    &SYLLABUS,
    &QUIZ,
    &MATH_SOLVER,
    &LEARNING_MATH_SOLVER,
    &COURSE,
    &EDUCATIONAL_OCCUPATIONAL_CREDENTIAL,
];

impl Course {
    pub fn new(name: &str, description: &str, provider: Thing) -> EntityBuilder {
        Self::builder()
            .prop("name", name)
            .prop("description", description)
            .prop("provider", provider)
    }
}

impl Syllabus {
    pub fn new(name: &str, description: &str) -> EntityBuilder {
        Self::builder()
            .prop("name", name)
            .prop("description", description)
    }
}

impl Quiz {
    pub fn new(questions: impl Into<Value>) -> EntityBuilder {
        Self::builder().prop("hasPart", questions)
    }
}

impl LearningMathSolver {
    pub fn new(name: &str, url: &str, usage_info: &str, potential_action: Thing) -> EntityBuilder {
        Self::builder()
            .prop("name", name)
            .prop("url", url)
            .prop("usageInfo", usage_info)
            .prop("potentialAction", potential_action)
    }
}
