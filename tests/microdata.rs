//! End-to-end markup scenarios for the Google rich result features

use serde_json::json;
use structured_data::*;

fn hours(hours: u64) -> Duration {
    Duration::from_components(DurationParts {
        hours,
        ..Default::default()
    })
}

fn organization(name: &str, url: &str) -> Thing {
    Organization::new(name).prop("url", url).build().unwrap()
}

#[test]
fn test_news_article() {
    let article = NewsArticle::builder()
        .prop("headline", "Title of a News Article")
        .prop(
            "image",
            vec![
                "https://example.com/photos/1x1/photo.jpg",
                "https://example.com/photos/4x3/photo.jpg",
                "https://example.com/photos/16x9/photo.jpg",
            ],
        )
        .prop("date_published", DateTime::parse("2024-01-05T08:00:00+08:00").unwrap())
        .prop("date_modified", DateTime::parse("2024-02-05T09:20:00+08:00").unwrap())
        .prop(
            "author",
            vec![
                Person::new("Jane Doe")
                    .prop("url", "https://example.com/profile/janedoe123")
                    .build()
                    .unwrap(),
                Person::new("John Doe")
                    .prop("url", "https://example.com/profile/johndoe123")
                    .build()
                    .unwrap(),
            ],
        )
        .build()
        .unwrap();

    let data = article.to_dict();
    assert_eq!(data["dateModified"], json!("2024-02-05T09:20:00+08:00"));
    assert_eq!(data["author"][1]["name"], json!("John Doe"));
    assert!(article.validate_gsc(&data).is_valid());
    assert_eq!(article.super_paths(), "Thing > CreativeWork > Article > NewsArticle");
}

#[test]
fn test_breadcrumb_list() {
    let crumbs = vec![
        ListItem::builder()
            .prop("name", "Books")
            .prop("position", 1)
            .prop("item", "https://example.com/books")
            .build()
            .unwrap(),
        ListItem::builder()
            .prop("name", "Science Fiction")
            .prop("position", 2)
            .prop("item", "https://example.com/books/sciencefiction")
            .build()
            .unwrap(),
        ListItem::builder()
            .prop("name", "Award Winners")
            .prop("position", 3)
            .build()
            .unwrap(),
    ];
    let breadcrumb = BreadcrumbList::new(crumbs).build().unwrap();
    let data = breadcrumb.to_dict();
    assert_eq!(
        data,
        json!({
            "@context": "https://schema.org/",
            "@type": "BreadcrumbList",
            "itemListElement": [
                {"@type": "ListItem", "name": "Books", "position": 1, "item": "https://example.com/books"},
                {"@type": "ListItem", "name": "Science Fiction", "position": 2, "item": "https://example.com/books/sciencefiction"},
                {"@type": "ListItem", "name": "Award Winners", "position": 3}
            ]
        })
    );
    assert!(breadcrumb.validate_gsc(&data).is_valid());

    let from_trail = BreadcrumbList::from_trail([
        ("Books", Some("https://example.com/books")),
        ("Science Fiction", Some("https://example.com/books/sciencefiction")),
        ("Award Winners", None),
    ])
    .unwrap();
    assert_eq!(from_trail.to_dict(), data);
}

#[test]
fn test_course_info() {
    let paid = |price: Value, currency: &str| {
        Offer::new(ItemAvailability::InStock)
            .prop("category", OfferCategory::Paid)
            .prop("price_currency", currency)
            .prop("price", price)
            .build()
            .unwrap()
    };
    let schedule = Schedule::builder()
        .prop("duration", hours(3))
        .prop("repeat_frequency", RepeatFrequency::Daily)
        .prop("repeat_count", 31)
        .prop("start_date", Date::parse("2024-07-01").unwrap())
        .prop("end_date", Date::parse("2024-07-31").unwrap())
        .build()
        .unwrap();
    let instructor = Person::new("Ira D.")
        .prop("description", "Professor at X-University")
        .prop("image", "http://example.com/person.jpg")
        .build()
        .unwrap();
    let instances = vec![
        CourseInstance::new(CourseMode::Blended)
            .prop("location", "Example University")
            .prop("course_schedule", schedule)
            .prop("instructor", instructor)
            .build()
            .unwrap(),
        CourseInstance::new(CourseMode::Online)
            .prop(
                "course_workload",
                Duration::from_components(DurationParts {
                    days: 2,
                    ..Default::default()
                }),
            )
            .build()
            .unwrap(),
    ];
    let credential = EducationalOccupationalCredential::builder()
        .prop("name", "CourseProvider Certificate")
        .prop("url", "www.example.com")
        .prop("credential_category", CredentialCategory::Certificate)
        .prop("offers", vec![paid(5.into(), "USD")])
        .build()
        .unwrap();
    let review = Review::new(
        Person::new("Lou S.").build().unwrap(),
        Rating::new(6).prop("best_rating", 10).build().unwrap(),
    )
    .prop("date_published", Date::parse("2024-08-31").unwrap())
    .build()
    .unwrap();
    let video = VideoObject::new(
        "Video name",
        vec!["www.example.com/thumbnailurl.jpg"],
        DateTime::parse("2024-03-28T08:00:00+08:00").unwrap(),
    )
    .prop("description", "A video previewing this course")
    .prop("content_url", "www.example.com/mp4")
    .build()
    .unwrap();
    let sub_course = |name: &str, slug: &str, description: &str| {
        Course::new(name, description, organization("Example University", "www.example.com"))
            .prop("url", format!("https://www.example.com/{slug}"))
            .build()
            .unwrap()
    };

    let course = Course::new(
        "Learn Advanced C++ Topics",
        "Improve your C++ skills by learning advanced topics.",
        organization("Example University", "www.ewample.com"),
    )
    .prop("publisher", organization("CourseWebsite", "www.examplecoursewebsite.com"))
    .prop(
        "image",
        vec![
            "https://example.com/photos/1x1/photo.jpg",
            "https://example.com/photos/4x3/photo.jpg",
            "https://example.com/photos/16x9/photo.jpg",
        ],
    )
    .prop(
        "aggregate_rating",
        AggregateRating::new(4)
            .prop("rating_count", 1234)
            .prop("review_count", 450)
            .build()
            .unwrap(),
    )
    .prop("offers", vec![paid(10.99.into(), "EUR")])
    .prop("total_historical_enrollment", 12345)
    .prop("date_published", Date::parse("2024-03-21").unwrap())
    .prop("educational_level", EducationalLevel::Advanced)
    .prop("about", vec!["C++ Coding", "Backend Engineering"])
    .prop(
        "teaches",
        vec![
            "Practice and apply systems thinking to plan for change",
            "Understand how memory allocation works.",
        ],
    )
    .prop("financial_aid_eligible", "Scholaship Available")
    .prop("in_language", "en")
    .prop("available_language", vec!["fr", "es"])
    .prop(
        "syllabus_sections",
        vec![
            Syllabus::new(
                "Memory Allocation",
                "Learn how memory is allocated when creating C++ variables.",
            )
            .prop("time_required", hours(6))
            .build()
            .unwrap(),
            Syllabus::new(
                "C++ Pointers",
                "Learn what C++ pointer is and when they are used.",
            )
            .prop("time_required", hours(11))
            .build()
            .unwrap(),
        ],
    )
    .prop("review", vec![review])
    .prop(
        "course_prerequisites",
        vec![
            "Basic understanding of C++ up to arrays and functions.",
            "https://www.example.com/beginnerCpp",
        ],
    )
    .prop("educational_credential_awarded", vec![credential])
    .prop("video", video)
    .prop("has_course_instance", instances)
    .prop(
        "has_part",
        vec![
            sub_course("C++ Algorithms", "cpp-algorithms", "Learn how to code base algorithms in c++"),
            sub_course("C++ Data Structures", "cpp-data-structures", "Learn about core c++ data structures."),
        ],
    )
    .build()
    .unwrap();

    let data = course.to_dict();
    assert_eq!(data["offers"]["price"], json!(10.99));
    assert_eq!(data["about"], json!(["C++ Coding", "Backend Engineering"]));
    assert_eq!(data["educationalCredentialAwarded"]["offers"]["price"], json!(5));
    assert_eq!(
        data["syllabusSections"][1]["timeRequired"],
        json!("PT11H")
    );
    assert_eq!(
        data["review"]["reviewRating"],
        json!({"@type": "Rating", "ratingValue": 6, "bestRating": 10, "worstRating": 0.0})
    );
    assert_eq!(data["video"]["thumbnailUrl"], json!("www.example.com/thumbnailurl.jpg"));
    assert_eq!(data["hasCourseInstance"][0]["instructor"]["name"], json!("Ira D."));
    assert_eq!(data["hasCourseInstance"][1]["courseWorkload"], json!("P2D"));
    assert_eq!(data["hasPart"][1]["url"], json!("https://www.example.com/cpp-data-structures"));
    assert!(course.validate_gsc(&data).is_valid());
}

#[test]
fn test_course_about_accepts_text() {
    let course = Course::new(
        "Learn Advanced C++ Topics",
        "Improve your C++ skills by learning advanced topics.",
        organization("Example University", "www.ewample.com"),
    )
    .prop("about", vec!["C++ Coding", "Backend Engineering"])
    .build()
    .unwrap();
    assert_eq!(
        course.to_dict()["about"],
        json!(["C++ Coding", "Backend Engineering"])
    );
}

#[test]
fn test_course_repeatable_properties() {
    let course = Course::new(
        "Learn Advanced C++ Topics",
        "Improve your C++ skills by learning advanced topics.",
        organization("Example University", "www.ewample.com"),
    )
    .prop("in_language", vec!["en", "fr"])
    .prop(
        "educational_level",
        vec![EducationalLevel::Advanced, EducationalLevel::Beginner],
    )
    .build()
    .unwrap();
    let data = course.to_dict();
    assert_eq!(data["inLanguage"], json!(["en", "fr"]));
    assert_eq!(data["educationalLevel"], json!(["Advanced", "Beginner"]));

    let err = Course::new(
        "Learn Advanced C++ Topics",
        "Improve your C++ skills by learning advanced topics.",
        organization("Example University", "www.ewample.com"),
    )
    .prop(
        "same_as",
        vec!["https://example.com/cpp", "https://example.org/cpp"],
    )
    .build()
    .unwrap_err();
    assert!(err.is_type_error());
}

#[test]
fn test_course_info_serializes_nested_graph() {
    let schedule = Schedule::builder()
        .prop("duration", hours(3))
        .prop("repeat_frequency", RepeatFrequency::Daily)
        .prop("repeat_count", 31)
        .prop("start_date", "2024-07-01")
        .prop("end_date", "2024-07-31")
        .build()
        .unwrap();
    let offer = Offer::new(ItemAvailability::InStock)
        .prop("category", OfferCategory::Paid)
        .prop("price_currency", "EUR")
        .prop("price", 10.99)
        .build()
        .unwrap();
    let course = Course::new(
        "Learn Advanced C++ Topics",
        "Improve your C++ skills by learning advanced topics.",
        organization("Example University", "www.ewample.com"),
    )
    .prop("offers", vec![offer])
    .prop(
        "aggregate_rating",
        AggregateRating::new(4)
            .prop("rating_count", 1234)
            .prop("review_count", 450)
            .build()
            .unwrap(),
    )
    .prop("educational_level", EducationalLevel::Advanced)
    .prop("date_published", "2024-03-21")
    .prop("about", vec!["C++ Coding", "Backend Engineering"])
    .prop(
        "has_course_instance",
        vec![
            CourseInstance::new(CourseMode::Blended)
                .prop("location", "Example University")
                .prop("course_schedule", schedule)
                .build()
                .unwrap(),
            CourseInstance::new(CourseMode::Online)
                .prop("course_workload", "P2D")
                .build()
                .unwrap(),
        ],
    )
    .build()
    .unwrap();

    let data = course.to_dict();
    assert_eq!(
        data,
        json!({
            "@context": "https://schema.org/",
            "@type": "Course",
            "name": "Learn Advanced C++ Topics",
            "description": "Improve your C++ skills by learning advanced topics.",
            "provider": {"@type": "Organization", "name": "Example University", "url": "www.ewample.com"},
            "offers": {
                "@type": "Offer",
                "availability": "https://schema.org/InStock",
                "price": 10.99,
                "priceCurrency": "EUR",
                "category": "Paid"
            },
            "aggregateRating": {
                "@type": "AggregateRating",
                "reviewCount": 450,
                "ratingCount": 1234,
                "ratingValue": 4,
                "bestRating": 5.0,
                "worstRating": 0.0
            },
            "educationalLevel": "Advanced",
            "datePublished": "2024-03-21",
            "about": ["C++ Coding", "Backend Engineering"],
            "hasCourseInstance": [
                {
                    "@type": "CourseInstance",
                    "location": "Example University",
                    "courseMode": "Blended",
                    "courseSchedule": {
                        "@type": "Schedule",
                        "repeatCount": 31,
                        "repeatFrequency": "Daily",
                        "duration": "PT3H",
                        "startDate": "2024-07-01",
                        "endDate": "2024-07-31"
                    }
                },
                {"@type": "CourseInstance", "courseMode": "Online", "courseWorkload": "P2D"}
            ]
        })
    );
    assert!(course.validate_gsc(&data).is_valid());
}

#[test]
fn test_dataset() {
    let download = |format: &str, url: &str| {
        DataDownload::builder()
            .prop("encoding_format", format)
            .prop("content_url", url)
            .build()
            .unwrap()
    };
    let sub_dataset = |name: &str, creator: &str| {
        Dataset::new(name, "Informative description of the subdataset...")
            .prop("license", "https://creativecommons.org/publicdomain/zero/1.0/")
            .prop("creator", Organization::new(creator).build().unwrap())
            .build()
            .unwrap()
    };
    let contact = ContactPoint::builder()
        .prop("contactType", "customer service")
        .prop("telephone", "+1-828-271-4800")
        .prop("email", "ncei.orders@noaa.gov")
        .build()
        .unwrap();
    let dataset = Dataset::new(
        "NCDC Storm Events Database",
        "Storm Data is provided by the National Weather Service (NWS) and contain statistics on...",
    )
    .prop(
        "distribution",
        vec![
            download("CSV", "https://www.ncdc.noaa.gov/stormevents/ftp.jsp"),
            download("XML", "https://gis.ncdc.noaa.gov/all-records/catalog/search/resource/details.page?id=gov.noaa.ncdc:C00510"),
        ],
    )
    .prop("url", "https://catalog.data.gov/dataset/ncdc-storm-events-database")
    .prop("sameAs", "https://gis.ncdc.noaa.gov/geoportal/catalog/search/resource/details.page?id=gov.noaa.ncdc:C00510")
    .prop("identifier", vec!["https://doi.org/10.1000/182", "https://identifiers.org/ark:/12345/fk1234"])
    .prop("keywords", vec!["ATMOSPHERE > ATMOSPHERIC PHENOMENA > CYCLONES", "ATMOSPHERE > ATMOSPHERIC PHENOMENA > FOG"])
    .prop("license", "https://creativecommons.org/publicdomain/zero/1.0/")
    .prop("isAccessibleForFree", true)
    .prop("hasPart", vec![sub_dataset("Sub dataset 01", "Sub dataset 01 creator"), sub_dataset("Sub dataset 02", "Sub dataset 02 creator")])
    .prop(
        "creator",
        Organization::new("National Centers for Environmental Information")
            .prop("url", "https://www.ncei.noaa.gov/")
            .prop("contactPoint", contact)
            .build()
            .unwrap(),
    )
    .prop(
        "funder",
        Organization::new("National Weather Service")
            .prop("sameAs", "https://ror.org/00tgqzw13")
            .build()
            .unwrap(),
    )
    .prop("includedInDataCatalog", DataCatalog::builder().prop("name", "data.gov").build().unwrap())
    .prop("temporal_coverage", "1950-01-01/2013-12-18")
    .prop(
        "spatial_coverage",
        Place::builder()
            .prop("geo", GeoShape::builder().prop("box", "18.0 -65.0 72.0 172.0").build().unwrap())
            .build()
            .unwrap(),
    )
    .build()
    .unwrap();

    let data = dataset.to_dict();
    assert_eq!(data["distribution"][0], json!({
        "@type": "DataDownload",
        "encodingFormat": "CSV",
        "contentUrl": "https://www.ncdc.noaa.gov/stormevents/ftp.jsp"
    }));
    assert_eq!(data["isAccessibleForFree"], json!(true));
    assert_eq!(data["creator"]["contactPoint"]["contactType"], json!("customer service"));
    assert_eq!(data["spatialCoverage"], json!({
        "@type": "Place",
        "geo": {"@type": "GeoShape", "box": "18.0 -65.0 72.0 172.0"}
    }));
    assert_eq!(data["temporalCoverage"], json!("1950-01-01/2013-12-18"));
    assert!(dataset.validate_gsc(&data).is_valid());
}

#[test]
fn test_movie_carousel() {
    let movie = |name: &str, created: &str, director: &str, critic: &str, stars: i64, score: i64, count: i64| {
        Movie::new(name, "https://example.com/photos/6x9/photo.jpg")
            .prop("url", "https://example.com/2024-best-picture-noms")
            .prop("date_created", created)
            .prop("director", Person::new(director).build().unwrap())
            .prop(
                "review",
                Review::new(
                    Person::new(critic).build().unwrap(),
                    Rating::new(stars).build().unwrap(),
                )
                .build()
                .unwrap(),
            )
            .prop(
                "aggregate_rating",
                AggregateRating::new(score)
                    .prop("best_rating", 100)
                    .prop("rating_count", count)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    };
    let carousel = Carousel::new([
        movie("A star is born", "2024-10-05", "Bradley Cooper", "John D.", 5, 90, 19141),
        movie("Bohemian Rhapsody", "2024-11-02", "Bryan Singer", "Vin S.", 3, 61, 21985),
        movie("Black Panther", "2024-02-16", "Ryan Coogler", "Trevor R.", 2, 96, 88211),
    ])
    .unwrap();

    let data = carousel.to_dict();
    assert_eq!(data["@type"], json!("ItemList"));
    assert_eq!(data["itemListElement"].as_array().unwrap().len(), 3);
    assert_eq!(
        data["itemListElement"][0],
        json!({
            "@type": "ListItem",
            "position": 1,
            "item": {
                "@type": "Movie",
                "name": "A star is born",
                "image": "https://example.com/photos/6x9/photo.jpg",
                "url": "https://example.com/2024-best-picture-noms",
                "dateCreated": "2024-10-05",
                "director": {"@type": "Person", "name": "Bradley Cooper"},
                "review": {
                    "@type": "Review",
                    "author": {"@type": "Person", "name": "John D."},
                    "reviewRating": {"@type": "Rating", "ratingValue": 5, "bestRating": 5.0, "worstRating": 0.0}
                },
                "aggregateRating": {
                    "@type": "AggregateRating",
                    "ratingValue": 90,
                    "bestRating": 100,
                    "worstRating": 0.0,
                    "ratingCount": 19141
                }
            }
        })
    );
    assert_eq!(data["itemListElement"][2]["position"], json!(3));
    assert!(carousel.validate_gsc(&data).is_valid());
}

#[test]
fn test_discussion_forum() {
    let poster = |name: &str, slug: &str, posts: i64| {
        Person::new(name)
            .prop("url", format!("https://example.com/user/{slug}"))
            .prop(
                "agentInteractionStatistic",
                InteractionCounter::new(posts, WriteAction::builder().build().unwrap())
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    };
    let likes = |count: i64| {
        InteractionCounter::new(count, LikeAction::builder().build().unwrap())
            .build()
            .unwrap()
    };
    let comments = vec![
        Comment::builder()
            .prop("author", poster("Saul Douglas", "saul-douglas", 167))
            .prop("date_published", "2024-03-01T09:46:02+02:00")
            .prop("text", "Who's the person you're with?")
            .build()
            .unwrap(),
        Comment::builder()
            .prop("author", poster("Katie Pope", "katie-pope", 8))
            .prop("date_published", "2024-03-01T09:50:25+02:00")
            .prop("text", "That's my mom, isn't she cool?")
            .prop("interaction_statistic", likes(7))
            .build()
            .unwrap(),
    ];
    let posting = DiscussionForumPosting::builder()
        .prop("author", poster("Katie Pope", "katie-pope", 8))
        .prop("date_published", "2024-03-01T08:34:34+02:00")
        .prop("interaction_statistic", likes(27))
        .prop("main_entity_of_page", "https://example.com/post/very-popular-thread")
        .prop("headline", "I went to the concert!")
        .prop("text", "Look at how cool this concert was!")
        .prop(
            "video",
            VideoObject::new(
                "Video of concert",
                "https://example.com/media/super-cool-concert-snap.jpg",
                "2024-03-01T06:34:34+02:00",
            )
            .prop("content_url", "https://example.com/media/super-cool-concert.mp4")
            .build()
            .unwrap(),
        )
        .prop("url", "https://example.com/post/very-popular-thread")
        .prop("comment", comments)
        .build()
        .unwrap();

    let data = posting.to_dict();
    assert_eq!(
        data["author"]["agentInteractionStatistic"],
        json!({
            "@type": "InteractionCounter",
            "userInteractionCount": 8,
            "interactionType": {"@type": "WriteAction"}
        })
    );
    assert_eq!(
        data["comment"][1]["interactionStatistic"],
        json!({
            "@type": "InteractionCounter",
            "userInteractionCount": 7,
            "interactionType": {"@type": "LikeAction"}
        })
    );
    assert_eq!(data["mainEntityOfPage"], json!("https://example.com/post/very-popular-thread"));
    assert!(posting.validate_gsc(&data).is_valid());
}

#[test]
fn test_education_quiz() {
    let flashcard = |answer: &str, text: &str| {
        Question::builder()
            .prop("accepted_answer", Answer::new(answer).build().unwrap())
            .prop("text", text)
            .prop("edu_question_type", "Flashcard")
            .build()
            .unwrap()
    };
    let quiz = Quiz::new(vec![
        flashcard("receptor molecules", "This is some fact about receptor molecules."),
        flashcard("cell membrane", "This is some fact about the cell membrane."),
    ])
    .prop("about", Thing::builder().prop("name", "Cell transport").build().unwrap())
    .prop(
        "educational_alignment",
        AlignmentObject::builder()
            .prop("alignment_type", "educationalSubject")
            .prop("target_name", "Biology")
            .build()
            .unwrap(),
    )
    .build()
    .unwrap();

    let data = quiz.to_dict();
    assert_eq!(
        data,
        json!({
            "@context": "https://schema.org/",
            "@type": "Quiz",
            "hasPart": [
                {
                    "@type": "Question",
                    "text": "This is some fact about receptor molecules.",
                    "acceptedAnswer": {"@type": "Answer", "text": "receptor molecules"},
                    "eduQuestionType": "Flashcard"
                },
                {
                    "@type": "Question",
                    "text": "This is some fact about the cell membrane.",
                    "acceptedAnswer": {"@type": "Answer", "text": "cell membrane"},
                    "eduQuestionType": "Flashcard"
                }
            ],
            "about": {"@type": "Thing", "name": "Cell transport"},
            "educationalAlignment": {
                "@type": "AlignmentObject",
                "alignmentType": "educationalSubject",
                "targetName": "Biology"
            }
        })
    );
    assert!(quiz.validate_gsc(&data).is_valid());
}

#[test]
fn test_employer_aggregate_rating() {
    let shop = Organization::new("World's Best Coffee Shop")
        .prop("same_as", "https://example.com")
        .build()
        .unwrap();
    let rating = EmployerAggregateRating::new(shop, 91)
        .prop("best_rating", 100)
        .prop("worst_rating", 1)
        .prop("rating_count", 10561)
        .build()
        .unwrap();
    let data = rating.to_dict();
    assert_eq!(
        data,
        json!({
            "@context": "https://schema.org/",
            "@type": "EmployerAggregateRating",
            "itemReviewed": {
                "@type": "Organization",
                "name": "World's Best Coffee Shop",
                "sameAs": "https://example.com"
            },
            "ratingCount": 10561,
            "ratingValue": 91,
            "bestRating": 100,
            "worstRating": 1
        })
    );
    assert!(rating.validate_gsc(&data).is_valid());
}

#[test]
fn test_estimated_salary() {
    let salary = MonetaryAmountDistribution::builder()
        .prop("name", "base")
        .prop("currency", "USD")
        .prop("duration", "P1Y")
        .prop("percentile10", 100000.5)
        .prop("percentile25", 115000)
        .prop("median", 120000.28)
        .prop("percentile75", 130000)
        .prop("percentile90", 150000)
        .build()
        .unwrap();
    let occupation = Occupation::builder()
        .prop("name", "Software Developer, Applications")
        .prop(
            "main_entity_of_page",
            WebPage::builder()
                .prop("last_reviewed", Date::parse("2024-07-23").unwrap())
                .build()
                .unwrap(),
        )
        .prop(
            "description",
            "Develops information systems by designing, developing, and installing software solutions",
        )
        .prop("estimated_salary", salary)
        .prop(
            "occupation_location",
            City::builder().prop("name", "Mountain View").build().unwrap(),
        )
        .build()
        .unwrap();

    let data = occupation.to_dict();
    assert_eq!(
        data["estimatedSalary"],
        json!({
            "@type": "MonetaryAmountDistribution",
            "name": "base",
            "currency": "USD",
            "duration": "P1Y",
            "percentile10": 100000.5,
            "percentile25": 115000,
            "median": 120000.28,
            "percentile75": 130000,
            "percentile90": 150000
        })
    );
    assert_eq!(data["occupationLocation"], json!({"@type": "City", "name": "Mountain View"}));
    assert_eq!(data["mainEntityOfPage"], json!({"@type": "WebPage", "lastReviewed": "2024-07-23"}));
    assert!(occupation.validate_gsc(&data).is_valid());
}

#[test]
fn test_fact_check() {
    let appearance = NewsArticle::builder()
        .prop("url", "https://example.com/news/a122121")
        .prop("headline", "Square Earth - Flat earthers for the Internet age")
        .prop("date_published", "2024-06-22T09:50:25+02:00")
        .prop(
            "author",
            Person::new("T. Tellar")
                .prop("url", "http://example.com/progile/t-tellar")
                .build()
                .unwrap(),
        )
        .prop("image", "https://example.com/photos/1x1/photo.jpg")
        .prop(
            "publisher",
            Organization::new("Skeptical News")
                .prop(
                    "logo",
                    ImageObject::builder()
                        .prop("url", "https://example.com/logo.jpg")
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let claim = Claim::builder()
        .prop(
            "author",
            Organization::new("Square World Society")
                .prop("same_as", "https://example.flatworlders.com/we-know-that-the-world-is-flat")
                .build()
                .unwrap(),
        )
        .prop("date_published", "2024-06-20T09:50:25+02:00")
        .prop("appearance", appearance)
        .build()
        .unwrap();
    let review = ClaimReview::builder()
        .prop("url", "https://example.com/news/science/worldisflat.html")
        .prop("claim_reviewed", "The world is flat")
        .prop("item_reviewed", claim)
        .prop("author", Organization::new("Example.com science watch").build().unwrap())
        .prop(
            "review_rating",
            Rating::new(1)
                .prop("best_rating", 5)
                .prop("worst_rating", 1)
                .prop("alternate_name", "False")
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    let data = review.to_dict();
    assert_eq!(
        data["reviewRating"],
        json!({
            "@type": "Rating",
            "alternateName": "False",
            "ratingValue": 1,
            "bestRating": 5,
            "worstRating": 1
        })
    );
    assert_eq!(
        data["itemReviewed"]["appearance"]["publisher"]["logo"],
        json!({"@type": "ImageObject", "url": "https://example.com/logo.jpg"})
    );
    assert!(review.validate_gsc(&data).is_valid());
    assert!(review.is_a("Review"));
}

#[test]
fn test_faq_page() {
    let faq = FAQPage::builder()
        .prop(
            "main_entity",
            vec![
                Question::new(
                    "How to find an apprenticeship?",
                    Answer::new("<p>We provide an official service to search through available apprenticeships.</p>")
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
                Question::new(
                    "Whom to contact?",
                    Answer::new("You can contact the apprenticeship office through our official phone hotline.")
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
            ],
        )
        .build()
        .unwrap();

    let data = faq.to_dict();
    assert_eq!(data["mainEntity"][0]["name"], json!("How to find an apprenticeship?"));
    assert!(faq.validate_gsc(&data).is_valid());

    let script = faq.to_json_ld_script().unwrap();
    assert!(script.contains(r"<p>We provide an official service to search through available apprenticeships.<\/p>"));
    assert!(!script.contains("</p>"));
}

#[test]
fn test_learning_video_with_clips() {
    let clip = |kind: &str, name: &str, start: i64, end: i64, t: u32| {
        LearningClip::builder()
            .prop("learning_resource_type", kind)
            .prop("name", name)
            .prop("start_offset", start)
            .prop("end_offset", end)
            .prop("url", format!("https://www.example.com/example?t={t}"))
            .build()
            .unwrap()
    };
    let video = LearningVideo::builder()
        .prop("name", "An introduction to XYZ")
        .prop("description", "Solving equations using exponent properties")
        .prop("educational_level", "High school (US)")
        .prop(
            "educational_alignment",
            AlignmentObject::builder()
                .prop("educational_framework", "Common Core")
                .prop("target_name", "HSA-SSE.B.3")
                .prop("target_url", "https://www.corestandards.org/Math/Content/HSA/SSE/#CCSS.Math.Content.HSA.SSE.B.3")
                .build()
                .unwrap(),
        )
        .prop("content_url", "https://www.example.com/video/123/file.mp4")
        .prop(
            "thumbnail_url",
            vec![
                "https://example.com/photos/1x1/photo.jpg",
                "https://example.com/photos/4x3/photo.jpg",
                "https://example.com/photos/16x9/photo.jpg",
            ],
        )
        .prop(
            "has_part",
            vec![
                clip("Concept Overview", "Understanding exponents", 40, 120, 501),
                clip("Problem Walkthrough", "Example problem 1: suspended wires", 150, 225, 30),
            ],
        )
        .prop("upload_date", "2024-03-31T08:00:00+08:00")
        .build()
        .unwrap();

    let data = video.to_dict();
    assert_eq!(data["@type"], json!(["VideoObject", "LearningResource"]));
    assert_eq!(
        data["hasPart"][0],
        json!({
            "@type": ["Clip", "LearningResource"],
            "name": "Understanding exponents",
            "url": "https://www.example.com/example?t=501",
            "startOffset": 40,
            "endOffset": 120,
            "learningResourceType": "Concept Overview"
        })
    );
    assert!(video.validate_gsc(&data).is_valid());
}

#[test]
fn test_math_solver() {
    let solver = LearningMathSolver::builder()
        .prop("name", "An awesome math solver")
        .prop("url", "https://www.mathdomain.com/")
        .prop("usage_info", "https://www.mathdomain.com/privacy")
        .prop("in_language", "en")
        .prop(
            "potential_action",
            SolveMathAction::builder()
                .prop("target", "https://mathdomain.com/solve?q={math_expression_string}")
                .prop("math_expression__input", "required name=math_expression_string")
                .prop(
                    "edu_question_type",
                    vec![ProblemType::PolynomialEquation, ProblemType::Derivative],
                )
                .build()
                .unwrap(),
        )
        .prop("learning_resource_type", "Math solver")
        .build()
        .unwrap();

    let data = solver.to_dict();
    assert_eq!(
        data,
        json!({
            "@context": "https://schema.org/",
            "@type": ["MathSolver", "LearningResource"],
            "name": "An awesome math solver",
            "url": "https://www.mathdomain.com/",
            "potentialAction": {
                "@type": "SolveMathAction",
                "eduQuestionType": ["Polynomial Equation", "Derivative"],
                "target": "https://mathdomain.com/solve?q={math_expression_string}",
                "mathExpression-input": "required name=math_expression_string"
            },
            "usageInfo": "https://www.mathdomain.com/privacy",
            "inLanguage": "en",
            "learningResourceType": "Math solver"
        })
    );
    assert!(solver.validate_gsc(&data).is_valid());
}

#[test]
fn test_video_with_broadcast_events() {
    let broadcasts = vec![
        BroadcastEvent::new(
            "First scheduled broadcast",
            "2018-10-27T14:00:00+00:00",
            "2018-10-27T14:37:14+00:00",
        )
        .build()
        .unwrap(),
        BroadcastEvent::new(
            "Second scheduled broadcast",
            "2018-10-27T18:00:00+00:00",
            "2018-10-27T18:37:14+00:00",
        )
        .build()
        .unwrap(),
    ];
    let video = VideoObject::new(
        "Introducing the self-driving bicycle in the Netherlands",
        vec![
            "https://example.com/photos/1x1/photo.jpg",
            "https://example.com/photos/4x3/photo.jpg",
        ],
        "2024-03-31T08:00:00+08:00",
    )
    .prop("duration", "PT1M54S")
    .prop("content_url", "https://www.example.com/video/123/file.mp4")
    .prop("embed_url", "https://www.example.com/embed/123")
    .prop(
        "interaction_statistic",
        InteractionCounter::new(5647018, WatchAction::builder().build().unwrap())
            .build()
            .unwrap(),
    )
    .prop("regions_allowed", vec!["US", "NL"])
    .prop("publication", broadcasts)
    .prop(
        "potential_action",
        SeekToAction::new("https://www.example.com/video/123/file.mp4?t={seek_to_second_number}")
            .build()
            .unwrap(),
    )
    .build()
    .unwrap();

    let data = video.to_dict();
    assert_eq!(data["publication"][1]["isLiveBroadcast"], json!(true));
    assert_eq!(data["publication"][1]["endDate"], json!("2018-10-27T18:37:14+00:00"));
    assert_eq!(data["duration"], json!("PT1M54S"));
    assert_eq!(data["regionsAllowed"], json!(["US", "NL"]));
    assert!(video.validate_gsc(&data).is_valid());
}

#[test]
fn test_standard_event_publish_checks() {
    let venue = Place::new(
        "Snickerpark Stadium",
        PostalAddress::builder()
            .prop("street_address", "100 West Snickerpark Dr")
            .prop("address_locality", "Snickertown")
            .prop("postal_code", "19019")
            .prop("address_region", "PA")
            .prop("address_country", "US")
            .build()
            .unwrap(),
    )
    .build()
    .unwrap();
    let offer = Offer::new(ItemAvailability::InStock)
        .prop("url", "https://www.example.com/event_offer/12345_202403180430")
        .prop("price", 30)
        .prop("price_currency", "USD")
        .prop("valid_from", "2024-05-21T12:00:00")
        .build()
        .unwrap();
    let event = Event::new("The Adventures of Kira and Morrison", "2025-07-21T19:00:00-05:00", venue)
        .prop("end_date", "2025-07-21T23:00:00-05:00")
        .prop("event_attendance_mode", EventAttendanceModeEnumeration::Offline)
        .prop("event_status", EventStatusType::Scheduled)
        .prop(
            "image",
            vec![
                "https://example.com/photos/1x1/photo.jpg",
                "https://example.com/photos/4x3/photo.jpg",
                "https://example.com/photos/16x9/photo.jpg",
            ],
        )
        .prop(
            "description",
            "The Adventures of Kira and Morrison is coming to Snickertown in a can't miss performance.",
        )
        .prop("offers", offer)
        .prop(
            "performer",
            PerformingGroup::builder().prop("name", "Kira and Morrison").build().unwrap(),
        )
        .prop("organizer", organization("Kira and Morrison Music", "https://kiraandmorrisonmusic.com"))
        .build()
        .unwrap();

    let data = event.to_dict();
    assert_eq!(
        data,
        json!({
            "@context": "https://schema.org/",
            "@type": "Event",
            "name": "The Adventures of Kira and Morrison",
            "location": {
                "@type": "Place",
                "name": "Snickerpark Stadium",
                "address": {
                    "@type": "PostalAddress",
                    "addressCountry": "US",
                    "addressLocality": "Snickertown",
                    "addressRegion": "PA",
                    "postalCode": "19019",
                    "streetAddress": "100 West Snickerpark Dr"
                }
            },
            "startDate": "2025-07-21T19:00:00-05:00",
            "description": "The Adventures of Kira and Morrison is coming to Snickertown in a can't miss performance.",
            "endDate": "2025-07-21T23:00:00-05:00",
            "eventAttendanceMode": "https://schema.org/OfflineEventAttendanceMode",
            "eventStatus": "https://schema.org/EventScheduled",
            "image": [
                "https://example.com/photos/1x1/photo.jpg",
                "https://example.com/photos/4x3/photo.jpg",
                "https://example.com/photos/16x9/photo.jpg"
            ],
            "offers": {
                "@type": "Offer",
                "url": "https://www.example.com/event_offer/12345_202403180430",
                "availability": "https://schema.org/InStock",
                "price": 30,
                "priceCurrency": "USD",
                "validFrom": "2024-05-21T12:00:00"
            },
            "organizer": {
                "@type": "Organization",
                "name": "Kira and Morrison Music",
                "url": "https://kiraandmorrisonmusic.com"
            },
            "performer": {"@type": "PerformingGroup", "name": "Kira and Morrison"}
        })
    );
    assert!(event.gsc_validate().is_ok());
    assert!(event.validate_gsc(&data).is_valid());

    let mut moved = event.clone();
    moved
        .set_property("event_attendance_mode", EventAttendanceModeEnumeration::Online)
        .unwrap();
    assert!(moved.gsc_validate().unwrap_err().is_value_error());
}

#[test]
fn test_json_ld_round_trip() {
    let solver = LearningMathSolver::new(
        "Solver",
        "https://www.mathdomain.com/",
        "https://www.mathdomain.com/privacy",
        SolveMathAction::new("https://mathdomain.com/solve?q={q}", "required name=q")
            .build()
            .unwrap(),
    )
    .prop("learning_resource_type", "Math solver")
    .build()
    .unwrap();

    let data = solver.to_dict();
    let rebuilt = Thing::from_json_ld(&data).unwrap();
    assert_eq!(rebuilt.kind(), EntityKind::LearningMathSolver);
    assert_eq!(rebuilt.to_dict(), data);
}

#[cfg(feature = "html")]
#[test]
fn test_audit_rendered_page() {
    let faq = FAQPage::builder()
        .prop(
            "main_entity",
            Question::new("Whom to contact?", Answer::new("The office.").build().unwrap())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let dataset = Dataset::builder().prop("name", "Rainfall").build().unwrap();
    let html = format!(
        "<html><head>{}{}</head><body></body></html>",
        faq.to_json_ld_script().unwrap(),
        dataset.to_json_ld_script().unwrap()
    );

    let entries = StructuredDataDocument::from_html(&html).audit(&AuditOptions::default());
    assert_eq!(entries.len(), 2);
    assert!(entries[0].is_clean());
    match &entries[1].outcome {
        AuditOutcome::Checked(report) => assert_eq!(
            report.errors(),
            ["description is required for Google Search Console for the feature Dataset"]
        ),
        other => panic!("unexpected outcome: {other:?}"),
    }
}
