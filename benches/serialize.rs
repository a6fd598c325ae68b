//! Benchmarks for entity construction, JSON-LD serialization and page audits

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use structured_data::{
    AggregateRating, Answer, AuditOptions, Carousel, Course, CourseInstance, CourseMode, FAQPage,
    Movie, Organization, Person, Question, Rating, Review, StructuredDataDocument, Thing,
};

fn course() -> Thing {
    Course::new(
        "Learn Advanced C++ Topics",
        "Improve your C++ skills by learning advanced topics.",
        Organization::new("Example University").build().unwrap(),
    )
    .prop("date_published", "2024-03-21")
    .prop(
        "has_course_instance",
        vec![
            CourseInstance::new(CourseMode::Blended)
                .prop("course_workload", "PT22H")
                .build()
                .unwrap(),
            CourseInstance::new(CourseMode::Online)
                .prop("course_workload", "P2D")
                .build()
                .unwrap(),
        ],
    )
    .build()
    .unwrap()
}

fn movie(index: usize) -> Thing {
    Movie::new(&format!("Movie {index}"), "https://example.com/photos/6x9/photo.jpg")
        .prop("date_created", "2024-10-05")
        .prop("director", Person::new("Bradley Cooper").build().unwrap())
        .prop(
            "review",
            Review::new(
                Person::new("John D.").build().unwrap(),
                Rating::new(5).build().unwrap(),
            )
            .build()
            .unwrap(),
        )
        .prop(
            "aggregate_rating",
            AggregateRating::new(90)
                .prop("best_rating", 100)
                .prop("rating_count", 19141)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

fn faq(questions: usize) -> Thing {
    let entities: Vec<Thing> = (0..questions)
        .map(|i| {
            Question::new(
                &format!("Question {i}?"),
                Answer::new(&format!("<p>Answer {i}</p>")).build().unwrap(),
            )
            .build()
            .unwrap()
        })
        .collect();
    FAQPage::builder().prop("main_entity", entities).build().unwrap()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("person", |b| {
        b.iter(|| {
            Person::new(black_box("Jane Doe"))
                .prop("birth_date", black_box("1990-02-01"))
                .prop("url", "https://example.com/jane")
                .build()
        })
    });

    group.bench_function("course", |b| b.iter(course));

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");

    let course = course();
    group.bench_function("course_to_dict", |b| b.iter(|| black_box(&course).to_dict()));
    group.bench_function("course_script", |b| {
        b.iter(|| black_box(&course).to_json_ld_script())
    });

    for count in [3, 10, 50] {
        let carousel = Carousel::new((0..count).map(movie)).unwrap();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("carousel_to_dict", count),
            &carousel,
            |b, carousel| b.iter(|| carousel.to_dict()),
        );
    }

    group.finish();
}

fn bench_gsc_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gsc");

    for count in [1, 10, 100] {
        let page = faq(count);
        let data = page.to_dict();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("faq", count), &data, |b, data| {
            b.iter(|| page.validate_gsc(black_box(data)))
        });
    }

    group.finish();
}

fn bench_audit(c: &mut Criterion) {
    let mut group = c.benchmark_group("audit");

    for count in [1, 10, 50] {
        let html = generate_page(count);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", count), &html, |b, html| {
            b.iter(|| StructuredDataDocument::from_html(black_box(html)))
        });

        let document = StructuredDataDocument::from_html(&html);
        group.bench_with_input(
            BenchmarkId::new("audit", count),
            &document,
            |b, document| b.iter(|| document.audit(&AuditOptions::default())),
        );
    }

    group.finish();
}

/// A page with `blocks` JSON-LD scripts, alternating courses and FAQs.
fn generate_page(blocks: usize) -> String {
    let mut html = String::from("<!DOCTYPE html><html><head><title>Catalog</title>");
    for i in 0..blocks {
        let entity = if i % 2 == 0 { course() } else { faq(5) };
        html.push_str(&entity.to_json_ld_script().unwrap());
    }
    html.push_str("</head><body><p>Course catalog</p></body></html>");
    html
}

criterion_group!(
    benches,
    bench_construction,
    bench_serialization,
    bench_gsc_validation,
    bench_audit,
);
criterion_main!(benches);
