//! Example: Build course markup, print the script tag and audit it

use structured_data::{
    AuditOptions, AuditOutcome, Course, CourseInstance, CourseMode, ItemAvailability, Offer,
    OfferCategory, Organization, StructuredDataDocument,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let provider = Organization::new("Example University")
        .prop("url", "https://www.example.edu")
        .build()?;
    let offer = Offer::new(ItemAvailability::InStock)
        .prop("category", OfferCategory::Paid)
        .prop("price", 10.99)
        .prop("price_currency", "EUR")
        .build()?;
    let instance = CourseInstance::new(CourseMode::Online)
        .prop("course_workload", "P2D")
        .build()?;

    let course = Course::new(
        "Learn Advanced C++ Topics",
        "Improve your C++ skills by learning advanced topics.",
        provider,
    )
    .prop("offers", offer)
    .prop("has_course_instance", instance)
    .prop("in_language", "en")
    .build()?;

    // Lineage
    println!("=== Type ===");
    println!("{}", course.super_paths());

    // JSON-LD
    println!("\n=== JSON-LD ===");
    println!("{}", serde_json::to_string_pretty(&course.to_dict())?);

    // Google Search Console
    println!("\n=== GSC ===");
    let report = course.validate_gsc(&course.to_dict());
    if report.is_valid() {
        println!("No missing properties");
    }
    for error in report.errors() {
        println!("  {}", error);
    }

    // Embed and audit
    let script = course.to_json_ld_script()?;
    let html = format!("<html><head>{script}</head><body></body></html>");
    println!("\n=== Audit ===");
    let document = StructuredDataDocument::from_html(&html);
    for entry in document.audit(&AuditOptions::default()) {
        match entry.outcome {
            AuditOutcome::Checked(report) if report.is_valid() => {
                println!("  {}: ok", entry.schema_type)
            }
            AuditOutcome::Checked(report) => {
                println!("  {}: {} issue(s)", entry.schema_type, report.errors().len())
            }
            AuditOutcome::Invalid(err) => println!("  {}: invalid ({})", entry.schema_type, err),
            AuditOutcome::Unrecognized => println!("  {}: unknown type", entry.schema_type),
        }
    }

    Ok(())
}
