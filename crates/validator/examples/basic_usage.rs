//! Basic usage example for formcheck-validator

use formcheck_validator::prelude::*;

fn main() {
    // Standard rules, with zip lookups switched off
    let validator = Validator::new(Registry::standard(ZipDistance::offline("37912")));

    for (field_type, value) in [
        ("email", "jmills@thinkpyxl.com"),
        ("email", ""),
        ("birthday", "08/09/2018"),
    ] {
        let report = validator.validate_field_report(field_type, value);
        if report.passed() {
            println!("✓ {field_type} '{value}' is valid");
        } else {
            for message in report.messages() {
                println!("✗ {field_type} '{value}': {message}");
            }
        }
    }

    // A one-off rule as a closure
    let registry = Registry::builder()
        .rule(FieldType::First, not_empty())
        .rule(FieldType::First, |value: &str, ctx: &mut ValidationContext| {
            if value.chars().any(|c| c.is_ascii_digit()) {
                ctx.record(ValidationError::new("digits", "first can't contain digits."));
            }
        })
        .build();

    let custom = Validator::new(registry);
    println!("\nfirst 'R2D2' valid: {}", custom.validate_field("first", "R2D2"));
}
