//! End-to-end checks of the standard rule table.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use formcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

/// Answers every lookup with a fixed body and counts the calls.
struct FixedLookup {
    body: Value,
    calls: Arc<AtomicUsize>,
}

impl DistanceLookup for FixedLookup {
    fn distance(&self, _origin: &str, _candidate: &str) -> Result<Value, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }
}

fn validator_with(body: Value) -> (Validator, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let lookup = FixedLookup {
        body,
        calls: Arc::clone(&calls),
    };
    let registry = Registry::standard(ZipDistance::new(lookup, "37912"));
    (Validator::new(registry), calls)
}

fn offline() -> Validator {
    Validator::new(Registry::standard(ZipDistance::offline("37912")))
}

// ============================================================================
// STANDARD TABLE
// ============================================================================

#[rstest]
#[case("email", "", false)]
#[case("email", "jmills@thinkpyxl.com", true)]
#[case("email", "jmills@thinkpyxl", false)]
#[case("first", "", false)]
#[case("first", "Jerod", true)]
#[case("first", "   ", false)]
#[case("last", "Mills", true)]
#[case("last", "", false)]
#[case("birthday", "08/09/1985", true)]
#[case("birthday", "08/09/2018", false)]
#[case("birthday", "1985-08-09", false)]
#[case("birthday", "04/31/1970", true)]
#[case("birthday", "02/29/1990", true)]
#[case("birthday", "", false)]
#[case("nickname", "", true)]
#[case("Email", "", true)]
fn standard_vectors(#[case] field_type: &str, #[case] value: &str, #[case] expected: bool) {
    assert_eq!(offline().validate_field(field_type, value), expected);
}

#[test]
fn empty_email_reports_both_messages() {
    let report = offline().validate_field_report("email", "");
    assert_eq!(
        report.messages().collect::<Vec<_>>(),
        ["email can't be empty.", "email isn't formatted correctly."]
    );
}

#[test]
fn young_birthday_message() {
    let report = offline().validate_field_report("birthday", "08/09/2018");
    assert_eq!(
        report.messages().collect::<Vec<_>>(),
        ["birthday isn't greater than 21 years."]
    );
}

#[test]
fn day_past_month_end_is_measured_not_rejected() {
    let report = offline().validate_field_report("birthday", "02/30/1990");
    assert!(report.passed());
}

#[test]
fn unformatted_birthday_fails_format_and_age() {
    let report = offline().validate_field_report("birthday", "not a date");
    assert_eq!(
        report.messages().collect::<Vec<_>>(),
        [
            "birthday isn't formatted correctly.",
            "birthday isn't greater than 21 years.",
        ]
    );
}

// ============================================================================
// ZIP
// ============================================================================

#[test]
fn zip_passes_with_distance() {
    let (validator, calls) = validator_with(json!({ "distance": 3.214 }));
    let report = validator.validate_field_report("zip", "37919");

    assert!(report.passed());
    assert_eq!(report.context().response(), Some(&json!({ "distance": 3.214 })));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn zip_lookup_runs_after_format_failure() {
    let (validator, calls) = validator_with(json!({ "error_msg": "Zip code not found." }));
    let report = validator.validate_field_report("zip", "abc");

    assert_eq!(
        report.messages().collect::<Vec<_>>(),
        ["zip isn't formatted correctly.", "Zip code not found."]
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn zip_origin_itself_fails() {
    let (validator, _) = validator_with(json!({ "distance": 0 }));
    let report = validator.validate_field_report("zip", "37912");
    assert_eq!(
        report.messages().collect::<Vec<_>>(),
        ["37912 isn't a valid zip."]
    );
}

#[test]
fn non_zip_fields_never_look_up() {
    let (validator, calls) = validator_with(json!({ "distance": 1 }));
    for field_type in ["email", "first", "last", "birthday", "phone"] {
        validator.validate_field(field_type, "x");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn offline_zip_fails_with_generic_message() {
    let report = offline().validate_field_report("zip", "37919");
    assert!(!report.passed());
    assert_eq!(
        report.messages().collect::<Vec<_>>(),
        ["37919 isn't a valid zip."]
    );
    assert_eq!(report.context().response(), None);
}

// ============================================================================
// CUSTOM REGISTRIES
// ============================================================================

#[test]
fn custom_rules_run_in_registration_order() {
    let registry = Registry::builder()
        .rule(FieldType::First, |_: &str, ctx: &mut ValidationContext| {
            ctx.record(ValidationError::new("one", "one"));
        })
        .rule(FieldType::First, |_: &str, ctx: &mut ValidationContext| {
            assert_eq!(ctx.errors().len(), 1);
            ctx.record(ValidationError::new("two", "two"));
        })
        .build();

    let report = Validator::new(registry).validate_field_report("first", "");
    assert_eq!(report.messages().collect::<Vec<_>>(), ["one", "two"]);
}

#[test]
fn validator_is_shareable_across_threads() {
    let validator = Arc::new(offline());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validator = Arc::clone(&validator);
            std::thread::spawn(move || {
                let value = if i % 2 == 0 { "Jerod" } else { "" };
                (i, validator.validate_field("first", value))
            })
        })
        .collect();

    for handle in handles {
        let (i, passed) = handle.join().unwrap();
        assert_eq!(passed, i % 2 == 0);
    }
}
