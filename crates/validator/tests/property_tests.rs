//! Property-based tests for formcheck-validator.

use formcheck_validator::prelude::*;
use proptest::prelude::*;

fn offline() -> Validator {
    Validator::new(Registry::standard(ZipDistance::offline("37912")))
}

fn field_type() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["email", "first", "last", "zip", "birthday", "phone"])
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn validate_field_idempotent(field in field_type(), s in ".{0,40}") {
        let validator = offline();
        let r1 = validator.validate_field_report(field, &s);
        let r2 = validator.validate_field_report(field, &s);
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn email_format_idempotent(s in ".*") {
        let v = format_matches(Format::Email);
        prop_assert_eq!(v.run("email", &s).passes(), v.run("email", &s).passes());
    }
}

// ============================================================================
// VERDICT: passes iff no messages
// ============================================================================

proptest! {
    #[test]
    fn verdict_matches_messages(field in field_type(), s in ".{0,40}") {
        let report = offline().validate_field_report(field, &s);
        prop_assert_eq!(report.passed(), report.messages().next().is_none());
    }

    #[test]
    fn unknown_types_always_pass(s in ".*") {
        prop_assert!(offline().validate_field("phone", &s));
    }

    #[test]
    fn blank_values_fail_every_known_type(field in prop::sample::select(FieldType::ALL.to_vec()), pad in "[ \t\n]{0,5}") {
        prop_assert!(!offline().validate_field(field.as_str(), &pad));
    }
}

// ============================================================================
// NO SHORT-CIRCUIT: errors never fewer than failing checks
// ============================================================================

proptest! {
    #[test]
    fn every_failing_check_reports(field in prop::sample::select(FieldType::ALL.to_vec()), s in ".{0,20}") {
        let validator = offline();
        let failing = validator
            .registry()
            .rules(field)
            .iter()
            .filter(|rule| {
                let mut ctx = ValidationContext::new(field.as_str(), s.as_str());
                rule.check(&s, &mut ctx);
                !ctx.passes()
            })
            .count();

        let report = validator.validate_field_report(field.as_str(), &s);
        prop_assert_eq!(report.errors().len(), failing);
    }

    #[test]
    fn zipcode_regex_accepts_five_digits(n in 1000u32..100_000) {
        let zip = format!("{n:05}");
        prop_assert!(format_matches(Format::Zipcode).run("zip", &zip).passes());
    }
}
