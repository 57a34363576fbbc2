//! Rendering of validation results for the terminal.

use formcheck_validator::{FieldReport, Validator};

/// Inputs exercised by `formcheck demo`.
pub const DEMO_VECTORS: &[(&str, &str)] = &[
    ("email", ""),
    ("email", "jmills@thinkpyxl.com"),
    ("email", "jmills@thinkpyxl"),
    ("first", ""),
    ("first", "Jerod"),
    ("last", ""),
    ("last", "Mills"),
    ("zip", ""),
    ("zip", "37919"),
    ("zip", "00000"),
    ("birthday", ""),
    ("birthday", "08/09/1985"),
    ("birthday", "08/09/2018"),
    ("nickname", ""),
];

const PASS: &str = "✅";
const FAIL: &str = "🚫";

fn mark(passed: bool) -> &'static str {
    if passed { PASS } else { FAIL }
}

const TABLE_HEADER: &str = "   | type     | value\n---|----------|------\n";

/// Validates every vector and renders one row per vector.
pub fn demo_table(validator: &Validator, vectors: &[(&str, &str)]) -> String {
    let rows = vectors.iter().map(|(field_type, value)| {
        let passed = validator.validate_field(field_type, value);
        format!("{} | {field_type:<8} | {value}\n", mark(passed))
    });
    std::iter::once(TABLE_HEADER.to_string()).chain(rows).collect()
}

/// Verdict line followed by one indented line per message.
pub fn render_check(report: &FieldReport) -> String {
    let ctx = report.context();
    let verdict = format!("{} {} {:?}\n", mark(report.passed()), ctx.field_type(), ctx.value());
    let messages = report.messages().map(|message| format!("  - {message}\n"));
    std::iter::once(verdict).chain(messages).collect()
}
