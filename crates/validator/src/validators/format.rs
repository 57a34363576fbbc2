//! Regular-expression format checks.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

// Word characters are ASCII-only on purpose: `\w` in `regex` is Unicode-aware.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9_.-]+)?[A-Za-z0-9_]+@[A-Za-z0-9_-]+(\.[A-Za-z0-9_]+)+")
        .expect("email pattern is valid")
});

static ZIPCODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:0[1-9]|[1-9][0-9])[0-9]{3}$").expect("zipcode pattern is valid")
});

static BIRTHDAY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/(19|20)[0-9]{2}$")
        .expect("birthday pattern is valid")
});

// The empty pattern matches at offset 0 of every input.
static DEFAULT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("").expect("empty pattern is valid"));

// ============================================================================
// FORMAT
// ============================================================================

/// The closed set of formats [`FormatMatches`] knows about.
///
/// Unknown names resolve to [`Format::Default`], whose pattern accepts
/// every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `local@domain.tld`, searched anywhere in the value.
    Email,
    /// Five digits, not starting with `00`.
    Zipcode,
    /// `MM/DD/YYYY` between 1900 and 2099.
    Birthday,
    /// Fallback for unrecognized format names.
    #[default]
    Default,
}

impl Format {
    /// Resolves a format by name, falling back to [`Format::Default`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "email" => Self::Email,
            "zipcode" => Self::Zipcode,
            "birthday" => Self::Birthday,
            _ => Self::Default,
        }
    }

    /// The name this format is registered under.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Zipcode => "zipcode",
            Self::Birthday => "birthday",
            Self::Default => "default",
        }
    }

    /// The compiled pattern for this format.
    #[must_use]
    pub fn regex(self) -> &'static Regex {
        match self {
            Self::Email => &EMAIL_REGEX,
            Self::Zipcode => &ZIPCODE_REGEX,
            Self::Birthday => &BIRTHDAY_REGEX,
            Self::Default => &DEFAULT_REGEX,
        }
    }
}

impl From<&str> for Format {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FORMAT MATCHES
// ============================================================================

crate::check! {
    /// Fails with `"<type> isn't formatted correctly."` when the value does
    /// not match the pattern of `format`.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::CheckExt;
    /// use formcheck_validator::validators::{Format, format_matches};
    ///
    /// let zip = format_matches(Format::Zipcode);
    /// assert!(zip.run("zip", "37912").passes());
    /// assert!(!zip.run("zip", "00912").passes());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub FormatMatches { format: Format };
    rule(self, input) { self.format.regex().is_match(input) }
    error(self, ctx, input) { ValidationError::invalid_format(ctx.field_type(), self.format.as_str()) }
    new(format: impl Into<Format>) { Self { format: format.into() } }
    fn format_matches(format: impl Into<Format>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::CheckExt;
    use rstest::rstest;

    #[rstest]
    #[case("jmills@thinkpyxl.com", true)]
    #[case("j.mills-x_y@think-pyxl.co.uk", true)]
    #[case("jmills@thinkpyxl", false)]
    #[case("@thinkpyxl.com", false)]
    #[case("jmills", false)]
    #[case("", false)]
    fn email(#[case] value: &str, #[case] passes: bool) {
        assert_eq!(format_matches(Format::Email).run("email", value).passes(), passes);
    }

    #[test]
    fn email_is_searched_not_anchored() {
        assert!(format_matches(Format::Email).run("email", "mail: a@b.io please").passes());
    }

    #[test]
    fn email_word_characters_are_ascii() {
        assert!(!format_matches(Format::Email).run("email", "é@ü.ö").passes());
    }

    #[rstest]
    #[case("37912", true)]
    #[case("01234", true)]
    #[case("99999", true)]
    #[case("00123", false)]
    #[case("3791", false)]
    #[case("379120", false)]
    #[case("3791a", false)]
    #[case(" 37912", false)]
    fn zipcode(#[case] value: &str, #[case] passes: bool) {
        assert_eq!(format_matches(Format::Zipcode).run("zip", value).passes(), passes);
    }

    #[rstest]
    #[case("08/09/1985", true)]
    #[case("12/31/2099", true)]
    #[case("01/01/1900", true)]
    #[case("13/01/1990", false)]
    #[case("00/10/1990", false)]
    #[case("02/32/1990", false)]
    #[case("02/10/1899", false)]
    #[case("2/10/1990", false)]
    #[case("1985-08-09", false)]
    fn birthday(#[case] value: &str, #[case] passes: bool) {
        assert_eq!(format_matches(Format::Birthday).run("birthday", value).passes(), passes);
    }

    #[test]
    fn unknown_format_falls_back_to_default() {
        let check = format_matches("phone");
        assert_eq!(check.format, Format::Default);
        assert!(check.run("phone", "anything at all").passes());
        assert!(check.run("phone", "").passes());
    }

    #[test]
    fn failure_message() {
        let ctx = format_matches(Format::Zipcode).run("zip", "abc");
        let error = &ctx.errors().errors()[0];
        assert_eq!(error.message(), "zip isn't formatted correctly.");
        assert_eq!(error.param("expected"), Some("zipcode"));
    }

    #[test]
    fn names_round_trip() {
        for format in [Format::Email, Format::Zipcode, Format::Birthday, Format::Default] {
            assert_eq!(Format::from_name(format.as_str()), format);
        }
    }
}
