//! String rules: type check, sanitization, format and content checks.
//!
//! Every rule here requires the current value to be a string and raises the
//! caller's error otherwise. `clean_string` is the one transform in the
//! group: it writes the sanitized string back into the cell.

use std::sync::LazyLock;

use regex::Regex;

use crate::chain::{ChainResult, Validator};
use crate::foundation::ValidationError;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

impl Validator {
    /// Checks that the value is a string.
    ///
    /// ```
    /// use chainval::prelude::*;
    ///
    /// assert!(Validator::new("test").is_string("not a string").is_ok());
    /// assert!(Validator::new(1).is_string("not a string").is_err());
    /// ```
    pub fn is_string(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            if cell.get().is_string() {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }

    /// Sanitizes a string in place: trims it, escapes HTML-special
    /// characters, and collapses every whitespace run to a single space.
    ///
    /// The escape leaves existing character entities alone, so cleaning an
    /// already-clean string is a no-op:
    ///
    /// ```
    /// use chainval::prelude::*;
    ///
    /// # fn main() -> Result<(), ValidationError> {
    /// let value = Validator::new("  a <b>  c  ")
    ///     .clean_string("not a string")?
    ///     .into_value();
    /// assert_eq!(value.as_str(), Some("a &lt;b&gt; c"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn clean_string(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            let Some(s) = cell.get().as_str() else {
                return Err(fail.into());
            };
            let cleaned = clean(s);
            cell.set(cleaned);
            Ok(())
        })
    }

    /// Checks that the string reads as a finite number (`"42"`, `"-1.5"`,
    /// `"2e10"`).
    pub fn is_numeric(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            let Some(s) = cell.get().as_str() else {
                return Err(fail.into());
            };
            let numeric = s.trim().parse::<f64>().is_ok_and(f64::is_finite);
            if numeric { Ok(()) } else { Err(fail.into()) }
        })
    }

    /// Checks that the string has no uppercase letters.
    pub fn is_lowercase(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            let Some(s) = cell.get().as_str() else {
                return Err(fail.into());
            };
            if s == s.to_lowercase() {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }

    /// Checks that the string has no lowercase letters.
    pub fn is_uppercase(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            let Some(s) = cell.get().as_str() else {
                return Err(fail.into());
            };
            if s == s.to_uppercase() {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }

    /// Checks that the string is an email address.
    pub fn is_email(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            let Some(s) = cell.get().as_str() else {
                return Err(fail.into());
            };
            if EMAIL.is_match(s) {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }

    /// Checks that the string is an absolute URL with a host.
    pub fn is_url(self, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            let Some(s) = cell.get().as_str() else {
                return Err(fail.into());
            };
            let valid = url::Url::parse(s).map(|u| u.has_host()).unwrap_or(false);
            if valid { Ok(()) } else { Err(fail.into()) }
        })
    }

    /// Checks that the string matches a pattern.
    ///
    /// ```
    /// use chainval::prelude::*;
    /// use std::sync::LazyLock;
    /// use regex::Regex;
    ///
    /// static USERNAME: LazyLock<Regex> =
    ///     LazyLock::new(|| Regex::new(r"^[a-z0-9]{3,16}$").unwrap());
    ///
    /// assert!(Validator::new("ada99").matches(&USERNAME, "bad username").is_ok());
    /// assert!(Validator::new("Ada!").matches(&USERNAME, "bad username").is_err());
    /// ```
    pub fn matches(self, pattern: &Regex, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            let Some(s) = cell.get().as_str() else {
                return Err(fail.into());
            };
            if pattern.is_match(s) {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }

    /// Checks that the string contains a substring.
    pub fn contains(self, needle: &str, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            let Some(s) = cell.get().as_str() else {
                return Err(fail.into());
            };
            if s.contains(needle) {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }

    /// Checks that the string does not contain a substring.
    pub fn not_contains(self, needle: &str, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            let Some(s) = cell.get().as_str() else {
                return Err(fail.into());
            };
            if s.contains(needle) {
                Err(fail.into())
            } else {
                Ok(())
            }
        })
    }

    /// Checks that the string starts with a prefix.
    pub fn starts_with(self, prefix: &str, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            let Some(s) = cell.get().as_str() else {
                return Err(fail.into());
            };
            if s.starts_with(prefix) {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }

    /// Checks that the string ends with a suffix.
    pub fn ends_with(self, suffix: &str, fail: impl Into<ValidationError>) -> ChainResult {
        self.rule(|cell| {
            let Some(s) = cell.get().as_str() else {
                return Err(fail.into());
            };
            if s.ends_with(suffix) {
                Ok(())
            } else {
                Err(fail.into())
            }
        })
    }
}

// ============================================================================
// SANITIZATION
// ============================================================================

fn clean(input: &str) -> String {
    let escaped = escape_html(input.trim());
    WHITESPACE_RUN.replace_all(&escaped, " ").into_owned()
}

/// Escapes `&`, `<`, `>`, `"` and `'` as HTML entities. An `&` that already
/// introduces an entity is left alone, which keeps the escape idempotent.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (at, ch) in input.char_indices() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '&' if !starts_entity(&input[at + 1..]) => out.push_str("&amp;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Whether `rest` begins with the body of a character entity (`name;`,
/// `#123;`, `#x7f;`).
fn starts_entity(rest: &str) -> bool {
    let Some(end) = rest.find(';').filter(|&end| end > 0 && end <= 32) else {
        return false;
    };
    let body = &rest[..end];
    if let Some(digits) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
    } else if let Some(digits) = body.strip_prefix('#') {
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    } else {
        body.bytes().next().is_some_and(|b| b.is_ascii_alphabetic())
            && body.bytes().all(|b| b.is_ascii_alphanumeric())
    }
}

// ============================================================================
// TESTS
// ============================================================================
