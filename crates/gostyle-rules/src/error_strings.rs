//! Rule for idiomatic error strings.
//!
//! Error strings are usually wrapped into longer messages, so they start
//! lowercase and carry no trailing punctuation.
//!
//! # Detected Patterns
//!
//! On lines calling `errors.New`, `fmt.Errorf`, `t.Error`, `t.Errorf`,
//! `t.Fatal` or `t.Fatalf`, the first string literal:
//!
//! - starting with an uppercase letter
//! - ending with `.`

use std::sync::LazyLock;

use gostyle_core::{Diagnostic, Line, LineRule, RuleContext};
use regex::Regex;

/// Rule code for error-string-style.
pub const CODE: &str = "GS104";

/// Rule name for error-string-style.
pub const NAME: &str = "error-string-style";

const ERROR_CALLS: &[&str] = &[
    "errors.New(",
    "fmt.Errorf(",
    "t.Errorf(",
    "t.Error(",
    "t.Fatalf(",
    "t.Fatal(",
];

#[allow(clippy::expect_used)]
static STRING_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(.*?)""#).expect("valid regex"));

/// Returns the contents of the first double-quoted literal on the line.
fn first_literal(line: &str) -> Option<&str> {
    STRING_LITERAL
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Flags capitalized or period-terminated error strings.
#[derive(Debug, Clone, Default)]
pub struct ErrorStringStyle;

impl ErrorStringStyle {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for ErrorStringStyle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Error strings should not be capitalized or end with punctuation"
    }

    fn check_line(&self, ctx: &RuleContext<'_>, line: Line<'_>) -> Vec<Diagnostic> {
        if !ERROR_CALLS.iter().any(|call| line.text.contains(call)) {
            return Vec::new();
        }
        let Some(message) = first_literal(line.text).filter(|m| !m.is_empty()) else {
            return Vec::new();
        };

        let mut diagnostics = Vec::new();
        if message.chars().next().is_some_and(char::is_uppercase) {
            diagnostics.push(Diagnostic::new(
                CODE,
                NAME,
                ctx.at(line.number),
                "error string should not be capitalized",
            ));
        }
        if message.ends_with('.') {
            diagnostics.push(Diagnostic::new(
                CODE,
                NAME,
                ctx.at(line.number),
                "error string should not end with '.'",
            ));
        }
        diagnostics
    }
}
