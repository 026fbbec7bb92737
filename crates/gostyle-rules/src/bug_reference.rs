//! Rule requiring full issue URLs in schema files.
//!
//! A bare `b/123456789` reference is only meaningful inside one tracker, so
//! `.proto` files must link the full URL instead.

use std::sync::LazyLock;

use gostyle_core::{Diagnostic, FileRole, Line, LineRule, RuleContext};
use regex::Regex;

/// Rule code for bug-reference.
pub const CODE: &str = "GS106";

/// Rule name for bug-reference.
pub const NAME: &str = "bug-reference";

/// A word, whitespace, then `b/` and a nine-digit issue number.
#[allow(clippy::expect_used)]
static BARE_BUG_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\s+b/(\d{9})\b").expect("valid regex"));

/// Flags bare `b/NNNNNNNNN` issue references.
#[derive(Debug, Clone)]
pub struct BugReference {
    /// URL prefix suggested in front of the issue number.
    pub issue_url_base: String,
}

impl Default for BugReference {
    fn default() -> Self {
        Self::new()
    }
}

impl BugReference {
    /// Creates a new rule with the default issue tracker URL.
    #[must_use]
    pub fn new() -> Self {
        Self {
            issue_url_base: "https://example.corp.example.com/issues/".to_string(),
        }
    }

    /// Sets the issue tracker URL prefix.
    #[must_use]
    pub fn issue_url_base(mut self, base: impl Into<String>) -> Self {
        self.issue_url_base = base.into();
        self
    }
}

impl LineRule for BugReference {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Schema files must reference issues by full URL"
    }

    fn applies_to(&self, role: FileRole) -> bool {
        role == FileRole::Schema
    }

    fn check_line(&self, ctx: &RuleContext<'_>, line: Line<'_>) -> Vec<Diagnostic> {
        let Some(id) = BARE_BUG_ID
            .captures(line.text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
        else {
            return Vec::new();
        };
        vec![Diagnostic::new(
            CODE,
            NAME,
            ctx.at(line.number),
            format!(
                "found bare bug ID {id}, please use full URL like {}{id}",
                self.issue_url_base
            ),
        )]
    }
}
