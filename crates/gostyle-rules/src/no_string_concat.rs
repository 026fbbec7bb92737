//! Rule against building strings by concatenating literals with `+`.

use gostyle_core::{Diagnostic, Line, LineRule, RuleContext};

/// Rule code for no-string-concat.
pub const CODE: &str = "GS102";

/// Rule name for no-string-concat.
pub const NAME: &str = "no-string-concat";

/// A string literal closed, concatenated, and another opened.
const PATTERN: &str = "\" + \"";

/// Flags lines that join string literals with `+`.
#[derive(Debug, Clone, Default)]
pub struct NoStringConcat;

impl NoStringConcat {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for NoStringConcat {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Prefer fmt.Sprintf or strings.Builder over '+' on string literals"
    }

    fn check_line(&self, ctx: &RuleContext<'_>, line: Line<'_>) -> Vec<Diagnostic> {
        if !line.text.contains(PATTERN) {
            return Vec::new();
        }
        vec![Diagnostic::new(
            CODE,
            NAME,
            ctx.at(line.number),
            "avoid piecing strings with '+', use fmt.Sprintf or strings.Builder",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::run_line_rule;

    #[test]
    fn test_detects_literal_concat() {
        let out = run_line_rule(
            &NoStringConcat::new(),
            "pkg/path_test.go",
            "\tp := \"/interfaces/\" + \"interface\"\n\tq := base + name\n",
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].location.line, 1);
    }

    #[test]
    fn test_ignores_variable_concat() {
        let out = run_line_rule(&NoStringConcat::new(), "pkg/a.go", "s := a + \"x\"\n");
        assert!(out.is_empty());
    }
}
