//! Rule matching `t.Log` and `t.Logf` to their arguments.
//!
//! # Detected Patterns
//!
//! In test files, on lines that are exactly one call:
//!
//! - `t.Log(a, b)`: several arguments, which should be a `t.Logf`
//! - `t.Logf("text")`: a format string with nothing to format, which should be a `t.Log`
//!
//! Commas inside string literals do not separate arguments.

use std::sync::LazyLock;

use gostyle_core::{Diagnostic, FileRole, Line, LineRule, RuleContext};
use regex::Regex;

/// Rule code for log-args.
pub const CODE: &str = "GS105";

/// Rule name for log-args.
pub const NAME: &str = "log-args";

#[allow(clippy::expect_used)]
static LOG_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^t\.Log\((.*)\)$").expect("valid regex"));

#[allow(clippy::expect_used)]
static LOGF_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^t\.Logf\((.*)\)$").expect("valid regex"));

/// Splits an argument list on commas outside double-quoted strings.
fn split_args(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in args.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                parts.push(args[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(args[start..].trim());
    parts
}

/// Flags `t.Log` with several arguments and `t.Logf` with none to format.
#[derive(Debug, Clone, Default)]
pub struct LogArgs;

impl LogArgs {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for LogArgs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "t.Log takes one argument; t.Logf needs arguments after the format"
    }

    fn applies_to(&self, role: FileRole) -> bool {
        role.is_test()
    }

    fn check_line(&self, ctx: &RuleContext<'_>, line: Line<'_>) -> Vec<Diagnostic> {
        let trimmed = line.text.trim();
        let mut diagnostics = Vec::new();

        if let Some(args) = LOG_CALL.captures(trimmed).and_then(|c| c.get(1)) {
            if split_args(args.as_str()).len() > 1 {
                diagnostics.push(Diagnostic::new(
                    CODE,
                    NAME,
                    ctx.at(line.number),
                    format!(
                        "t.Log() should not use multiple arguments: {trimmed}, instead use t.Logf()"
                    ),
                ));
            }
        }

        if let Some(args) = LOGF_CALL.captures(trimmed).and_then(|c| c.get(1)) {
            if split_args(args.as_str()).len() < 2 {
                diagnostics.push(Diagnostic::new(
                    CODE,
                    NAME,
                    ctx.at(line.number),
                    format!(
                        "t.Logf() must have arguments after format string: {trimmed}, instead use t.Log()"
                    ),
                ));
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{messages, run_line_rule};

    fn check(content: &str) -> Vec<Diagnostic> {
        run_line_rule(&LogArgs::new(), "feature/bgp_test.go", content)
    }

    #[test]
    fn test_log_with_multiple_args() {
        let out = check("\t\tt.Log(\"state:\", state)\n");
        assert_eq!(
            messages(&out),
            vec!["t.Log() should not use multiple arguments: t.Log(\"state:\", state), instead use t.Logf()"]
        );
    }

    #[test]
    fn test_logf_without_args() {
        let out = check("\tt.Logf(\"starting\")\n");
        assert_eq!(
            messages(&out),
            vec!["t.Logf() must have arguments after format string: t.Logf(\"starting\"), instead use t.Log()"]
        );
    }

    #[test]
    fn test_good_calls() {
        assert!(check("t.Log(\"a, b, c\")\nt.Logf(\"got %v\", got)\nt.Log()\n").is_empty());
    }

    #[test]
    fn test_escaped_quote_inside_literal() {
        assert!(check("t.Log(\"say \\\"hi, there\\\"\")\n").is_empty());
    }

    #[test]
    fn test_only_test_files() {
        let out = run_line_rule(&LogArgs::new(), "pkg/a.go", "t.Log(a, b)\n");
        assert!(out.is_empty());
    }

    #[test]
    fn test_split_args() {
        assert_eq!(split_args("\"x, y\", z"), vec!["\"x, y\"", "z"]);
        assert_eq!(split_args(""), vec![""]);
    }
}
