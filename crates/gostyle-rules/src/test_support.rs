//! Helpers for running a single rule against a hand-built view.

use std::path::Path;

use gostyle_core::{Diagnostic, FileRole, FileStructure, LineRule, Rule, RuleContext, TextView};

/// Runs a structural rule the way the engine does, honoring `applies_to`.
pub(crate) fn run_rule(rule: &dyn Rule, role: FileRole, structure: &FileStructure) -> Vec<Diagnostic> {
    let path = match role {
        FileRole::Source => "pkg/conn.go",
        FileRole::Test => "pkg/conn_test.go",
        FileRole::Schema => "proto/conn.proto",
    };
    let text = TextView::new("");
    let ctx = RuleContext::new(Path::new(path), role, &text, Some(structure));
    if !rule.applies_to(role) {
        return Vec::new();
    }
    rule.check(&ctx, structure)
}

/// Runs a line rule over every line of `content`, with the role derived from `path`.
pub(crate) fn run_line_rule(rule: &dyn LineRule, path: &str, content: &str) -> Vec<Diagnostic> {
    let path = Path::new(path);
    let role = FileRole::from_path(path).expect("test path has a known suffix");
    let text = TextView::new(content);
    let ctx = RuleContext::new(path, role, &text, None);
    if !rule.applies_to(role) {
        return Vec::new();
    }
    text.lines()
        .flat_map(|line| rule.check_line(&ctx, line))
        .collect()
}

/// Messages of the diagnostics, in order.
pub(crate) fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}
