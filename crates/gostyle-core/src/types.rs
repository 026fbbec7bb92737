//! Core types for diagnostics and run results.

use miette::{NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Severity of a diagnostic.
///
/// Every rule reports at the same level; there is no warning/error split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A convention violation.
    #[default]
    Violation,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Violation => write!(f, "violation"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path as supplied by discovery.
    pub file: PathBuf,
    /// Line number (1-indexed). Zero for file-level diagnostics.
    pub line: usize,
}

impl Location {
    /// Creates a location pointing at a line.
    #[must_use]
    pub fn new(file: PathBuf, line: usize) -> Self {
        Self { file, line }
    }

    /// Creates a file-level location.
    #[must_use]
    pub fn file_level(file: PathBuf) -> Self {
        Self { file, line: 0 }
    }

    /// Returns true if this location does not name a line.
    #[must_use]
    pub fn is_file_level(&self) -> bool {
        self.line == 0
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_file_level() {
            write!(f, "{}", self.file.display())
        } else {
            write!(f, "{}:{}", self.file.display(), self.line)
        }
    }
}

/// A convention violation found during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule code (e.g., "GS001").
    pub code: String,
    /// Rule name (e.g., "exported-doc").
    pub rule: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Where the violation was found.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity: Severity::Violation,
            location,
            message: message.into(),
        }
    }

    /// Formats the diagnostic with its rule code, one line.
    #[must_use]
    pub fn format_compact(&self) -> String {
        format!(
            "{}: {} [{}] {}",
            self.location, self.severity, self.code, self.message
        )
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Rich rendering of a [`Diagnostic`] against its source text.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
pub struct DiagnosticReport {
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{rule}")]
    span: Option<SourceSpan>,
    rule: String,
    #[help]
    help: Option<String>,
}

impl DiagnosticReport {
    /// Builds a report for `diagnostic`, labelling its line within `source`.
    #[must_use]
    pub fn new(diagnostic: &Diagnostic, source: String) -> Self {
        let span = line_span(&source, diagnostic.location.line);
        let help = diagnostic
            .location
            .is_file_level()
            .then(|| "applies to the whole file".to_string());
        Self {
            message: format!("[{}] {}", diagnostic.code, diagnostic.message),
            src: NamedSource::new(diagnostic.location.file.display().to_string(), source),
            span,
            rule: diagnostic.rule.clone(),
            help,
        }
    }
}

/// Byte span of a 1-indexed line, without its terminator.
fn line_span(source: &str, line: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in source.split('\n').enumerate() {
        if i + 1 == line {
            let len = text.trim_end_matches('\r').len();
            return Some(SourceSpan::from((offset, len)));
        }
        offset += text.len() + 1;
    }
    None
}

/// Result of running the engine over a set of files.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// All diagnostics, in input file order and per-file emission order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of files analyzed.
    pub files_checked: usize,
}

impl RunReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one file's diagnostics.
    pub fn push_file(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics.extend(diagnostics);
        self.files_checked += 1;
    }

    /// Returns true when no diagnostics were produced.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Counts diagnostics per rule name.
    #[must_use]
    pub fn count_by_rule(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for d in &self.diagnostics {
            *counts.entry(d.rule.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Formats the report as plain text: a header plus one line per diagnostic.
    #[must_use]
    pub fn format_text(&self) -> String {
        use std::fmt::Write;

        if self.is_clean() {
            return "All validation checks passed ✅\n".to_string();
        }

        let mut report = String::from("Validation failed:\n");
        for d in &self.diagnostics {
            let _ = writeln!(report, " - {d}");
        }
        report
    }

    /// Adds diagnostics from another report.
    pub fn extend(&mut self, other: Self) {
        self.diagnostics.extend(other.diagnostics);
        self.files_checked += other.files_checked;
    }
}
