//! Rule enforcing `MixedCaps` naming.
//!
//! # Detected Patterns
//!
//! For top-level functions, types, variables and constants:
//!
//! - Names containing `_`
//! - Exported names not matching `[A-Z][A-Za-z0-9]*`
//! - Unexported function names not matching `[a-z][A-Za-z0-9]*`
//! - Names containing `Id`, `Url` or `Http` anywhere
//!
//! The acronym check is a plain substring match, so `CandidIdea` is flagged too.

use std::sync::LazyLock;

use gostyle_core::{is_exported, Declaration, Diagnostic, FileStructure, Rule, RuleContext};
use regex::Regex;

/// Rule code for mixed-caps.
pub const CODE: &str = "GS003";

/// Rule name for mixed-caps.
pub const NAME: &str = "mixed-caps";

const BAD_ACRONYMS: &[&str] = &["Id", "Url", "Http"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameKind {
    Function,
    Type,
    Variable,
}

impl NameKind {
    fn label(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Type => "type",
            Self::Variable => "variable",
        }
    }
}

/// Flags names that are not `MixedCaps`.
#[derive(Debug, Clone, Default)]
pub struct MixedCaps;

impl MixedCaps {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn check_name(kind: NameKind, name: &str) -> Vec<String> {
        let mut problems = Vec::new();
        if name == "_" {
            return problems;
        }
        let label = kind.label();

        if name.contains('_') {
            problems.push(format!("{label} name {name:?} should not use snake_case"));
        }

        if is_exported(name) {
            if !is_mixed_caps(name, true) {
                problems.push(format!("exported {label} name {name:?} should use MixedCaps"));
            }
        } else if kind == NameKind::Function && !is_mixed_caps(name, false) {
            problems.push(format!("unexported function name {name:?} should use mixedCaps"));
        }

        if BAD_ACRONYMS.iter().any(|a| name.contains(a)) {
            problems.push(format!(
                "{label} name {name:?} has mis-cased acronym (use ID/URL/HTTP)"
            ));
        }

        problems
    }
}

/// `[A-Z][A-Za-z0-9]*` when `upper`, `[a-z][A-Za-z0-9]*` otherwise.
#[allow(clippy::expect_used)]
fn is_mixed_caps(name: &str, upper: bool) -> bool {
    static EXPORTED: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("valid regex"));
    static UNEXPORTED: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[a-z][A-Za-z0-9]*$").expect("valid regex"));

    if upper {
        EXPORTED.is_match(name)
    } else {
        UNEXPORTED.is_match(name)
    }
}

impl Rule for MixedCaps {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Names must use MixedCaps without underscores or mis-cased acronyms"
    }

    fn check(&self, ctx: &RuleContext<'_>, structure: &FileStructure) -> Vec<Diagnostic> {
        let names = structure.declarations.iter().map(|decl| {
            let kind = match decl {
                Declaration::Function(_) => NameKind::Function,
                Declaration::Type(_) => NameKind::Type,
                Declaration::Variable(_) => NameKind::Variable,
            };
            (kind, decl.name(), decl.line())
        });

        names
            .flat_map(|(kind, name, line)| {
                Self::check_name(kind, name)
                    .into_iter()
                    .map(move |message| Diagnostic::new(CODE, NAME, ctx.at(line), message))
            })
            .collect()
    }
}
