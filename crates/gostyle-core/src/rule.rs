//! Rule traits for defining lint rules.
//!
//! A rule reads exactly one view of a file:
//!
//! - [`Rule`] receives the structural view (declarations) of a file that parsed.
//! - [`LineRule`] receives one raw line at a time and runs whether or not the
//!   file parsed.
//!
//! Rules must not keep mutable state; the engine may run them on many files
//! concurrently and in any order.

use crate::context::RuleContext;
use crate::source::FileRole;
use crate::structure::FileStructure;
use crate::text::Line;
use crate::types::Diagnostic;

/// A per-file rule over the structural view.
///
/// # Example
///
/// ```ignore
/// use gostyle_core::{Diagnostic, FileStructure, Rule, RuleContext};
///
/// pub struct NoInitFunctions;
///
/// impl Rule for NoInitFunctions {
///     fn name(&self) -> &'static str { "no-init" }
///     fn code(&self) -> &'static str { "GS900" }
///
///     fn check(&self, ctx: &RuleContext<'_>, structure: &FileStructure) -> Vec<Diagnostic> {
///         structure
///             .functions()
///             .filter(|f| f.name == "init")
///             .map(|f| Diagnostic::new(self.code(), self.name(), ctx.at(f.line), "avoid init"))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "exported-doc").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "GS001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Whether the rule runs on files of this role. Defaults to all Go files.
    fn applies_to(&self, role: FileRole) -> bool {
        role.is_go()
    }

    /// Checks a parsed file and returns any diagnostics found.
    fn check(&self, ctx: &RuleContext<'_>, structure: &FileStructure) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// A per-line rule over the textual view.
pub trait LineRule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "GS101").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Whether the rule runs on files of this role. Defaults to all Go files.
    fn applies_to(&self, role: FileRole) -> bool {
        role.is_go()
    }

    /// Checks a single line and returns any diagnostics found.
    fn check_line(&self, ctx: &RuleContext<'_>, line: Line<'_>) -> Vec<Diagnostic>;
}

/// Type alias for boxed `LineRule` trait objects.
pub type LineRuleBox = Box<dyn LineRule>;

/// Which view a rule reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Declarations of a parsed file.
    Structure,
    /// Raw lines.
    Text,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Catalog entry describing a registered rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInfo {
    /// Rule code.
    pub code: &'static str,
    /// Rule name.
    pub name: &'static str,
    /// Description.
    pub description: &'static str,
    /// View the rule reads.
    pub view: View,
}

/// Ordered registry of rules. Extending the rule set means appending here.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<RuleBox>,
    line_rules: Vec<LineRuleBox>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a structural rule.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends a line rule.
    #[must_use]
    pub fn line_rule<R: LineRule + 'static>(mut self, rule: R) -> Self {
        self.line_rules.push(Box::new(rule));
        self
    }

    /// Structural rules, in registration order.
    #[must_use]
    pub fn rules(&self) -> &[RuleBox] {
        &self.rules
    }

    /// Line rules, in registration order.
    #[must_use]
    pub fn line_rules(&self) -> &[LineRuleBox] {
        &self.line_rules
    }

    /// Total number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len() + self.line_rules.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Describes every registered rule, structural rules first.
    #[must_use]
    pub fn catalog(&self) -> Vec<RuleInfo> {
        let structural = self.rules.iter().map(|r| RuleInfo {
            code: r.code(),
            name: r.name(),
            description: r.description(),
            view: View::Structure,
        });
        let textual = self.line_rules.iter().map(|r| RuleInfo {
            code: r.code(),
            name: r.name(),
            description: r.description(),
            view: View::Text,
        });
        structural.chain(textual).collect()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field(
                "line_rules",
                &self.line_rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
