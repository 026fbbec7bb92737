//! Rule forbidding the `Get` prefix on function names.
//!
//! Go getters are named after the field: `Owner()`, not `GetOwner()`.

use gostyle_core::{Diagnostic, FileStructure, Rule, RuleContext};

/// Rule code for no-get-prefix.
pub const CODE: &str = "GS002";

/// Rule name for no-get-prefix.
pub const NAME: &str = "no-get-prefix";

/// Flags functions whose name starts with `Get`.
#[derive(Debug, Clone, Default)]
pub struct NoGetPrefix;

impl NoGetPrefix {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoGetPrefix {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Function names should not use the Get prefix"
    }

    fn check(&self, ctx: &RuleContext<'_>, structure: &FileStructure) -> Vec<Diagnostic> {
        structure
            .functions()
            .filter(|f| f.name.starts_with("Get"))
            .map(|f| {
                Diagnostic::new(
                    CODE,
                    NAME,
                    ctx.at(f.line),
                    format!("function {} should not use Get prefix", f.name),
                )
            })
            .collect()
    }
}
