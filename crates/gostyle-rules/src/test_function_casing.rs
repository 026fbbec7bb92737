//! Rule requiring lowercase names for non-test functions in test files.

use gostyle_core::{Diagnostic, FileRole, FileStructure, Rule, RuleContext};

/// Rule code for test-function-casing.
pub const CODE: &str = "GS008";

/// Rule name for test-function-casing.
pub const NAME: &str = "test-function-casing";

/// Flags free functions in test files that are neither `Test*` nor lowercase.
#[derive(Debug, Clone, Default)]
pub struct TestFunctionCasing;

impl TestFunctionCasing {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TestFunctionCasing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Non-test functions in test files must start with a lowercase letter"
    }

    fn applies_to(&self, role: FileRole) -> bool {
        role.is_test()
    }

    fn check(&self, ctx: &RuleContext<'_>, structure: &FileStructure) -> Vec<Diagnostic> {
        structure
            .functions()
            .filter(|f| f.is_plain_free_function())
            .filter(|f| f.name.chars().next().is_some_and(|c| !c.is_lowercase()))
            .map(|f| {
                Diagnostic::new(
                    CODE,
                    NAME,
                    ctx.at(f.line),
                    format!("test function {} must start with lowercase letter", f.name),
                )
            })
            .collect()
    }
}
