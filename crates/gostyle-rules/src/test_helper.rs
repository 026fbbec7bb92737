//! Rule requiring test helpers to call `t.Helper()`.
//!
//! In test files, a free function that is not a `Test*` function and takes a
//! named `*testing.T` is a helper. Its body must call `Helper()` on that
//! parameter so failures are reported at the caller's line.

use gostyle_core::{Diagnostic, FileRole, FileStructure, Rule, RuleContext};

/// Rule code for test-helper.
pub const CODE: &str = "GS007";

/// Rule name for test-helper.
pub const NAME: &str = "test-helper";

/// Flags test helpers that never call `t.Helper()`.
#[derive(Debug, Clone, Default)]
pub struct TestHelper;

impl TestHelper {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TestHelper {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Test helpers taking *testing.T must call t.Helper()"
    }

    fn applies_to(&self, role: FileRole) -> bool {
        role.is_test()
    }

    fn check(&self, ctx: &RuleContext<'_>, structure: &FileStructure) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for func in structure.functions().filter(|f| f.is_plain_free_function()) {
            let Some(t_name) = func
                .params
                .iter()
                .filter(|p| p.is_testing_t())
                .find_map(|p| p.name.as_deref())
            else {
                continue;
            };
            // `_` cannot be called through.
            if t_name == "_" {
                continue;
            }

            let calls_helper = func
                .body
                .as_ref()
                .is_some_and(|b| b.calls(t_name, "Helper"));
            if !calls_helper {
                diagnostics.push(Diagnostic::new(
                    CODE,
                    NAME,
                    ctx.at(func.line),
                    format!(
                        "test helper function {} should call {t_name}.Helper()",
                        func.name
                    ),
                ));
            }
        }

        diagnostics
    }
}
