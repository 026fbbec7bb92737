//! Rule enforcing the layout of test files.
//!
//! A test file must declare a `TestMain(m *testing.M)` hook and exactly one
//! `Test*` entry point, written table-driven: it builds a table of cases and
//! ranges over it.
//!
//! # Detected Patterns
//!
//! - No `TestMain` hook (file-level)
//! - No `Test*` function at all (file-level, nothing else is checked)
//! - More than one `Test*` function (file-level)
//! - The single entry point lacks a table value or a range loop
//!
//! # Good Patterns
//!
//! ```go
//! func TestMain(m *testing.M) { fptest.RunTests(m) }
//!
//! func TestBGP(t *testing.T) {
//!     cases := []struct{ name string }{{"v4"}, {"v6"}}
//!     for _, tc := range cases {
//!         t.Run(tc.name, func(t *testing.T) { ... })
//!     }
//! }
//! ```

use gostyle_core::{Diagnostic, FileRole, FileStructure, FunctionDecl, Rule, RuleContext};

/// Rule code for test-structure.
pub const CODE: &str = "GS006";

/// Rule name for test-structure.
pub const NAME: &str = "test-structure";

const TABLE_DRIVEN_REF: &str = "https://go.dev/wiki/TableDrivenTests";

/// Requires a `TestMain` hook and one table-driven entry point per test file.
#[derive(Debug, Clone, Default)]
pub struct TestStructure;

impl TestStructure {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TestStructure {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Test files need TestMain and a single table-driven test function"
    }

    fn applies_to(&self, role: FileRole) -> bool {
        role.is_test()
    }

    fn check(&self, ctx: &RuleContext<'_>, structure: &FileStructure) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let file_level = |message: String| Diagnostic::new(CODE, NAME, ctx.file_level(), message);

        // Declarations without a body are neither hooks nor entry points.
        let defined: Vec<&FunctionDecl> =
            structure.functions().filter(|f| f.body.is_some()).collect();

        if !defined.iter().any(|f| f.is_test_main_hook()) {
            diagnostics.push(file_level("missing TestMain function".to_string()));
        }

        let entries: Vec<&FunctionDecl> = defined
            .iter()
            .copied()
            .filter(|f| f.is_test_entry())
            .collect();

        match entries.as_slice() {
            [] => diagnostics.push(file_level("no test functions found".to_string())),
            [entry] => {
                let table_driven = entry.body.as_ref().is_some_and(|b| b.is_table_driven());
                if !table_driven {
                    diagnostics.push(file_level(format!(
                        "test function {} does not follow table-driven test pattern. \
                         Please follow table driven approach ref: {TABLE_DRIVEN_REF}",
                        entry.name
                    )));
                }
            }
            _ => diagnostics.push(file_level(format!(
                "multiple top-level test functions found; \
                 please follow table-driven approach ref: {TABLE_DRIVEN_REF}"
            ))),
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{messages, run_rule};
    use gostyle_core::{Declaration, FunctionBody, ParamDecl, TypeExpr};

    fn hook() -> FunctionDecl {
        FunctionDecl::new("TestMain", 3)
            .with_param(ParamDecl::new(
                "m",
                TypeExpr::pointer(TypeExpr::qualified("testing", "M")),
            ))
            .with_body(FunctionBody::new())
    }

    fn test_fn(name: &str, body: FunctionBody) -> FunctionDecl {
        FunctionDecl::new(name, 10)
            .with_param(ParamDecl::new(
                "t",
                TypeExpr::pointer(TypeExpr::qualified("testing", "T")),
            ))
            .with_body(body)
    }

    fn table_body() -> FunctionBody {
        FunctionBody::new().with_table_value().with_range_loop()
    }

    fn check(funcs: Vec<FunctionDecl>) -> Vec<Diagnostic> {
        let structure = FileStructure::new(funcs.into_iter().map(Declaration::Function).collect());
        run_rule(&TestStructure::new(), FileRole::Test, &structure)
    }

    #[test]
    fn test_well_formed_file() {
        let out = check(vec![hook(), test_fn("TestFoo", table_body())]);
        assert!(out.is_empty(), "{out:?}");
    }

    #[test]
    fn test_multiple_entries_without_hook() {
        let out = check(vec![
            test_fn("TestAlpha", FunctionBody::new()),
            test_fn("TestBeta", FunctionBody::new()),
        ]);
        assert_eq!(
            messages(&out),
            vec![
                "missing TestMain function",
                "multiple top-level test functions found; please follow table-driven approach ref: https://go.dev/wiki/TableDrivenTests",
            ]
        );
        assert!(out.iter().all(|d| d.location.is_file_level()));
    }

    #[test]
    fn test_no_test_functions() {
        let out = check(vec![hook(), FunctionDecl::new("helper", 20).with_body(FunctionBody::new())]);
        assert_eq!(messages(&out), vec!["no test functions found"]);
    }

    #[test]
    fn test_not_table_driven() {
        let out = check(vec![
            hook(),
            test_fn("TestFoo", FunctionBody::new().with_range_loop()),
        ]);
        assert_eq!(
            messages(&out),
            vec!["test function TestFoo does not follow table-driven test pattern. Please follow table driven approach ref: https://go.dev/wiki/TableDrivenTests"]
        );
    }

    #[test]
    fn test_wrong_test_main_signature() {
        let bad_hook = FunctionDecl::new("TestMain", 3)
            .with_param(ParamDecl::new(
                "t",
                TypeExpr::pointer(TypeExpr::qualified("testing", "T")),
            ))
            .with_body(FunctionBody::new());
        let out = check(vec![bad_hook, test_fn("TestFoo", table_body())]);
        assert_eq!(messages(&out), vec!["missing TestMain function"]);
    }

    #[test]
    fn test_bodiless_functions_ignored() {
        let out = check(vec![hook(), FunctionDecl::new("TestExternal", 5), test_fn("TestFoo", table_body())]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_source_files_skipped() {
        let structure = FileStructure::default();
        assert!(run_rule(&TestStructure::new(), FileRole::Source, &structure).is_empty());
    }
}
