//! Rule flagging package-level variables whose name repeats their type.
//!
//! `var nameString string` says the type twice. Only variables declared with a
//! bare named type take part; qualified and composite types are skipped.

use gostyle_core::{Diagnostic, FileStructure, Rule, RuleContext, VarKind};

/// Rule code for redundant-type-name.
pub const CODE: &str = "GS004";

/// Rule name for redundant-type-name.
pub const NAME: &str = "redundant-type-name";

/// Flags `var` declarations whose name contains their type name.
#[derive(Debug, Clone, Default)]
pub struct RedundantTypeName;

impl RedundantTypeName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RedundantTypeName {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Variable names should not repeat their type"
    }

    fn check(&self, ctx: &RuleContext<'_>, structure: &FileStructure) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for var in structure.variables().filter(|v| v.kind == VarKind::Var) {
            let Some(type_name) = var.ty.as_ref().and_then(|t| t.simple_name()) else {
                continue;
            };
            if var
                .name
                .to_lowercase()
                .contains(&type_name.to_lowercase())
            {
                diagnostics.push(Diagnostic::new(
                    CODE,
                    NAME,
                    ctx.at(var.line),
                    format!("variable {} repeats its type {} in name", var.name, type_name),
                ));
            }
        }

        diagnostics
    }
}
