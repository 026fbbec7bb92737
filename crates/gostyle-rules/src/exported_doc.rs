//! Rule requiring doc comments on exported functions.
//!
//! # Detected Patterns
//!
//! - Exported functions and methods with no doc comment
//! - Doc comments that do not end with a period
//!
//! `Test`-prefixed functions are exempt.
//!
//! # Good Patterns
//!
//! ```go
//! // Dial opens a connection to the device.
//! func Dial(addr string) (*Conn, error) { ... }
//! ```

use gostyle_core::{Diagnostic, FileStructure, Rule, RuleContext};

/// Rule code for exported-doc.
pub const CODE: &str = "GS001";

/// Rule name for exported-doc.
pub const NAME: &str = "exported-doc";

/// Requires a period-terminated doc comment on every exported function.
#[derive(Debug, Clone, Default)]
pub struct ExportedDoc;

impl ExportedDoc {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ExportedDoc {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Exported functions must have a doc comment ending with a period"
    }

    fn check(&self, ctx: &RuleContext<'_>, structure: &FileStructure) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for func in structure
            .functions()
            .filter(|f| f.is_exported() && !f.has_test_prefix())
        {
            let message = match func.doc.as_deref() {
                None => format!("exported function {} must have doc comment", func.name),
                Some(doc) if !doc.ends_with('.') => {
                    "function comment should end with '.'".to_string()
                }
                Some(_) => continue,
            };
            diagnostics.push(Diagnostic::new(CODE, NAME, ctx.at(func.line), message));
        }

        diagnostics
    }
}
