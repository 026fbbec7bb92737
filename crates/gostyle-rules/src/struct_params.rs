//! Rule preferring a single config struct over many parameters.
//!
//! # Detected Patterns
//!
//! Functions with more than one parameter group whose type is neither an
//! anonymous struct nor a pointer to one. Framework-context parameters
//! (`*x.T`, `*x.DUTDevice`) are not counted.
//!
//! # Good Patterns
//!
//! ```go
//! func configureBGP(t *testing.T, dut *ondatra.DUTDevice, cfg *struct{ AS uint32; Peers []string }) {}
//! ```

use gostyle_core::{Diagnostic, FileStructure, Rule, RuleContext};

/// Rule code for struct-params.
pub const CODE: &str = "GS005";

/// Rule name for struct-params.
pub const NAME: &str = "struct-params";

/// Flags functions with multiple non-struct parameter groups.
#[derive(Debug, Clone)]
pub struct StructParams {
    /// Most non-struct parameter groups allowed before flagging.
    pub max_plain_params: usize,
}

impl Default for StructParams {
    fn default() -> Self {
        Self::new()
    }
}

impl StructParams {
    /// Creates a new rule allowing one plain parameter group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_plain_params: 1,
        }
    }

    /// Sets the number of plain parameter groups allowed.
    #[must_use]
    pub fn max_plain_params(mut self, max: usize) -> Self {
        self.max_plain_params = max;
        self
    }
}

impl Rule for StructParams {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Functions with several parameters should take a single config struct"
    }

    fn check(&self, ctx: &RuleContext<'_>, structure: &FileStructure) -> Vec<Diagnostic> {
        structure
            .functions()
            .filter(|f| {
                let plain = f
                    .params
                    .iter()
                    .filter(|p| !p.is_framework_context() && !p.ty.is_struct_like())
                    .count();
                plain > self.max_plain_params
            })
            .map(|f| {
                Diagnostic::new(
                    CODE,
                    NAME,
                    ctx.at(f.line),
                    format!(
                        "function {} has multiple parameters, consider using a single config struct",
                        f.name
                    ),
                )
            })
            .collect()
    }
}
