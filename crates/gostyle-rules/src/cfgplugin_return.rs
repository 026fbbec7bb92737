//! Rule requiring configuration plugins to return gNMI batches.
//!
//! Under the configuration-plugin directory, every function header line must
//! mention `gnmi.SetRequest` or `gnmi.Batch`, so plugins hand back a request
//! for the caller to apply instead of applying it themselves.

use gostyle_core::{Diagnostic, Line, LineRule, RuleContext};

/// Rule code for cfgplugin-return.
pub const CODE: &str = "GS103";

/// Rule name for cfgplugin-return.
pub const NAME: &str = "cfgplugin-return";

const ALLOWED_RETURNS: &[&str] = &["gnmi.SetRequest", "gnmi.Batch"];

/// Flags plugin functions that do not return a gNMI batch or set request.
#[derive(Debug, Clone)]
pub struct CfgpluginReturn {
    /// Path segment marking plugin packages.
    pub segment: String,
}

impl Default for CfgpluginReturn {
    fn default() -> Self {
        Self::new()
    }
}

impl CfgpluginReturn {
    /// Creates a new rule for the `cfgplugins` segment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segment: "cfgplugins".to_string(),
        }
    }

    /// Sets the path segment that marks plugin packages.
    #[must_use]
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = segment.into();
        self
    }
}

impl LineRule for CfgpluginReturn {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Config plugin functions must return gnmi.Batch or gnmi.SetRequest"
    }

    fn check_line(&self, ctx: &RuleContext<'_>, line: Line<'_>) -> Vec<Diagnostic> {
        let text = line.text;
        let is_header = text.contains("func") && text.contains('{');
        if !is_header
            || !ctx.path_contains(&self.segment)
            || ALLOWED_RETURNS.iter().any(|r| text.contains(r))
        {
            return Vec::new();
        }
        vec![Diagnostic::new(
            CODE,
            NAME,
            ctx.at(line.number),
            "cfgplugin function should return gnmi Batch/SetRequest",
        )]
    }
}
