//! Rule banning `time.Sleep`.
//!
//! Tests against devices should wait on telemetry with `gnmi.Watch` instead
//! of sleeping for a fixed time.

use gostyle_core::{Diagnostic, Line, LineRule, RuleContext};

/// Rule code for no-sleep.
pub const CODE: &str = "GS101";

/// Rule name for no-sleep.
pub const NAME: &str = "no-sleep";

const PATTERN: &str = "time.Sleep(";

/// Flags lines calling `time.Sleep`.
#[derive(Debug, Clone, Default)]
pub struct NoSleep;

impl NoSleep {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for NoSleep {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids time.Sleep in favor of gnmi.Watch"
    }

    fn check_line(&self, ctx: &RuleContext<'_>, line: Line<'_>) -> Vec<Diagnostic> {
        if !line.text.contains(PATTERN) {
            return Vec::new();
        }
        vec![Diagnostic::new(
            CODE,
            NAME,
            ctx.at(line.number),
            "avoid time.Sleep, use gnmi.Watch",
        )]
    }
}
