//! The built-in rule registry.
//!
//! Every rule always runs. Registration order is reporting order within a
//! file, so new rules are appended.

use gostyle_core::{ConventionsConfig, RuleSet};
use tracing::debug;

use crate::{
    BugReference, CfgpluginReturn, ErrorStringStyle, ExportedDoc, LogArgs, MixedCaps,
    NoGetPrefix, NoSleep, NoStringConcat, RedundantTypeName, StructParams, TestFunctionCasing,
    TestHelper, TestStructure,
};

/// Returns every built-in rule with default conventions.
#[must_use]
pub fn default_rules() -> RuleSet {
    configured_rules(&ConventionsConfig::default())
}

/// Returns every built-in rule, parameterized by `conventions`.
#[must_use]
pub fn configured_rules(conventions: &ConventionsConfig) -> RuleSet {
    debug!(
        cfgplugin_segment = %conventions.cfgplugin_segment,
        issue_url_base = %conventions.issue_url_base,
        "Building rule registry"
    );
    RuleSet::new()
        .rule(ExportedDoc::new())
        .rule(NoGetPrefix::new())
        .rule(MixedCaps::new())
        .rule(RedundantTypeName::new())
        .rule(StructParams::new())
        .rule(TestStructure::new())
        .rule(TestHelper::new())
        .rule(TestFunctionCasing::new())
        .line_rule(NoSleep::new())
        .line_rule(NoStringConcat::new())
        .line_rule(CfgpluginReturn::new().segment(conventions.cfgplugin_segment.clone()))
        .line_rule(ErrorStringStyle::new())
        .line_rule(LogArgs::new())
        .line_rule(BugReference::new().issue_url_base(conventions.issue_url_base.clone()))
}
