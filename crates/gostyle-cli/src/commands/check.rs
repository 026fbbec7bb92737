//! Check command implementation.

use anyhow::{Context, Result};
use gostyle_core::{Engine, RunReport};
use gostyle_go::GoParser;
use gostyle_rules::configured_rules;
use std::path::Path;

use crate::{config_resolver, discovery, OutputFormat};

/// Runs the check command and exits non-zero when anything was reported.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let report = execute(path, exclude, explicit_config)?;

    super::output::print(&report, format)?;

    if !report.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}

/// Discovers, parses and checks everything under `path`.
fn execute(path: &Path, exclude: Vec<String>, explicit_config: Option<&Path>) -> Result<RunReport> {
    let config = config_resolver::resolve(path, explicit_config).load()?;

    let mut patterns = config.analyzer.exclude.clone();
    patterns.extend(exclude);

    let inputs = discovery::discover(path, &patterns, config.analyzer.respect_gitignore)?;

    let engine = Engine::builder()
        .parser(GoParser::new())
        .rules(configured_rules(&config.conventions))
        .parallelism(config.analyzer.parallelism)
        .build()
        .context("Failed to build engine")?;

    tracing::info!(
        "Checking {} file(s) in {} with {} rules",
        inputs.len(),
        path.display(),
        engine.rule_count()
    );

    let report = engine.analyze(&inputs).context("Analysis failed")?;

    for (rule, count) in report.count_by_rule() {
        tracing::debug!(rule, count, "diagnostics by rule");
    }
    Ok(report)
}
