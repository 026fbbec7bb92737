//! Rule engine orchestrating per-file analysis.

use crate::context::RuleContext;
use crate::rule::{LineRuleBox, RuleSet};
use crate::source::{SourceFile, SourceInput};
use crate::structure::{ParseFailure, StructuralParser};
use crate::text::TextView;
use crate::types::{Diagnostic, Location, RunReport};

use rayon::prelude::*;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Rule code for parse failures.
pub const PARSE_FAILURE_CODE: &str = "GS000";

/// Rule name for parse failures.
pub const PARSE_FAILURE_NAME: &str = "parse-failure";

/// Errors that can abort a run. Rule violations and parse failures never do.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The builder was not given a structural parser.
    #[error("No structural parser configured")]
    MissingParser,

    /// The bounded worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Builder for configuring an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    parser: Option<Box<dyn StructuralParser>>,
    rules: RuleSet,
    parallelism: Option<usize>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the structural parser.
    #[must_use]
    pub fn parser<P: StructuralParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Sets the rule registry.
    #[must_use]
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Bounds the number of files analyzed concurrently.
    ///
    /// `None` uses rayon's global pool.
    #[must_use]
    pub fn parallelism(mut self, threads: Option<usize>) -> Self {
        self.parallelism = threads;
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if no parser was set or the worker pool cannot be built.
    pub fn build(self) -> Result<Engine, EngineError> {
        let parser = self.parser.ok_or(EngineError::MissingParser)?;

        let pool = match self.parallelism {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("gostyle-worker-{i}"))
                    .build()?,
            ),
            None => None,
        };

        Ok(Engine {
            parser,
            rules: self.rules,
            pool,
        })
    }
}

/// Applies every registered rule to each file and aggregates the results.
///
/// Use [`Engine::builder()`] to construct an instance.
pub struct Engine {
    parser: Box<dyn StructuralParser>,
    rules: RuleSet,
    pool: Option<rayon::ThreadPool>,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the rule registry.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Reads and analyzes every input, in parallel.
    ///
    /// Diagnostics keep the input order; within a file, structural rules come
    /// first in registry order, then line rules line by line.
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be read.
    pub fn analyze(&self, inputs: &[SourceInput]) -> Result<RunReport, EngineError> {
        info!(
            "Analyzing {} files with {} rules ({} parser)",
            inputs.len(),
            self.rule_count(),
            self.parser.language_id()
        );

        let per_file = match &self.pool {
            Some(pool) => pool.install(|| self.read_and_check_all(inputs)),
            None => self.read_and_check_all(inputs),
        }?;

        let mut report = RunReport::new();
        for diagnostics in per_file {
            report.push_file(diagnostics);
        }

        info!(
            "Analysis complete: {} diagnostics in {} files",
            report.diagnostics.len(),
            report.files_checked
        );

        Ok(report)
    }

    /// Analyzes files that are already in memory.
    #[must_use]
    pub fn analyze_sources(&self, files: &[SourceFile]) -> RunReport {
        let per_file: Vec<Vec<Diagnostic>> = match &self.pool {
            Some(pool) => pool.install(|| files.par_iter().map(|f| self.check_file(f)).collect()),
            None => files.par_iter().map(|f| self.check_file(f)).collect(),
        };

        let mut report = RunReport::new();
        for diagnostics in per_file {
            report.push_file(diagnostics);
        }
        report
    }

    fn read_and_check_all(&self, inputs: &[SourceInput]) -> Result<Vec<Vec<Diagnostic>>, EngineError> {
        inputs
            .par_iter()
            .map(|input| {
                let file = SourceFile::read(input).map_err(|source| EngineError::Io {
                    path: input.path.clone(),
                    source,
                })?;
                Ok(self.check_file(&file))
            })
            .collect()
    }

    /// Analyzes a single file.
    ///
    /// A Go file that fails to parse yields one parse-failure diagnostic and
    /// skips structural rules; line rules still run over its text.
    #[must_use]
    pub fn check_file(&self, file: &SourceFile) -> Vec<Diagnostic> {
        debug!("Analyzing: {} ({})", file.path.display(), file.role);

        let text = TextView::new(&file.content);
        let mut diagnostics = Vec::new();

        let structure = if file.role.is_go() {
            let parsed = if file.invalid_utf8 {
                Err(ParseFailure::new("invalid UTF-8 encoding"))
            } else {
                self.parser.parse(&file.content)
            };
            match parsed {
                Ok(structure) => Some(structure),
                Err(failure) => {
                    warn!(
                        "Failed to parse {} (line {:?}): {}",
                        file.path.display(),
                        failure.line,
                        failure.reason
                    );
                    diagnostics.push(Diagnostic::new(
                        PARSE_FAILURE_CODE,
                        PARSE_FAILURE_NAME,
                        Location::file_level(file.path.clone()),
                        "failed parsing",
                    ));
                    None
                }
            }
        } else {
            None
        };

        let ctx = RuleContext::new(&file.path, file.role, &text, structure.as_ref());

        if let Some(structure) = &structure {
            for rule in self.rules.rules() {
                if rule.applies_to(file.role) {
                    diagnostics.extend(rule.check(&ctx, structure));
                }
            }
        }

        let line_rules: Vec<&LineRuleBox> = self
            .rules
            .line_rules()
            .iter()
            .filter(|r| r.applies_to(file.role))
            .collect();

        if !line_rules.is_empty() {
            for line in text.lines() {
                for rule in &line_rules {
                    diagnostics.extend(rule.check_line(&ctx, line));
                }
            }
        }

        diagnostics
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("parser", &self.parser.language_id())
            .field("rules", &self.rules)
            .field("bounded", &self.pool.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{LineRule, Rule};
    use crate::source::FileRole;
    use crate::structure::{Declaration, FileStructure, FunctionDecl, ParseFailure};
    use crate::text::Line;

    /// Parses one `func NAME` per line; anything containing `!!` is malformed.
    struct FakeParser;

    impl StructuralParser for FakeParser {
        fn language_id(&self) -> &'static str {
            "fake"
        }

        fn parse(&self, source: &str) -> Result<FileStructure, ParseFailure> {
            if source.contains("!!") {
                return Err(ParseFailure::new("bang").at_line(1));
            }
            let declarations = source
                .lines()
                .enumerate()
                .filter_map(|(i, l)| {
                    l.strip_prefix("func ")
                        .map(|name| Declaration::Function(FunctionDecl::new(name.trim(), i + 1)))
                })
                .collect();
            Ok(FileStructure::new(declarations))
        }
    }

    struct EveryFunction;

    impl Rule for EveryFunction {
        fn name(&self) -> &'static str {
            "every-function"
        }
        fn code(&self) -> &'static str {
            "T001"
        }
        fn check(&self, ctx: &RuleContext<'_>, structure: &FileStructure) -> Vec<Diagnostic> {
            structure
                .functions()
                .map(|f| Diagnostic::new(self.code(), self.name(), ctx.at(f.line), &f.name))
                .collect()
        }
    }

    struct Sleepy;

    impl LineRule for Sleepy {
        fn name(&self) -> &'static str {
            "sleepy"
        }
        fn code(&self) -> &'static str {
            "T101"
        }
        fn check_line(&self, ctx: &RuleContext<'_>, line: Line<'_>) -> Vec<Diagnostic> {
            if line.text.contains("sleep") {
                vec![Diagnostic::new(self.code(), self.name(), ctx.at(line.number), "sleep")]
            } else {
                Vec::new()
            }
        }
    }

    fn engine() -> Engine {
        Engine::builder()
            .parser(FakeParser)
            .rules(RuleSet::new().rule(EveryFunction).line_rule(Sleepy))
            .build()
            .expect("engine should build")
    }

    #[test]
    fn builder_requires_parser() {
        assert!(matches!(
            Engine::builder().build(),
            Err(EngineError::MissingParser)
        ));
    }

    #[test]
    fn runs_structural_then_line_rules() {
        let file = SourceFile::new("a.go", FileRole::Source, "func alpha\nsleep\n");
        let out = engine().check_file(&file);
        let codes: Vec<_> = out.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec!["T001", "T101"]);
        assert_eq!(out[1].location.line, 2);
    }

    #[test]
    fn parse_failure_isolated_to_text_rules() {
        let file = SourceFile::new("bad.go", FileRole::Source, "func alpha !!\nsleep\n");
        let out = engine().check_file(&file);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].code, PARSE_FAILURE_CODE);
        assert!(out[0].location.is_file_level());
        assert_eq!(out[0].message, "failed parsing");
        assert_eq!(out[1].code, "T101");
    }

    #[test]
    fn schema_files_skip_parsing() {
        let file = SourceFile::new("api.proto", FileRole::Schema, "!! sleep\n");
        let out = engine().check_file(&file);
        // Line rule defaults to Go roles only and no parse is attempted.
        assert!(out.is_empty());
    }

    #[test]
    fn analyze_preserves_input_order_and_is_deterministic() {
        let files: Vec<_> = (0..32)
            .map(|i| SourceFile::new(format!("f{i:02}.go"), FileRole::Source, format!("func f{i}\n")))
            .collect();
        let engine = Engine::builder()
            .parser(FakeParser)
            .rules(RuleSet::new().rule(EveryFunction))
            .parallelism(Some(4))
            .build()
            .unwrap();
        let first = engine.analyze_sources(&files);
        let second = engine.analyze_sources(&files);
        assert_eq!(first.diagnostics, second.diagnostics);
        assert_eq!(first.files_checked, 32);
        let names: Vec<_> = first.diagnostics.iter().map(|d| d.message.clone()).collect();
        let expected: Vec<_> = (0..32).map(|i| format!("f{i}")).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn analyze_reads_files_and_reports_missing_ones() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ok.go");
        std::fs::write(&path, "func ok\n").unwrap();

        let report = engine()
            .analyze(&[SourceInput::new(&path, FileRole::Source)])
            .unwrap();
        assert_eq!(report.files_checked, 1);
        assert_eq!(report.diagnostics.len(), 1);

        let missing = SourceInput::new(dir.path().join("gone.go"), FileRole::Source);
        let err = engine().analyze(&[missing]).unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }

    #[test]
    fn invalid_utf8_is_a_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let latin1 = dir.path().join("latin1.go");
        std::fs::write(&latin1, b"func caf\xE9\nsleep\n").unwrap();
        let ok = dir.path().join("ok.go");
        std::fs::write(&ok, "func ok\n").unwrap();

        let report = engine()
            .analyze(&[
                SourceInput::new(&latin1, FileRole::Source),
                SourceInput::new(&ok, FileRole::Source),
            ])
            .unwrap();
        let codes: Vec<_> = report.diagnostics.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec![PARSE_FAILURE_CODE, "T101", "T001"]);
        assert_eq!(report.files_checked, 2);
    }
}
