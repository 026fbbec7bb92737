//! # gostyle-core
//!
//! Core framework for Go convention linting.
//!
//! A file is seen through two views: the structural view (declarations
//! produced by a [`StructuralParser`]) and the textual view (numbered raw
//! lines). Rules pick one view each. This crate provides:
//!
//! - [`Rule`] and [`LineRule`] traits for structural and line-oriented rules
//! - [`RuleSet`], the ordered rule registry
//! - [`Engine`] for running a rule set over many files in parallel
//! - [`Diagnostic`] and [`RunReport`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use gostyle_core::{Engine, FileRole, SourceInput};
//!
//! let engine = Engine::builder()
//!     .parser(GoParser::new())
//!     .rules(gostyle_rules::default_rules())
//!     .build()?;
//!
//! let report = engine.analyze(&[SourceInput::new("main.go", FileRole::Source)])?;
//! print!("{}", report.format_text());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod engine;
mod rule;
mod source;
mod structure;
mod text;
mod types;

pub use config::{AnalyzerConfig, Config, ConfigError, ConventionsConfig};
pub use context::RuleContext;
pub use engine::{Engine, EngineBuilder, EngineError, PARSE_FAILURE_CODE, PARSE_FAILURE_NAME};
pub use rule::{LineRule, LineRuleBox, Rule, RuleBox, RuleInfo, RuleSet, View};
pub use source::{FileRole, SourceFile, SourceInput};
pub use structure::{
    is_exported, Declaration, FileStructure, FunctionBody, FunctionDecl, ParamDecl, ParseFailure,
    QualifiedCall, StructuralParser, TypeDecl, TypeExpr, VarKind, VariableDecl,
};
pub use text::{Line, TextView};
pub use types::{Diagnostic, DiagnosticReport, Location, RunReport, Severity};
