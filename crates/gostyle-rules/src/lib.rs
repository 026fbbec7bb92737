//! # gostyle-rules
//!
//! Built-in Go convention rules for gostyle.
//!
//! ## Available Rules
//!
//! | Code | Name | View | Description |
//! |------|------|------|-------------|
//! | GS001 | `exported-doc` | structure | Exported functions need a doc comment ending with `.` |
//! | GS002 | `no-get-prefix` | structure | No `Get` prefix on function names |
//! | GS003 | `mixed-caps` | structure | `MixedCaps` names, no `_`, no `Id`/`Url`/`Http` |
//! | GS004 | `redundant-type-name` | structure | Variable names must not repeat their type |
//! | GS005 | `struct-params` | structure | Several plain parameters should be a config struct |
//! | GS006 | `test-structure` | structure | `TestMain` plus one table-driven test per file |
//! | GS007 | `test-helper` | structure | Helpers taking `*testing.T` call `t.Helper()` |
//! | GS008 | `test-function-casing` | structure | Non-test functions in test files are lowercase |
//! | GS101 | `no-sleep` | text | No `time.Sleep` |
//! | GS102 | `no-string-concat` | text | No `"a" + "b"` |
//! | GS103 | `cfgplugin-return` | text | Config plugins return `gnmi.Batch`/`gnmi.SetRequest` |
//! | GS104 | `error-string-style` | text | Error strings lowercase, no trailing `.` |
//! | GS105 | `log-args` | text | `t.Log` vs `t.Logf` argument shape |
//! | GS106 | `bug-reference` | text | Full issue URLs in `.proto` files |
//!
//! `GS000 parse-failure` is reported by the engine itself.
//!
//! ## Usage
//!
//! ```ignore
//! use gostyle_core::Engine;
//! use gostyle_go::GoParser;
//!
//! let engine = Engine::builder()
//!     .parser(GoParser::new())
//!     .rules(gostyle_rules::default_rules())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bug_reference;
mod cfgplugin_return;
mod error_strings;
mod exported_doc;
mod log_args;
mod mixed_caps;
mod no_get_prefix;
mod no_sleep;
mod no_string_concat;
mod redundant_type_name;
mod registry;
mod struct_params;
mod test_function_casing;
mod test_helper;
mod test_structure;

#[cfg(test)]
mod test_support;

pub use bug_reference::BugReference;
pub use cfgplugin_return::CfgpluginReturn;
pub use error_strings::ErrorStringStyle;
pub use exported_doc::ExportedDoc;
pub use log_args::LogArgs;
pub use mixed_caps::MixedCaps;
pub use no_get_prefix::NoGetPrefix;
pub use no_sleep::NoSleep;
pub use no_string_concat::NoStringConcat;
pub use redundant_type_name::RedundantTypeName;
pub use registry::{configured_rules, default_rules};
pub use struct_params::StructParams;
pub use test_function_casing::TestFunctionCasing;
pub use test_helper::TestHelper;
pub use test_structure::TestStructure;

/// Re-export core types for convenience.
pub use gostyle_core::{Diagnostic, LineRule, Rule, RuleSet};
