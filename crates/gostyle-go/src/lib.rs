//! # gostyle-go
//!
//! Tree-sitter based structural view of Go source files.
//!
//! [`GoParser`] implements [`gostyle_core::StructuralParser`]. It turns a Go
//! file into a [`gostyle_core::FileStructure`] holding the top-level
//! functions, methods, types, variables and constants. For each function it
//! also records the doc comment, the parameters and a few body facts
//! (qualified calls, test-table values, range loops).
//!
//! A file with any syntax error, or without a package clause, yields a
//! [`gostyle_core::ParseFailure`] instead of a partial structure.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod body;
mod comments;
pub mod parser;
mod types;

pub use parser::GoParser;
