//! Context types for rule execution.

use std::path::Path;

use crate::source::FileRole;
use crate::structure::FileStructure;
use crate::text::TextView;
use crate::types::Location;

/// Read-only, per-file bundle handed to every rule.
#[derive(Debug, Clone)]
pub struct RuleContext<'a> {
    /// Path of the file being analyzed.
    pub path: &'a Path,
    /// Role of the file.
    pub role: FileRole,
    /// Raw lines of the file.
    pub text: &'a TextView<'a>,
    /// Declarations, absent when the file did not parse or is not Go.
    pub structure: Option<&'a FileStructure>,
}

impl<'a> RuleContext<'a> {
    /// Creates a new rule context.
    #[must_use]
    pub fn new(
        path: &'a Path,
        role: FileRole,
        text: &'a TextView<'a>,
        structure: Option<&'a FileStructure>,
    ) -> Self {
        Self {
            path,
            role,
            text,
            structure,
        }
    }

    /// Location of a line in this file.
    #[must_use]
    pub fn at(&self, line: usize) -> Location {
        Location::new(self.path.to_path_buf(), line)
    }

    /// File-level location in this file.
    #[must_use]
    pub fn file_level(&self) -> Location {
        Location::file_level(self.path.to_path_buf())
    }

    /// Whether any path component contains `segment`.
    #[must_use]
    pub fn path_contains(&self, segment: &str) -> bool {
        self.path.to_string_lossy().contains(segment)
    }
}
