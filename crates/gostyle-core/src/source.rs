//! Source files and their roles.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Role of a file within a run, derived from its name by discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    /// Go source file (`*.go`).
    Source,
    /// Go test file (`*_test.go`).
    Test,
    /// Interface/schema definition file (`*.proto`).
    Schema,
}

impl FileRole {
    /// Derives the role from a file name suffix, or `None` if the file is not linted.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.ends_with("_test.go") {
            Some(Self::Test)
        } else if name.ends_with(".go") {
            Some(Self::Source)
        } else if name.ends_with(".proto") {
            Some(Self::Schema)
        } else {
            None
        }
    }

    /// Returns true for Go files (source or test).
    #[must_use]
    pub fn is_go(self) -> bool {
        matches!(self, Self::Source | Self::Test)
    }

    /// Returns true for Go test files.
    #[must_use]
    pub fn is_test(self) -> bool {
        self == Self::Test
    }
}

impl std::fmt::Display for FileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Test => write!(f, "test"),
            Self::Schema => write!(f, "schema"),
        }
    }
}

/// A located file handed to the engine by discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    /// Path to the file.
    pub path: PathBuf,
    /// Role of the file.
    pub role: FileRole,
}

impl SourceInput {
    /// Creates a new input.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, role: FileRole) -> Self {
        Self {
            path: path.into(),
            role,
        }
    }
}

/// A file's identity, role and raw text.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path to the file.
    pub path: PathBuf,
    /// Role of the file.
    pub role: FileRole,
    /// Raw file contents. Invalid UTF-8 is replaced with U+FFFD.
    pub content: String,
    /// True when the bytes on disk were not valid UTF-8.
    pub invalid_utf8: bool,
}

impl SourceFile {
    /// Creates a source file from in-memory content.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, role: FileRole, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            role,
            content: content.into(),
            invalid_utf8: false,
        }
    }

    /// Reads the file named by `input`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be read. Undecodable bytes
    /// are not an error; they are replaced and flagged on the result.
    pub fn read(input: &SourceInput) -> std::io::Result<Self> {
        let bytes = std::fs::read(&input.path)?;
        let (content, invalid_utf8) = match String::from_utf8(bytes) {
            Ok(content) => (content, false),
            Err(err) => (String::from_utf8_lossy(err.as_bytes()).into_owned(), true),
        };
        Ok(Self {
            path: input.path.clone(),
            role: input.role,
            content,
            invalid_utf8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_from_suffix() {
        assert_eq!(
            FileRole::from_path(Path::new("a/b/foo_test.go")),
            Some(FileRole::Test)
        );
        assert_eq!(
            FileRole::from_path(Path::new("a/b/foo.go")),
            Some(FileRole::Source)
        );
        assert_eq!(
            FileRole::from_path(Path::new("api/v1/service.proto")),
            Some(FileRole::Schema)
        );
        assert_eq!(FileRole::from_path(Path::new("README.md")), None);
        assert_eq!(FileRole::from_path(Path::new("go.mod")), None);
    }

    #[test]
    fn go_roles() {
        assert!(FileRole::Source.is_go());
        assert!(FileRole::Test.is_go());
        assert!(!FileRole::Schema.is_go());
        assert!(FileRole::Test.is_test());
        assert!(!FileRole::Source.is_test());
    }

    #[test]
    fn read_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.go");
        std::fs::write(&path, b"// caf\xE9\npackage x\n").unwrap();

        let file = SourceFile::read(&SourceInput::new(&path, FileRole::Source)).unwrap();
        assert!(file.invalid_utf8);
        assert_eq!(file.content, "// caf\u{FFFD}\npackage x\n");

        std::fs::write(&path, "package x\n").unwrap();
        let file = SourceFile::read(&SourceInput::new(&path, FileRole::Source)).unwrap();
        assert!(!file.invalid_utf8);
    }

    #[test]
    fn read_missing_file_fails() {
        let input = SourceInput::new("/definitely/not/here.go", FileRole::Source);
        assert!(SourceFile::read(&input).is_err());
    }
}
