//! Error types for guidance loading and validation

use std::path::PathBuf;
use thiserror::Error;

/// Guidance loading and validation errors
#[derive(Debug, Error)]
pub enum GuidanceError {
    /// Entry directory has no document file
    #[error("no SKILL.md found in {dir:?}")]
    DocumentMissing {
        /// Entry directory that was scanned
        dir: PathBuf,
    },

    /// Document does not start with a `---` fenced YAML block
    #[error("no YAML frontmatter block found")]
    FrontmatterMissing,

    /// Frontmatter fence is present but the YAML inside is invalid
    #[error("invalid frontmatter: {0}")]
    Frontmatter(#[from] serde_yaml::Error),

    /// Entry name is empty
    #[error("entry name cannot be empty")]
    EmptyName,

    /// Entry name contains characters outside the slug charset
    #[error("entry name '{name}' must contain only lowercase letters, digits, and hyphens")]
    InvalidName {
        /// Offending name
        name: String,
    },

    /// Entry description is empty
    #[error("entry '{name}' has an empty description")]
    EmptyDescription {
        /// Entry name
        name: String,
    },

    /// Entry declares no triggers at all
    #[error("entry '{name}' declares no triggers")]
    NoTriggers {
        /// Entry name
        name: String,
    },

    /// One of the declared triggers is empty or whitespace-only
    #[error("entry '{name}' declares a blank trigger")]
    BlankTrigger {
        /// Entry name
        name: String,
    },

    /// Lookup by name failed
    #[error("guidance entry '{name}' not found")]
    EntryNotFound {
        /// Requested entry name
        name: String,
    },

    /// Reading a document file failed
    #[error("failed to read {path:?}: {source}")]
    Read {
        /// Document path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Generic I/O error (directory scans)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, GuidanceError>;
