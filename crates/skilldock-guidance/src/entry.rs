//! Guidance entry definition and parsing
//!
//! Each entry is a directory containing SKILL.md with YAML frontmatter

use crate::error::{GuidanceError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::warn;

/// Document file expected inside every entry directory
pub const DOCUMENT_FILE: &str = "SKILL.md";

/// Maximum allowed name length before a truncation warning
const MAX_NAME_LENGTH: usize = 64;
/// Maximum allowed description length before a truncation warning
const MAX_DESCRIPTION_LENGTH: usize = 1024;

static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^---\s*\n([\s\S]*?)\n---\s*\n?([\s\S]*)$").expect("frontmatter regex")
});

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("name regex"));

/// Entry metadata extracted from YAML frontmatter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryMetadata {
    /// Stable slug identifier (lowercase letters, digits, hyphens)
    pub name: String,
    /// Free text describing WHAT the entry covers and WHEN to use it
    pub description: String,
    /// Keywords and phrases that activate the entry (case-insensitive)
    pub triggers: Vec<String>,
}

/// A complete guidance entry with metadata and on-demand body
#[derive(Debug, Clone)]
pub struct GuidanceEntry {
    /// Entry metadata
    pub metadata: EntryMetadata,
    /// Full path to the entry directory
    pub path: PathBuf,
    /// Markdown body after the frontmatter fence (loaded on demand)
    pub body: Option<String>,
}

impl GuidanceEntry {
    /// Load a full entry (metadata and body) from a directory
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let (metadata, body) = read_document(dir)?;
        Ok(Self {
            metadata,
            path: dir.to_path_buf(),
            body: Some(body),
        })
    }

    /// Load only metadata from a directory (discovery phase)
    pub fn metadata_from_dir(dir: &Path) -> Result<Self> {
        let (metadata, _) = read_document(dir)?;
        Ok(Self {
            metadata,
            path: dir.to_path_buf(),
            body: None,
        })
    }

    /// Load the body if not already loaded (activation phase)
    pub fn load_body(&mut self) -> Result<()> {
        if self.body.is_some() {
            return Ok(());
        }
        let (_, body) = read_document(&self.path)?;
        self.body = Some(body);
        Ok(())
    }

    /// Entry slug
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Entry description
    pub fn description(&self) -> &str {
        &self.metadata.description
    }

    /// Declared activation triggers
    pub fn triggers(&self) -> &[String] {
        &self.metadata.triggers
    }

    /// The slash command that forces activation of this entry
    pub fn invocation_token(&self) -> String {
        format!("/{}", self.metadata.name)
    }

    /// One-line summary for embedding in an assistant system prompt
    pub fn to_summary(&self) -> String {
        format!("- {}: {}", self.metadata.name, self.metadata.description)
    }
}

/// Read and parse the document file of an entry directory
fn read_document(dir: &Path) -> Result<(EntryMetadata, String)> {
    let document = dir.join(DOCUMENT_FILE);
    if !document.exists() {
        return Err(GuidanceError::DocumentMissing {
            dir: dir.to_path_buf(),
        });
    }

    let content = fs::read_to_string(&document).map_err(|source| GuidanceError::Read {
        path: document.clone(),
        source,
    })?;

    let (metadata, body) = parse_document(&content)?;
    validate_metadata(&metadata)?;
    Ok((metadata, body))
}

/// Parse a document into frontmatter metadata and Markdown body
///
/// The body is opaque payload: nothing past the closing fence is
/// interpreted by the host.
pub fn parse_document(content: &str) -> Result<(EntryMetadata, String)> {
    let captures = FRONTMATTER_RE
        .captures(content)
        .ok_or(GuidanceError::FrontmatterMissing)?;

    let yaml_str = captures
        .get(1)
        .ok_or(GuidanceError::FrontmatterMissing)?
        .as_str();
    let body = captures.get(2).map(|m| m.as_str()).unwrap_or("");

    let metadata: EntryMetadata = serde_yaml::from_str(yaml_str)?;
    Ok((metadata, body.to_string()))
}

/// Validate entry metadata against the registration rules
///
/// Hard failures reject the entry; length overruns only warn, since hosts
/// may truncate rather than refuse.
pub fn validate_metadata(metadata: &EntryMetadata) -> Result<()> {
    if metadata.name.is_empty() {
        return Err(GuidanceError::EmptyName);
    }

    if metadata.name.len() > MAX_NAME_LENGTH {
        warn!(
            "entry name '{}' exceeds {} characters (was {}), may be truncated",
            metadata.name,
            MAX_NAME_LENGTH,
            metadata.name.len()
        );
    }

    if !NAME_RE.is_match(&metadata.name) {
        return Err(GuidanceError::InvalidName {
            name: metadata.name.clone(),
        });
    }

    if metadata.description.is_empty() {
        return Err(GuidanceError::EmptyDescription {
            name: metadata.name.clone(),
        });
    }

    if metadata.description.len() > MAX_DESCRIPTION_LENGTH {
        warn!(
            "entry '{}' description exceeds {} characters (was {}), may be truncated",
            metadata.name,
            MAX_DESCRIPTION_LENGTH,
            metadata.description.len()
        );
    }

    if metadata.triggers.is_empty() {
        return Err(GuidanceError::NoTriggers {
            name: metadata.name.clone(),
        });
    }

    if metadata.triggers.iter().any(|t| t.trim().is_empty()) {
        return Err(GuidanceError::BlankTrigger {
            name: metadata.name.clone(),
        });
    }

    Ok(())
}
