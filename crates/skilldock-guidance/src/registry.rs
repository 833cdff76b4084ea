//! Guidance registry for managing installed entries
//!
//! Progressive disclosure in two phases:
//! - Phase 1: scan directories and load frontmatter metadata only
//! - Phase 2: load the full document body when an entry activates

use crate::entry::GuidanceEntry;
use crate::error::{GuidanceError, Result};
use crate::matcher::{match_context, Activation};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Registry of all installed guidance entries
pub struct GuidanceRegistry {
    /// Discovered entries by name (metadata only until activated)
    entries: HashMap<String, GuidanceEntry>,
    /// Directories to scan, in precedence order (later wins on name clash)
    directories: Vec<PathBuf>,
}

impl GuidanceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            directories: Vec::new(),
        }
    }

    /// Add a guidance directory to scan
    pub fn add_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directories.push(dir.into());
        self
    }

    /// Add the personal guidance directory: `~/.skilldock/guidance/`
    pub fn with_personal_entries(self) -> Self {
        if let Some(home) = dirs::home_dir() {
            self.add_directory(home.join(".skilldock").join("guidance"))
        } else {
            warn!("could not find home directory for personal guidance");
            self
        }
    }

    /// Add the project guidance directory: `./guidance/`
    pub fn with_project_entries(self) -> Self {
        self.add_directory(PathBuf::from("guidance"))
    }

    /// Scan all configured directories and discover entries (phase 1)
    ///
    /// Invalid entries are logged and skipped; discovery never aborts on a
    /// single malformed document.
    pub fn discover(&mut self) -> Result<()> {
        info!(
            "starting guidance discovery in {} directories",
            self.directories.len()
        );

        let directories = self.directories.clone();

        for dir in &directories {
            if !dir.exists() {
                debug!("guidance directory does not exist: {:?}", dir);
                continue;
            }
            if !dir.is_dir() {
                warn!("guidance path is not a directory: {:?}", dir);
                continue;
            }
            self.scan_directory(dir)?;
        }

        info!("discovered {} guidance entries", self.entries.len());
        Ok(())
    }

    /// Scan a single directory for entry subdirectories
    fn scan_directory(&mut self, dir: &Path) -> Result<()> {
        for item in std::fs::read_dir(dir)? {
            let path = item?.path();
            if !path.is_dir() {
                continue;
            }

            match GuidanceEntry::metadata_from_dir(&path) {
                Ok(entry) => {
                    let name = entry.name().to_string();
                    if self.entries.contains_key(&name) {
                        debug!("entry '{}' overridden by {:?}", name, path);
                    } else {
                        debug!("discovered entry: {} at {:?}", name, path);
                    }
                    // Later directories win; project overrides personal
                    self.entries.insert(name, entry);
                }
                Err(e) => {
                    debug!("skipping {:?}: {}", path, e);
                }
            }
        }
        Ok(())
    }

    /// Scan all configured directories and report every entry that fails
    /// validation, instead of silently skipping it
    pub fn lint(&self) -> Vec<(PathBuf, GuidanceError)> {
        let mut findings = Vec::new();

        for dir in &self.directories {
            if !dir.is_dir() {
                continue;
            }
            let items = match std::fs::read_dir(dir) {
                Ok(items) => items,
                Err(e) => {
                    findings.push((dir.clone(), GuidanceError::Io(e)));
                    continue;
                }
            };
            for item in items.flatten() {
                let path = item.path();
                if !path.is_dir() {
                    continue;
                }
                if let Err(e) = GuidanceEntry::metadata_from_dir(&path) {
                    findings.push((path, e));
                }
            }
        }

        findings
    }

    /// Get an entry by name (metadata only if not yet activated)
    pub fn get(&self, name: &str) -> Option<&GuidanceEntry> {
        self.entries.get(name)
    }

    /// Load the full body for one entry (phase 2)
    pub fn load_entry(&mut self, name: &str) -> Result<&GuidanceEntry> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| GuidanceError::EntryNotFound {
                name: name.to_string(),
            })?;

        entry.load_body()?;
        Ok(entry)
    }

    /// Run the activation matcher over every installed entry
    pub fn activate(&self, context: &str) -> Vec<Activation> {
        match_context(self.entries.values(), context)
    }

    /// All installed entry names
    pub fn entry_names(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Number of installed entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the catalog for an assistant system prompt
    ///
    /// Format:
    /// Available guidance (use /{entry-name} to activate):
    /// - entry-name: description of what it covers and when to use it
    pub fn catalog_summary(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let mut summary = String::from("Available guidance (use /{entry-name} to activate):\n");

        // Sort by name for consistent ordering
        let mut sorted: Vec<_> = self.entries.values().collect();
        sorted.sort_by_key(|e| e.name());

        for entry in sorted {
            summary.push_str(&entry.to_summary());
            summary.push('\n');
        }

        summary
    }
}

impl Default for GuidanceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
