//! skilldock guidance system
//!
//! Loadable guidance entries for AI assistant hosts, with progressive
//! disclosure: frontmatter metadata at startup, full document on demand.
//!
//! ## Features
//!
//! - YAML frontmatter metadata (name, description, triggers)
//! - Multiple guidance directories (personal, project, configured)
//! - Automatic discovery and registration with load-time validation
//! - Pure, stateless activation matching: case-insensitive trigger
//!   substrings plus explicit `/<name>` invocation
//!
//! ## Architecture
//!
//! Phase 1 (Discovery): at startup, load only name, description, and
//! triggers from each SKILL.md
//! Phase 2 (Activation): when the context matches, load the full body

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod entry;
pub mod error;
pub mod matcher;
pub mod registry;

pub use entry::{EntryMetadata, GuidanceEntry};
pub use error::{GuidanceError, Result};
pub use matcher::{match_context, match_entry, Activation, ActivationReason};
pub use registry::GuidanceRegistry;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Activation, ActivationReason, GuidanceEntry, GuidanceRegistry};
}
