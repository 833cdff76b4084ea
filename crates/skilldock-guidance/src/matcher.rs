//! Activation matching
//!
//! Decides, for a free-text context string, which installed guidance
//! entries should be surfaced. Matching is a pure function over immutable
//! inputs: no side effects, no hidden state, safe to call from anywhere.

use crate::entry::GuidanceEntry;
use serde::Serialize;

/// Why an entry activated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "via", content = "value", rename_all = "snake_case")]
pub enum ActivationReason {
    /// A declared trigger occurred in the context (case-insensitive substring)
    Trigger(String),
    /// The explicit `/<name>` invocation token was present
    Invocation,
}

/// A single activation decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activation {
    /// Name of the activated entry
    pub name: String,
    /// What caused the activation
    #[serde(flatten)]
    pub reason: ActivationReason,
}

/// Decide whether one entry activates for the given context
///
/// Explicit invocation is checked first so the reported reason reflects a
/// deliberate `/<name>` over an incidental keyword hit.
pub fn match_entry(entry: &GuidanceEntry, context: &str) -> Option<ActivationReason> {
    let command = entry.invocation_token();
    if context.split_whitespace().any(|token| token == command) {
        return Some(ActivationReason::Invocation);
    }

    let haystack = context.to_lowercase();
    for trigger in entry.triggers() {
        // Plain substring containment on purpose: identifiers like
        // `beforeSwap` appear embedded in code (`function beforeSwap(`),
        // so word-boundary isolation would miss them.
        if haystack.contains(&trigger.to_lowercase()) {
            return Some(ActivationReason::Trigger(trigger.clone()));
        }
    }

    None
}

/// Match a context string against every installed entry
///
/// All matching entries activate; guidance documents are additive context,
/// never mutually exclusive handlers. An empty result set is a normal,
/// non-exceptional outcome. Results are sorted by entry name so repeated
/// calls over the same inputs are byte-identical.
pub fn match_context<'a, I>(entries: I, context: &str) -> Vec<Activation>
where
    I: IntoIterator<Item = &'a GuidanceEntry>,
{
    let mut activations: Vec<Activation> = entries
        .into_iter()
        .filter_map(|entry| {
            match_entry(entry, context).map(|reason| Activation {
                name: entry.name().to_string(),
                reason,
            })
        })
        .collect();

    activations.sort_by(|a, b| a.name.cmp(&b.name));
    activations
}
