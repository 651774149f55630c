//! Debug record of translated (descriptor, schema) pairs

use std::collections::BTreeSet;
use std::sync::Mutex;

/// A (descriptor, schema) pair seen during a run
pub type TranslationKey = (String, Option<String>);

/// Append-only set of every pair the translator was asked about, including
/// the pairs reached through recursion.
#[derive(Debug, Default)]
pub struct TranslationRecord {
    seen: Mutex<BTreeSet<TranslationKey>>,
}

impl TranslationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, descriptor: &str, schema: Option<&str>) {
        let mut seen = self.seen.lock().unwrap_or_else(|e| e.into_inner());
        seen.insert((descriptor.to_string(), schema.map(str::to_string)));
    }

    /// Recorded pairs in lexicographic order
    pub fn entries(&self) -> Vec<TranslationKey> {
        let seen = self.seen.lock().unwrap_or_else(|e| e.into_inner());
        seen.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
