// src/queue.rs
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::Result;
use crate::types::SubScoutError;

/// Thread-safe queue of brute-force candidates.
///
/// Candidates are fixed at construction; workers claim them one at a time
/// through a lock-free cursor, so every candidate is handed to exactly one
/// caller. Dequeue order is the wordlist order, but callers must not rely
/// on it.
pub struct WorkQueue {
    words: Vec<String>,
    next: AtomicUsize,
}

impl WorkQueue {
    /// Load candidates from a newline-delimited wordlist file.
    ///
    /// Lines are trimmed; blank lines and duplicates are dropped (first
    /// occurrence wins).
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| SubScoutError::Wordlist {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut words = Vec::new();
        let mut seen = HashSet::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| SubScoutError::Wordlist {
                path: path.to_path_buf(),
                source: e,
            })?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if seen.insert(word.to_string()) {
                words.push(word.to_string());
            }
        }

        Ok(Self::from_words(words))
    }

    pub fn from_words(words: Vec<String>) -> Self {
        Self {
            words,
            next: AtomicUsize::new(0),
        }
    }

    /// Claim the next candidate without blocking. Returns `None` once the
    /// queue is drained.
    pub fn try_dequeue(&self) -> Option<String> {
        let idx = self.next.fetch_add(1, Ordering::Relaxed);
        self.words.get(idx).cloned()
    }

    /// Number of candidates not yet claimed. This is a query, not a
    /// reservation; the count only ever decreases.
    pub fn remaining(&self) -> usize {
        self.words
            .len()
            .saturating_sub(self.next.load(Ordering::Relaxed))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
