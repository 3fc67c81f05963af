// SPDX-License-Identifier: MPL-2.0
//! Toast identifiers.
//!
//! Ids are strings so callers can pick their own (e.g. `"upload"`) and later
//! upsert the same toast. Generated ids come from a per-store counter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a toast.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToastId(String);

impl ToastId {
    /// Creates an id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ToastId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Monotonic counter producing `"1"`, `"2"`, ...
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Creates a generator whose first id is `"1"`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id in sequence.
    pub fn next_id(&mut self) -> ToastId {
        self.last += 1;
        ToastId(self.last.to_string())
    }

    /// Returns the next id for which `taken` is false.
    ///
    /// Caller-chosen ids may collide with the counter (a toast created with
    /// id `"2"`), so already used values are skipped.
    pub fn next_unused(&mut self, taken: impl Fn(&ToastId) -> bool) -> ToastId {
        loop {
            let id = self.next_id();
            if !taken(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_sequential() {
        let mut generator = IdGenerator::new();
        assert_eq!(generator.next_id().as_str(), "1");
        assert_eq!(generator.next_id().as_str(), "2");
        assert_eq!(generator.next_id().as_str(), "3");
    }

    #[test]
    fn next_unused_skips_taken_ids() {
        let mut generator = IdGenerator::new();
        let taken = [ToastId::from("1"), ToastId::from("2")];
        let id = generator.next_unused(|id| taken.contains(id));
        assert_eq!(id.as_str(), "3");
    }

    #[test]
    fn display_matches_inner_string() {
        assert_eq!(ToastId::from("upload").to_string(), "upload");
    }
}
