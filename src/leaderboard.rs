//! Ranked top-K run results, ascending by time.
//!
//! The store is in-memory only and lives for the process; it is handed to
//! `GameSession` at construction instead of sitting in ambient global state.
//! Ties are stable: a new result is ranked after pre-existing entries with
//! the same time, so re-running never reshuffles old entries. Duplicate
//! name/time pairs are allowed as distinct entries.

use crate::catalog::SEED_LEADERBOARD;

/// Maximum entries retained; inserts past the cut are silently dropped.
pub const LEADERBOARD_CAPACITY: usize = 10;

/// One completed run. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunResult {
    pub name: String,
    pub time_secs: f64,
}

impl RunResult {
    pub fn new(name: impl Into<String>, time_secs: f64) -> Self {
        Self { name: name.into(), time_secs }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LeaderboardStore {
    entries: Vec<RunResult>,
}

impl LeaderboardStore {
    /// Empty store (mainly for tests).
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Store pre-populated with the built-in entries.
    pub fn seeded() -> Self {
        Self {
            entries: SEED_LEADERBOARD
                .iter()
                .map(|&(name, time)| RunResult::new(name, time))
                .collect(),
        }
    }

    /// Merge `result` into the ranking and truncate to capacity. Returns the
    /// zero-based rank of the new entry, or `None` when it was worse than a
    /// full board and got dropped (that is still a successful insert).
    pub fn insert(&mut self, result: RunResult) -> Option<usize> {
        // First strictly-worse entry; equal times keep the newcomer behind.
        let rank = self
            .entries
            .iter()
            .position(|e| e.time_secs > result.time_secs)
            .unwrap_or(self.entries.len());
        if rank >= LEADERBOARD_CAPACITY {
            return None;
        }
        self.entries.insert(rank, result);
        self.entries.truncate(LEADERBOARD_CAPACITY);
        Some(rank)
    }

    /// First `k` entries (or fewer, if the board is shorter), best first.
    pub fn top(&self, k: usize) -> &[RunResult] {
        &self.entries[..k.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
