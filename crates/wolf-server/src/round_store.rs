use std::collections::VecDeque;

use wolf_core::RoundRecord;

/// Default maximum number of rounds kept before the oldest are evicted.
const DEFAULT_MAX_ROUNDS: usize = 500;

/// A round plus the identifier clients address it by.
#[derive(Debug, Clone)]
pub struct StoredRound {
    pub id: String,
    pub round: RoundRecord,
}

/// Aggregate statistics about the round store.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RoundStoreStats {
    pub total_stored: usize,
    pub in_progress: usize,
}

/// In-memory, bounded round history keyed by round id.
pub struct RoundStore {
    rounds: VecDeque<StoredRound>,
    max_rounds: usize,
}

impl Default for RoundStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ROUNDS)
    }

    pub fn with_capacity(max_rounds: usize) -> Self {
        Self {
            rounds: VecDeque::new(),
            max_rounds,
        }
    }

    /// Store a round under a fresh id. Evicts the oldest round if at capacity.
    pub fn insert(&mut self, round: RoundRecord) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.rounds.push_back(StoredRound {
            id: id.clone(),
            round,
        });
        while self.rounds.len() > self.max_rounds {
            if let Some(evicted) = self.rounds.pop_front() {
                tracing::debug!(round_id = %evicted.id, "Evicted oldest round");
            }
        }
        id
    }

    pub fn get(&self, id: &str) -> Option<&StoredRound> {
        self.rounds.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut StoredRound> {
        self.rounds.iter_mut().find(|r| r.id == id)
    }

    /// Remove a round. Returns true if it existed.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.rounds.iter().position(|r| r.id == id) {
            Some(index) => {
                self.rounds.remove(index);
                true
            },
            None => false,
        }
    }

    /// All rounds, newest first.
    pub fn history(&self) -> Vec<&StoredRound> {
        self.rounds.iter().rev().collect()
    }

    pub fn stats(&self) -> RoundStoreStats {
        RoundStoreStats {
            total_stored: self.rounds.len(),
            in_progress: self.rounds.iter().filter(|r| r.round.in_progress).count(),
        }
    }
}
