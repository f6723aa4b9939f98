//! Per-user conversation history.
//!
//! Each user owns a sliding window of the most recent turns. Histories live
//! in memory only and are lost on restart.
//!
//! All operations take the store lock once, so an append and the trim that
//! follows it (or both halves of an exchange) are atomic with respect to
//! concurrent requests for the same user.

use crate::turn::Turn;
use genrelay_core::UserId;
use std::collections::{HashMap, VecDeque};
use std::sync::{PoisonError, RwLock};

/// Number of turns retained per user by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// In-memory store of per-user turn windows.
#[derive(Debug)]
pub struct ConversationStore {
    capacity: usize,
    histories: RwLock<HashMap<UserId, VecDeque<Turn>>>,
}

impl ConversationStore {
    /// Creates a store retaining at most `capacity` turns per user.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            histories: RwLock::new(HashMap::new()),
        }
    }

    /// Returns a user's turns, oldest first. Empty if the user has none.
    #[must_use]
    pub fn get(&self, user_id: UserId) -> Vec<Turn> {
        let histories = self.histories.read().unwrap_or_else(PoisonError::into_inner);
        histories
            .get(&user_id)
            .map(|turns| turns.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Appends a turn, evicting the oldest turns beyond capacity.
    pub fn append(&self, user_id: UserId, turn: Turn) {
        self.extend(user_id, [turn]);
    }

    /// Appends a user turn and the assistant's reply as one operation.
    pub fn record_exchange(&self, user_id: UserId, user_turn: Turn, assistant_turn: Turn) {
        self.extend(user_id, [user_turn, assistant_turn]);
    }

    /// Removes all turns of a user.
    pub fn clear(&self, user_id: UserId) {
        let mut histories = self.histories.write().unwrap_or_else(PoisonError::into_inner);
        histories.remove(&user_id);
    }

    /// Returns the number of turns stored for a user.
    #[must_use]
    pub fn len(&self, user_id: UserId) -> usize {
        let histories = self.histories.read().unwrap_or_else(PoisonError::into_inner);
        histories.get(&user_id).map_or(0, VecDeque::len)
    }

    fn extend(&self, user_id: UserId, turns: impl IntoIterator<Item = Turn>) {
        let mut histories = self.histories.write().unwrap_or_else(PoisonError::into_inner);
        let history = histories.entry(user_id).or_default();
        history.extend(turns);
        while history.len() > self.capacity {
            history.pop_front();
        }
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
