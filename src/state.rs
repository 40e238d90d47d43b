//! Shared application state and the board data model.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the single live `Board` behind an async `RwLock` plus the snapshot
//! store. The board is a strict containment tree: Board owns Lists, each List
//! owns its Cards exclusively, and a card's `parent_list_id` is a
//! back-reference that must always equal the id of the list holding it.
//!
//! Ownership lookups (which list holds card X?) go through `Board` methods
//! rather than through per-card callbacks, so reparenting a card never leaves
//! a stale binding behind.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::services::store::SnapshotStore;

// =============================================================================
// CARD
// =============================================================================

/// Leaf task item. `parent_list_id` is a back-reference, not ownership; the
/// owning list's `cards` vector is the source of truth for membership.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub parent_list_id: Uuid,
}

impl Card {
    #[must_use]
    pub fn new(title: &str, description: &str, parent_list_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            description: description.to_owned(),
            parent_list_id,
        }
    }
}

// =============================================================================
// LIST
// =============================================================================

/// Ordered container of cards. Insertion order is significant and survives
/// snapshot round trips.
#[derive(Debug, Clone)]
pub struct List {
    pub id: Uuid,
    pub title: String,
    pub cards: Vec<Card>,
}

impl List {
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self { id: Uuid::new_v4(), title: title.to_owned(), cards: Vec::new() }
    }

    /// Position of a card within this list, if it is a member.
    #[must_use]
    pub fn position_of(&self, card_id: Uuid) -> Option<usize> {
        self.cards.iter().position(|card| card.id == card_id)
    }

    /// Remove a card by id, returning it if it was a member.
    pub fn remove_by_id(&mut self, card_id: Uuid) -> Option<Card> {
        let position = self.position_of(card_id)?;
        Some(self.cards.remove(position))
    }

    /// Append a card at the end of the list.
    pub fn push_card(&mut self, card: Card) {
        self.cards.push(card);
    }
}

// =============================================================================
// BOARD
// =============================================================================

/// Root aggregate. Owns all lists; every card on the board is reachable
/// through exactly one list.
#[derive(Debug, Clone)]
pub struct Board {
    pub title: String,
    pub lists: Vec<List>,
}

impl Board {
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self { title: title.to_owned(), lists: Vec::new() }
    }

    #[must_use]
    pub fn list_by_id(&self, list_id: Uuid) -> Option<&List> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    pub fn list_by_id_mut(&mut self, list_id: Uuid) -> Option<&mut List> {
        self.lists.iter_mut().find(|list| list.id == list_id)
    }

    /// Locate a card anywhere on the board: `(list index, card index)`.
    #[must_use]
    pub fn locate_card(&self, card_id: Uuid) -> Option<(usize, usize)> {
        self.lists
            .iter()
            .enumerate()
            .find_map(|(list_index, list)| {
                list.position_of(card_id)
                    .map(|card_index| (list_index, card_index))
            })
    }

    /// Total number of cards across all lists.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|list| list.cards.len()).sum()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — inner fields are Arc-wrapped or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<RwLock<Board>>,
    pub store: SnapshotStore,
}

impl AppState {
    #[must_use]
    pub fn new(board: Board, store: SnapshotStore) -> Self {
        Self { board: Arc::new(RwLock::new(board)), store }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
