//! Board snapshot records — the durable form of the board.
//!
//! DESIGN
//! ======
//! Snapshot types mirror exactly the durable fields of the model: ids, titles,
//! descriptions, back-references, and sequence order. Nothing transient
//! (locks, handlers, render state) ever reaches the wire. `schema` is an
//! explicit version field so a structurally incompatible snapshot is rejected
//! up front instead of being misread.
//!
//! ERROR HANDLING
//! ==============
//! Rehydration is all-or-nothing: any invariant violation in the record
//! (unsupported schema, duplicate id, back-reference pointing at the wrong
//! list) fails with `CorruptStateError` and no partial board is produced.
//! The caller's recovery policy is to discard the record and start fresh.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::{Board, Card, List};

/// Bump on any backward-incompatible change to the snapshot structure.
pub const SCHEMA_VERSION: u32 = 1;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CorruptStateError {
    #[error("unsupported snapshot schema version {0}, expected {SCHEMA_VERSION}")]
    UnsupportedSchema(u32),
    #[error("duplicate list id in snapshot: {0}")]
    DuplicateListId(Uuid),
    #[error("duplicate card id in snapshot: {0}")]
    DuplicateCardId(Uuid),
    #[error("card {card_id} back-reference {parent_list_id} does not match owning list {list_id}")]
    ParentMismatch {
        card_id: Uuid,
        parent_list_id: Uuid,
        list_id: Uuid,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub parent_list_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSnapshot {
    pub id: Uuid,
    pub title: String,
    pub cards: Vec<CardSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub schema: u32,
    pub title: String,
    pub lists: Vec<ListSnapshot>,
}

// =============================================================================
// SERIALIZE / REHYDRATE
// =============================================================================

impl Board {
    /// Mirror the board's current durable state into a snapshot record.
    #[must_use]
    pub fn to_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            schema: SCHEMA_VERSION,
            title: self.title.clone(),
            lists: self
                .lists
                .iter()
                .map(|list| ListSnapshot {
                    id: list.id,
                    title: list.title.clone(),
                    cards: list
                        .cards
                        .iter()
                        .map(|card| CardSnapshot {
                            id: card.id,
                            title: card.title.clone(),
                            description: card.description.clone(),
                            parent_list_id: card.parent_list_id,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Reconstruct a board from a snapshot, preserving ids, text, and order.
    ///
    /// Ownership is rebound to the reconstructed graph: each card belongs to
    /// the rebuilt list that carries it, and all later mutations resolve the
    /// owner through the live board, never through pre-snapshot state.
    ///
    /// # Errors
    ///
    /// Returns `CorruptStateError` if the record violates a structural
    /// invariant. No board is produced on failure.
    pub fn from_snapshot(snapshot: BoardSnapshot) -> Result<Self, CorruptStateError> {
        if snapshot.schema != SCHEMA_VERSION {
            return Err(CorruptStateError::UnsupportedSchema(snapshot.schema));
        }

        let mut seen_lists: HashSet<Uuid> = HashSet::new();
        let mut seen_cards: HashSet<Uuid> = HashSet::new();
        let mut lists = Vec::with_capacity(snapshot.lists.len());

        for list_record in snapshot.lists {
            if !seen_lists.insert(list_record.id) {
                return Err(CorruptStateError::DuplicateListId(list_record.id));
            }

            let mut cards = Vec::with_capacity(list_record.cards.len());
            for card_record in list_record.cards {
                if !seen_cards.insert(card_record.id) {
                    return Err(CorruptStateError::DuplicateCardId(card_record.id));
                }
                // EDGE: a card serialized mid-move could carry a stale
                // back-reference; reject rather than guess the owner.
                if card_record.parent_list_id != list_record.id {
                    return Err(CorruptStateError::ParentMismatch {
                        card_id: card_record.id,
                        parent_list_id: card_record.parent_list_id,
                        list_id: list_record.id,
                    });
                }
                cards.push(Card {
                    id: card_record.id,
                    title: card_record.title,
                    description: card_record.description,
                    parent_list_id: card_record.parent_list_id,
                });
            }

            lists.push(List { id: list_record.id, title: list_record.title, cards });
        }

        Ok(Self { title: snapshot.title, lists })
    }
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod tests;
