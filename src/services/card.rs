//! Card service — create, delete, and the drag-and-drop move protocol.
//!
//! DESIGN
//! ======
//! The move is the only multi-entity mutation on the board. Every lookup
//! (target list, source list, card position) completes before the first
//! mutation, and the whole sequence runs under one board write lock, so a
//! move is all-or-nothing: there is no observable window where the card is
//! in zero or two lists, and no save can land between removal and re-insert.

use tracing::info;
use uuid::Uuid;

use crate::services::board::write_through;
use crate::snapshot::CardSnapshot;
use crate::state::{AppState, Card};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("card title must not be blank")]
    Validation,
    #[error("list not found: {0}")]
    ListNotFound(Uuid),
    #[error("card not found: {0}")]
    CardNotFound(Uuid),
}

/// Result of a drop gesture. A card dropped back on its own list is a
/// successful gesture that mutates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    SelfDrop,
}

// =============================================================================
// CREATE / DELETE
// =============================================================================

/// Add a card with a fresh id to the end of a list.
///
/// # Errors
///
/// Returns `Validation` for a blank title and `ListNotFound` for an unknown
/// owner; in both cases nothing is created.
pub async fn add_card(
    state: &AppState,
    list_id: Uuid,
    title: &str,
    description: &str,
) -> Result<CardSnapshot, CardError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CardError::Validation);
    }

    let mut board = state.board.write().await;
    let Some(list) = board.list_by_id_mut(list_id) else {
        return Err(CardError::ListNotFound(list_id));
    };

    let card = Card::new(title, description, list_id);
    let record = CardSnapshot {
        id: card.id,
        title: card.title.clone(),
        description: card.description.clone(),
        parent_list_id: card.parent_list_id,
    };
    list.push_card(card);

    info!(card_id = %record.id, %list_id, "card added");
    write_through(&state.store, &board).await;
    Ok(record)
}

/// Delete a card by id from whichever list owns it.
///
/// # Errors
///
/// Returns `CardNotFound` if the card is not on the board; nothing is mutated.
pub async fn delete_card(state: &AppState, card_id: Uuid) -> Result<(), CardError> {
    let mut board = state.board.write().await;
    let Some((list_index, card_index)) = board.locate_card(card_id) else {
        return Err(CardError::CardNotFound(card_id));
    };

    let list_id = board.lists[list_index].id;
    board.lists[list_index].cards.remove(card_index);

    info!(%card_id, %list_id, "card deleted");
    write_through(&state.store, &board).await;
    Ok(())
}

// =============================================================================
// MOVE / REPARENT
// =============================================================================

/// Reparent a card onto another list, appending at the end.
///
/// Restores the ownership invariant on every success: the card is a member of
/// exactly one list and its back-reference names that list.
///
/// # Errors
///
/// Returns `ListNotFound` or `CardNotFound` when either end of the move
/// cannot be resolved; the board is untouched in both cases.
pub async fn move_card(
    state: &AppState,
    card_id: Uuid,
    target_list_id: Uuid,
) -> Result<MoveOutcome, CardError> {
    let mut board = state.board.write().await;

    // PHASE: RESOLVE BOTH ENDS BEFORE MUTATING
    // WHY: once the card leaves its source list, every remaining step must
    // be infallible for the move to stay all-or-nothing.
    let Some(target_index) = board.lists.iter().position(|list| list.id == target_list_id) else {
        return Err(CardError::ListNotFound(target_list_id));
    };
    let Some((source_index, card_index)) = board.locate_card(card_id) else {
        return Err(CardError::CardNotFound(card_id));
    };

    if source_index == target_index {
        info!(%card_id, %target_list_id, "card dropped on its own list; ignoring");
        return Ok(MoveOutcome::SelfDrop);
    }

    let source_list_id = board.lists[source_index].id;
    let mut card = board.lists[source_index].cards.remove(card_index);
    card.parent_list_id = target_list_id;
    board.lists[target_index].push_card(card);

    info!(%card_id, from = %source_list_id, to = %target_list_id, "card moved");
    // Exactly one save, after the move completes. The write lock is still
    // held, so the snapshot can never capture a mid-move board.
    write_through(&state.store, &board).await;
    Ok(MoveOutcome::Moved)
}

#[cfg(test)]
#[path = "card_test.rs"]
mod tests;
