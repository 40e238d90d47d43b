//! Board service — list-level operations and the render snapshot.
//!
//! DESIGN
//! ======
//! List mutations run inside one board write-lock critical section that also
//! covers the write-through save, so no reader or concurrent save can observe
//! a half-applied change. Deleting a list cascades: its cards leave the board
//! with it and no orphan with a dangling back-reference remains reachable.

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::snapshot::{BoardSnapshot, ListSnapshot};
use crate::state::{AppState, Board, List};
use crate::services::store::SnapshotStore;

/// Title of a board started without a usable snapshot.
pub const DEFAULT_BOARD_TITLE: &str = "Project Board";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("list title must not be blank")]
    Validation,
    #[error("list not found: {0}")]
    ListNotFound(Uuid),
}

// =============================================================================
// STARTUP HYDRATION
// =============================================================================

/// Load the persisted board, or start fresh.
///
/// Recovery policy: an absent snapshot, an unreadable file, a record that
/// fails to parse, and a record that fails rehydration all resolve to a fresh
/// empty board. Bad persisted state is never fatal and never reaches the user
/// as anything worse than an empty board.
pub async fn load_board(store: &SnapshotStore) -> Board {
    match store.load().await {
        Ok(Some(snapshot)) => match Board::from_snapshot(snapshot) {
            Ok(board) => {
                info!(lists = board.lists.len(), cards = board.card_count(), "board rehydrated from snapshot");
                board
            }
            Err(e) => {
                warn!(error = %e, "persisted board is corrupt; discarding and starting fresh");
                Board::new(DEFAULT_BOARD_TITLE)
            }
        },
        Ok(None) => {
            info!("no persisted board; starting fresh");
            Board::new(DEFAULT_BOARD_TITLE)
        }
        Err(e) => {
            warn!(error = %e, "failed to load persisted board; discarding and starting fresh");
            Board::new(DEFAULT_BOARD_TITLE)
        }
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Render surface: the full ordered board snapshot.
pub async fn board_snapshot(state: &AppState) -> BoardSnapshot {
    let board = state.board.read().await;
    board.to_snapshot()
}

/// Add a list with a fresh id to the end of the board.
///
/// # Errors
///
/// Returns `Validation` for an empty or blank title; nothing is created.
pub async fn add_list(state: &AppState, title: &str) -> Result<ListSnapshot, BoardError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(BoardError::Validation);
    }

    let mut board = state.board.write().await;
    let list = List::new(title);
    let record = ListSnapshot { id: list.id, title: list.title.clone(), cards: Vec::new() };
    board.lists.push(list);

    info!(list_id = %record.id, title = %record.title, "list added");
    write_through(&state.store, &board).await;
    Ok(record)
}

/// Delete a list by id, discarding all of its cards with it.
///
/// # Errors
///
/// Returns `ListNotFound` if no list carries the id; nothing is mutated.
pub async fn delete_list(state: &AppState, list_id: Uuid) -> Result<(), BoardError> {
    let mut board = state.board.write().await;
    let Some(position) = board.lists.iter().position(|list| list.id == list_id) else {
        return Err(BoardError::ListNotFound(list_id));
    };

    let removed = board.lists.remove(position);
    info!(%list_id, cards_discarded = removed.cards.len(), "list deleted");
    write_through(&state.store, &board).await;
    Ok(())
}

// =============================================================================
// WRITE-THROUGH
// =============================================================================

/// Mirror the board into the snapshot store. Best-effort: a failed write is
/// logged and the in-memory board stays authoritative for the session.
pub(crate) async fn write_through(store: &SnapshotStore, board: &Board) {
    if let Err(e) = store.save(&board.to_snapshot()).await {
        error!(error = %e, path = %store.path().display(), "snapshot write-through failed");
    }
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;
