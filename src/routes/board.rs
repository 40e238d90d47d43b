//! Board API handlers.
//!
//! ERROR HANDLING
//! ==============
//! Creates translate validation failures into client errors, because the
//! caller asked for an entity and got none. Deletes and moves are different:
//! a drop or delete aimed at an id that no longer exists is a stale gesture,
//! not a failure, so those handlers log the miss and answer with a negative
//! outcome instead of an error status.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::services::board::{self, BoardError};
use crate::services::card::{self, CardError, MoveOutcome};
use crate::snapshot::{BoardSnapshot, CardSnapshot, ListSnapshot};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateListBody {
    pub title: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateCardBody {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct MoveCardBody {
    pub target_list_id: Uuid,
}

#[derive(Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Serialize)]
pub struct MoveResponse {
    pub moved: bool,
}

/// `GET /api/board` — full board snapshot, the render surface.
pub async fn get_board(State(state): State<AppState>) -> Json<BoardSnapshot> {
    Json(board::board_snapshot(&state).await)
}

/// `POST /api/lists` — create a list. An absent or blank title is a
/// cancelled prompt: nothing is created.
pub async fn create_list(
    State(state): State<AppState>,
    Json(body): Json<CreateListBody>,
) -> Result<(StatusCode, Json<ListSnapshot>), StatusCode> {
    let title = body.title.unwrap_or_default();
    let list = board::add_list(&state, &title)
        .await
        .map_err(board_error_to_status)?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// `DELETE /api/lists/{id}` — delete a list and all of its cards.
pub async fn delete_list(
    State(state): State<AppState>,
    Path(list_id): Path<Uuid>,
) -> Json<OkResponse> {
    match board::delete_list(&state, list_id).await {
        Ok(()) => Json(OkResponse { ok: true }),
        Err(e) => {
            warn!(%list_id, error = %e, "delete list was a no-op");
            Json(OkResponse { ok: false })
        }
    }
}

/// `POST /api/lists/{id}/cards` — create a card on a list.
pub async fn create_card(
    State(state): State<AppState>,
    Path(list_id): Path<Uuid>,
    Json(body): Json<CreateCardBody>,
) -> Result<(StatusCode, Json<CardSnapshot>), StatusCode> {
    let title = body.title.unwrap_or_default();
    let description = body.description.unwrap_or_default();
    let card = card::add_card(&state, list_id, &title, &description)
        .await
        .map_err(card_error_to_status)?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// `DELETE /api/cards/{id}` — delete a card from whichever list owns it.
pub async fn delete_card(
    State(state): State<AppState>,
    Path(card_id): Path<Uuid>,
) -> Json<OkResponse> {
    match card::delete_card(&state, card_id).await {
        Ok(()) => Json(OkResponse { ok: true }),
        Err(e) => {
            warn!(%card_id, error = %e, "delete card was a no-op");
            Json(OkResponse { ok: false })
        }
    }
}

/// `POST /api/cards/{id}/move` — reparent a card onto another list.
///
/// The card id arrives as the opaque string carried by the drag gesture; an
/// id that does not parse or resolve is a stale drop and never an error.
pub async fn move_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
    Json(body): Json<MoveCardBody>,
) -> Json<MoveResponse> {
    let Ok(card_id) = Uuid::parse_str(&card_id) else {
        warn!(payload = %card_id, "drop payload is not a card id; ignoring");
        return Json(MoveResponse { moved: false });
    };

    match card::move_card(&state, card_id, body.target_list_id).await {
        Ok(MoveOutcome::Moved) => Json(MoveResponse { moved: true }),
        Ok(MoveOutcome::SelfDrop) => Json(MoveResponse { moved: false }),
        Err(e) => {
            warn!(%card_id, target_list_id = %body.target_list_id, error = %e, "move was a no-op");
            Json(MoveResponse { moved: false })
        }
    }
}

pub(crate) fn board_error_to_status(err: BoardError) -> StatusCode {
    match err {
        BoardError::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        BoardError::ListNotFound(_) => StatusCode::NOT_FOUND,
    }
}

pub(crate) fn card_error_to_status(err: CardError) -> StatusCode {
    match err {
        CardError::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        CardError::ListNotFound(_) | CardError::CardNotFound(_) => StatusCode::NOT_FOUND,
    }
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;
