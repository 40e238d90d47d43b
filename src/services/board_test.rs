use super::*;
use crate::services::card;
use crate::services::store::SnapshotStore;
use crate::state::test_helpers;

#[tokio::test]
async fn load_board_starts_fresh_without_a_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("board.json"));

    let board = load_board(&store).await;
    assert_eq!(board.title, DEFAULT_BOARD_TITLE);
    assert!(board.lists.is_empty());
}

#[tokio::test]
async fn load_board_rehydrates_a_saved_snapshot() {
    let (state, _dir) = test_helpers::test_app_state();
    let todo = add_list(&state, "Todo").await.unwrap();

    let board = load_board(&state.store).await;
    assert_eq!(board.lists.len(), 1);
    assert_eq!(board.lists[0].id, todo.id);
}

#[tokio::test]
async fn load_board_discards_a_record_with_a_missing_card_title() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    let list_id = uuid::Uuid::new_v4();
    let raw = serde_json::json!({
        "schema": 1,
        "title": "Project Board",
        "lists": [{
            "id": list_id,
            "title": "Todo",
            "cards": [{
                "id": uuid::Uuid::new_v4(),
                "description": "no title",
                "parent_list_id": list_id,
            }],
        }],
    });
    tokio::fs::write(&path, serde_json::to_vec(&raw).unwrap()).await.unwrap();

    let board = load_board(&SnapshotStore::new(path)).await;
    assert_eq!(board.title, DEFAULT_BOARD_TITLE);
    assert!(board.lists.is_empty());
}

#[tokio::test]
async fn load_board_discards_garbage_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    tokio::fs::write(&path, b"not a snapshot at all").await.unwrap();

    let board = load_board(&SnapshotStore::new(path)).await;
    assert_eq!(board.title, DEFAULT_BOARD_TITLE);
    assert!(board.lists.is_empty());
}

#[tokio::test]
async fn load_board_discards_a_structurally_invalid_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    // Valid JSON, but the card's back-reference names the wrong list.
    let raw = serde_json::json!({
        "schema": 1,
        "title": "Project Board",
        "lists": [{
            "id": uuid::Uuid::new_v4(),
            "title": "Todo",
            "cards": [{
                "id": uuid::Uuid::new_v4(),
                "title": "stray",
                "description": "",
                "parent_list_id": uuid::Uuid::new_v4(),
            }],
        }],
    });
    tokio::fs::write(&path, serde_json::to_vec(&raw).unwrap()).await.unwrap();

    let board = load_board(&SnapshotStore::new(path)).await;
    assert!(board.lists.is_empty());
}

#[tokio::test]
async fn add_list_appends_in_order_and_persists() {
    let (state, _dir) = test_helpers::test_app_state();

    let todo = add_list(&state, "Todo").await.expect("add should succeed");
    let done = add_list(&state, "Done").await.expect("add should succeed");
    assert_ne!(todo.id, done.id);

    let board = state.board.read().await;
    let titles: Vec<&str> = board.lists.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["Todo", "Done"]);
    drop(board);

    let persisted = state.store.load().await.unwrap().expect("write-through should have saved");
    assert_eq!(persisted.lists.len(), 2);
    assert_eq!(persisted.lists[0].id, todo.id);
}

#[tokio::test]
async fn add_list_blank_title_creates_nothing() {
    let (state, _dir) = test_helpers::test_app_state();

    assert!(matches!(add_list(&state, "").await, Err(BoardError::Validation)));
    assert!(matches!(add_list(&state, "   ").await, Err(BoardError::Validation)));

    let board = state.board.read().await;
    assert!(board.lists.is_empty());
    drop(board);
    // A rejected create must not trigger a save either.
    assert!(state.store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn add_list_trims_surrounding_whitespace() {
    let (state, _dir) = test_helpers::test_app_state();
    let list = add_list(&state, "  Backlog  ").await.unwrap();
    assert_eq!(list.title, "Backlog");
}

#[tokio::test]
async fn delete_list_cascades_to_its_cards() {
    let (state, _dir) = test_helpers::test_app_state();
    let todo = add_list(&state, "Todo").await.unwrap();
    let keep = add_list(&state, "Keep").await.unwrap();
    let doomed = card::add_card(&state, todo.id, "doomed", "").await.unwrap();
    card::add_card(&state, keep.id, "survivor", "").await.unwrap();

    delete_list(&state, todo.id).await.expect("delete should succeed");

    let board = state.board.read().await;
    assert_eq!(board.lists.len(), 1);
    assert_eq!(board.card_count(), 1);
    // No orphan with a dangling back-reference remains reachable.
    assert!(board.locate_card(doomed.id).is_none());
    drop(board);

    let persisted = state.store.load().await.unwrap().unwrap();
    assert_eq!(persisted.lists.len(), 1);
    assert_eq!(persisted.lists[0].id, keep.id);
}

#[tokio::test]
async fn delete_list_unknown_id_leaves_board_intact() {
    let (state, _dir) = test_helpers::test_app_state();
    add_list(&state, "Todo").await.unwrap();

    let result = delete_list(&state, uuid::Uuid::new_v4()).await;
    assert!(matches!(result, Err(BoardError::ListNotFound(_))));

    let board = state.board.read().await;
    assert_eq!(board.lists.len(), 1);
}

#[tokio::test]
async fn board_snapshot_is_the_full_ordered_board() {
    let (state, _dir) = test_helpers::test_app_state();
    let todo = add_list(&state, "Todo").await.unwrap();
    card::add_card(&state, todo.id, "first", "").await.unwrap();
    card::add_card(&state, todo.id, "second", "").await.unwrap();

    let snapshot = board_snapshot(&state).await;
    assert_eq!(snapshot.title, "Project Board");
    assert_eq!(snapshot.lists[0].cards[0].title, "first");
    assert_eq!(snapshot.lists[0].cards[1].title, "second");
}

#[tokio::test]
async fn end_to_end_save_reload_preserves_structure_and_ids() {
    let (state, _dir) = test_helpers::test_app_state();
    let todo = add_list(&state, "Todo").await.unwrap();
    let card = card::add_card(&state, todo.id, "Write spec", "").await.unwrap();

    let persisted = state.store.load().await.unwrap().expect("snapshot should exist");
    let rehydrated = crate::state::Board::from_snapshot(persisted).expect("rehydrate should succeed");

    assert_eq!(rehydrated.title, "Project Board");
    assert_eq!(rehydrated.lists.len(), 1);
    assert_eq!(rehydrated.lists[0].id, todo.id);
    assert_eq!(rehydrated.lists[0].title, "Todo");
    assert_eq!(rehydrated.lists[0].cards.len(), 1);
    assert_eq!(rehydrated.lists[0].cards[0].id, card.id);
    assert_eq!(rehydrated.lists[0].cards[0].title, "Write spec");
}
