use roomplan_core::{
    scale_position, Dimensions, Mutation, PlacedItem, Position, RoomDimensions, SceneHistoryStore,
};
use std::collections::HashSet;

fn coffee_table() -> PlacedItem {
    let size = Dimensions::new(1.2, 0.45, 0.6);
    PlacedItem::new("Coffee Table", "table", "Tables", size).at(floor(0.0, 0.0))
}

/// Resting position of the coffee table at `(x, z)`.
fn floor(x: f64, z: f64) -> Position {
    Position::new(x, 0.225, z)
}

fn assert_live_matches_cursor(scene: &SceneHistoryStore) {
    let snapshot = scene
        .snapshot_at(scene.history_index())
        .expect("cursor must point into the log");
    assert_eq!(scene.items(), snapshot.items());
    assert!(scene.history_index() < scene.history_len());
}

/// Builds a log of length 5 with the cursor at index 4.
fn five_step_history() -> (SceneHistoryStore, String) {
    let mut scene = SceneHistoryStore::new();
    let id = scene.add(coffee_table()).unwrap();
    scene.move_item(&id, floor(1.0, 0.0)).unwrap();
    scene.move_item(&id, floor(1.0, 1.0)).unwrap();
    scene.rotate(&id, 0.5).unwrap();
    assert_eq!(scene.history_len(), 5);
    assert_eq!(scene.history_index(), 4);
    (scene, id)
}

#[test]
fn new_store_starts_with_one_empty_snapshot() {
    let scene = SceneHistoryStore::new();
    assert!(scene.is_empty());
    assert_eq!(scene.history_len(), 1);
    assert_eq!(scene.history_index(), 0);
    assert!(!scene.can_undo());
    assert!(!scene.can_redo());
    assert!(scene.selected_item().is_none());
}

#[test]
fn live_items_track_cursor_after_every_mutation() {
    let mut scene = SceneHistoryStore::new();
    assert_live_matches_cursor(&scene);

    let first = scene.add(coffee_table()).unwrap();
    assert_live_matches_cursor(&scene);
    let second = scene.add(coffee_table()).unwrap();
    assert_live_matches_cursor(&scene);

    scene.move_item(&first, floor(2.0, -1.0)).unwrap();
    assert_live_matches_cursor(&scene);
    scene.rotate(&second, 1.0).unwrap();
    assert_live_matches_cursor(&scene);
    scene.remove(&first);
    assert_live_matches_cursor(&scene);
    let pair = vec![coffee_table(), coffee_table()];
    scene.apply_all(pair).unwrap();
    assert_live_matches_cursor(&scene);
    scene.undo();
    assert_live_matches_cursor(&scene);
    scene.redo();
    assert_live_matches_cursor(&scene);
}

#[test]
fn undo_then_redo_restores_exact_collection() {
    let (mut scene, _) = five_step_history();
    let before = scene.items().to_vec();

    assert!(scene.undo());
    assert!(scene.can_redo());
    assert_ne!(scene.items(), before.as_slice());
    assert!(scene.redo());
    assert_eq!(scene.items(), before.as_slice());

    scene.undo();
    scene.undo();
    let middle = scene.items().to_vec();
    scene.undo();
    scene.redo();
    assert_eq!(scene.items(), middle.as_slice());
}

#[test]
fn undo_at_lower_bound_changes_nothing() {
    let mut scene = SceneHistoryStore::new();
    assert!(!scene.can_undo());
    assert!(!scene.undo());
    assert_eq!(scene.history_len(), 1);
    assert_eq!(scene.history_index(), 0);
    assert!(scene.is_empty());
}

#[test]
fn redo_at_upper_bound_changes_nothing() {
    let (mut scene, id) = five_step_history();
    scene.select(&id);
    let before = scene.items().to_vec();

    assert!(!scene.can_redo());
    assert!(!scene.redo());
    assert_eq!(scene.items(), before.as_slice());
    assert_eq!(scene.history_len(), 5);
    assert_eq!(scene.history_index(), 4);
    assert_eq!(scene.selected_id(), Some(id.as_str()));
}

#[test]
fn add_with_empty_id_generates_unique_ids() {
    let mut scene = SceneHistoryStore::new();
    for _ in 0..10 {
        let id = scene.add(coffee_table()).unwrap();
        assert!(!id.is_empty());
    }

    let ids: HashSet<_> = scene.items().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids.len(), 10);
    assert!(!ids.contains(""));
}

#[test]
fn mutation_after_undo_truncates_redo_branch() {
    let (mut scene, id) = five_step_history();
    scene.undo();
    scene.undo();
    assert_eq!(scene.history_index(), 2);

    let outcome = scene
        .move_item(&id, Position::new(-2.0, 0.225, 0.5))
        .unwrap();
    assert_eq!(outcome, Mutation::Applied);
    assert_eq!(scene.history_len(), 4);
    assert_eq!(scene.history_index(), 3);
    assert!(!scene.can_redo());
}

#[test]
fn remove_of_absent_id_records_no_history() {
    let (mut scene, _) = five_step_history();
    let items_before = scene.len();

    assert_eq!(scene.remove("no-such-item"), Mutation::NotFound);
    assert_eq!(scene.len(), items_before);
    assert_eq!(scene.history_len(), 5);
    assert_eq!(scene.history_index(), 4);
}

#[test]
fn move_and_rotate_of_absent_id_clear_selection_without_history() {
    let (mut scene, id) = five_step_history();
    scene.select(&id);

    assert_eq!(
        scene.move_item("ghost", Position::default()).unwrap(),
        Mutation::NotFound
    );
    assert!(scene.selected_id().is_none());

    scene.select(&id);
    assert_eq!(scene.rotate("ghost", 1.0).unwrap(), Mutation::NotFound);
    assert!(scene.selected_id().is_none());
    assert_eq!(scene.history_len(), 5);
}

#[test]
fn move_updates_only_position_and_selects_target() {
    let mut scene = SceneHistoryStore::new();
    let id = scene.add(coffee_table().rotated(0.25)).unwrap();
    scene.clear_selection();

    scene.move_item(&id, floor(1.5, -0.5)).unwrap();
    let moved = scene.selected_item().expect("moved item is selected");
    assert_eq!(moved.id, id);
    assert_eq!(moved.position, floor(1.5, -0.5));
    assert_eq!(moved.rotation, 0.25);
    assert_eq!(moved.dimensions, Dimensions::new(1.2, 0.45, 0.6));
}

#[test]
fn remove_clears_selection_and_selection_is_weak() {
    let mut scene = SceneHistoryStore::new();
    let id = scene.add(coffee_table()).unwrap();
    assert_eq!(scene.remove(&id), Mutation::Applied);
    assert!(scene.selected_id().is_none());

    let other = scene.add(coffee_table()).unwrap();
    scene.remove("missing");
    assert!(scene.selected_id().is_none());

    scene.select(&other);
    scene.undo();
    assert!(scene.selected_item().is_none());
}

#[test]
fn apply_all_replaces_collection_and_is_undoable() {
    let mut scene = SceneHistoryStore::new();
    scene.add(coffee_table()).unwrap();
    let before = scene.items().to_vec();

    let size = Dimensions::new(2.0, 0.8, 0.9);
    let layout = vec![
        coffee_table().with_id("table-1"),
        PlacedItem::new("Modern Sofa", "sofa", "Seating", size).with_id("sofa-1"),
    ];
    assert_eq!(scene.apply_all(layout.clone()).unwrap(), Mutation::Applied);
    assert_eq!(scene.items(), layout.as_slice());
    assert!(scene.selected_id().is_none());

    assert_eq!(scene.apply_all(layout).unwrap(), Mutation::Unchanged);
    assert_eq!(scene.history_len(), 3);

    scene.undo();
    assert_eq!(scene.items(), before.as_slice());
}

#[test]
fn scaling_reference_point_into_wide_room() {
    let scaled = scale_position(
        Position::new(-1.5, 0.4, 0.0),
        &RoomDimensions::new(10.0, 5.0, 3.0),
    );
    assert_eq!(scaled, Position::new(-3.0, 0.4, 0.0));
}
