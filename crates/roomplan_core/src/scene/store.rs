//! Scene store with undo/redo history.
//!
//! # Responsibility
//! - Own the authoritative list of placed items for one editing session.
//! - Provide mutation primitives that update the live list and the history
//!   log in one step.
//!
//! # Invariants
//! - The live item list is always the snapshot under the history cursor.
//! - Item ids are unique within every snapshot.
//! - Only mutations that change the list append a snapshot.
//! - Selection is an id re-resolved on read and never part of history.

use crate::model::item::{generate_item_id, ItemId, ItemValidationError, PlacedItem, Position};
use crate::scene::history::{HistoryLog, HistorySnapshot};
use log::debug;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default number of snapshots retained by a scene.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Scene tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneConfig {
    /// Maximum number of snapshots kept in the log, including the current one.
    pub history_limit: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Outcome of a mutation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// The collection changed and a snapshot was recorded.
    Applied,
    /// Target exists but the new value equals the old one.
    Unchanged,
    /// No item with the given id.
    NotFound,
}

impl Mutation {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Rejected scene mutations. Nothing changes when one is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Provided id already exists in the target collection.
    DuplicateId(ItemId),
    /// Item failed validation.
    InvalidItem(ItemValidationError),
    /// Move/rotate argument is not a usable value.
    InvalidValue(ItemValidationError),
}

impl Display for SceneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "item id already placed: {id}"),
            Self::InvalidItem(err) => write!(f, "invalid item: {err}"),
            Self::InvalidValue(err) => write!(f, "invalid value: {err}"),
        }
    }
}

impl Error for SceneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateId(_) => None,
            Self::InvalidItem(err) | Self::InvalidValue(err) => Some(err),
        }
    }
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Placed items plus a bounded linear undo/redo log.
#[derive(Debug, Clone)]
pub struct SceneHistoryStore {
    log: HistoryLog,
    selected: Option<ItemId>,
}

impl Default for SceneHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneHistoryStore {
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            log: HistoryLog::new(config.history_limit),
            selected: None,
        }
    }

    /// Live item list in placement order.
    pub fn items(&self) -> &[PlacedItem] {
        self.log.current().items()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn item(&self, id: &str) -> Option<&PlacedItem> {
        self.items().iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.item(id).is_some()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Selected item resolved against the live list.
    pub fn selected_item(&self) -> Option<&PlacedItem> {
        self.item(self.selected.as_deref()?)
    }

    /// Focuses an item. Returns `false` and clears selection when absent.
    pub fn select(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.selected = Some(id.to_string());
            true
        } else {
            self.selected = None;
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.log.len()
    }

    pub fn history_index(&self) -> usize {
        self.log.cursor()
    }

    pub fn snapshot_at(&self, index: usize) -> Option<&HistorySnapshot> {
        self.log.get(index)
    }

    /// Places an item and selects it.
    ///
    /// A blank id is replaced by a generated one. Returns the final id.
    ///
    /// # Errors
    /// - `DuplicateId` when the provided id is already placed.
    /// - `InvalidItem` when the item fails validation.
    pub fn add(&mut self, mut item: PlacedItem) -> SceneResult<ItemId> {
        item.validate().map_err(SceneError::InvalidItem)?;
        if item.has_id() {
            if self.contains(&item.id) {
                debug!(
                    "event=scene_mutation module=scene op=add status=rejected reason=duplicate_id"
                );
                return Err(SceneError::DuplicateId(item.id));
            }
        } else {
            item.id = self.fresh_id();
        }

        let id = item.id.clone();
        let mut next = self.items().to_vec();
        next.push(item);
        self.commit(next, "add");
        self.selected = Some(id.clone());
        Ok(id)
    }

    /// Removes the item with `id`. Always clears selection.
    pub fn remove(&mut self, id: &str) -> Mutation {
        self.selected = None;
        let Some(index) = self.index_of(id) else {
            debug!("event=scene_mutation module=scene op=remove status=noop reason=not_found");
            return Mutation::NotFound;
        };

        let mut next = self.items().to_vec();
        next.remove(index);
        self.commit(next, "remove");
        Mutation::Applied
    }

    /// Replaces the position of one item.
    ///
    /// Selection follows the target, or is cleared when it is absent.
    pub fn move_item(&mut self, id: &str, position: Position) -> SceneResult<Mutation> {
        if !position.is_finite() {
            return Err(SceneError::InvalidValue(
                ItemValidationError::NonFinitePosition(position),
            ));
        }
        Ok(self.update_item(id, "move", |item| item.position = position))
    }

    /// Replaces the rotation of one item. Same selection policy as
    /// [`SceneHistoryStore::move_item`].
    pub fn rotate(&mut self, id: &str, rotation: f64) -> SceneResult<Mutation> {
        if !rotation.is_finite() {
            return Err(SceneError::InvalidValue(
                ItemValidationError::NonFiniteRotation(rotation),
            ));
        }
        Ok(self.update_item(id, "rotate", |item| item.rotation = rotation))
    }

    /// Replaces the whole collection and clears selection.
    ///
    /// Blank ids are generated; the rest must be unique within `items`.
    pub fn apply_all(&mut self, items: Vec<PlacedItem>) -> SceneResult<Mutation> {
        let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
        let mut next = Vec::with_capacity(items.len());
        for mut item in items {
            item.validate().map_err(SceneError::InvalidItem)?;
            if !item.has_id() {
                item.id = generate_unique_id(&seen);
            }
            if !seen.insert(item.id.clone()) {
                return Err(SceneError::DuplicateId(item.id));
            }
            next.push(item);
        }

        self.selected = None;
        if next.as_slice() == self.items() {
            debug!("event=scene_mutation module=scene op=apply_all status=noop reason=unchanged");
            return Ok(Mutation::Unchanged);
        }
        self.commit(next, "apply_all");
        Ok(Mutation::Applied)
    }

    /// Steps back one snapshot. No-op at the start of history.
    pub fn undo(&mut self) -> bool {
        if !self.log.undo() {
            return false;
        }
        self.selected = None;
        debug!(
            "event=scene_history module=scene op=undo status=ok cursor={} history_len={}",
            self.log.cursor(),
            self.log.len()
        );
        true
    }

    /// Steps forward one snapshot. No-op at the end of history.
    pub fn redo(&mut self) -> bool {
        if !self.log.redo() {
            return false;
        }
        self.selected = None;
        debug!(
            "event=scene_history module=scene op=redo status=ok cursor={} history_len={}",
            self.log.cursor(),
            self.log.len()
        );
        true
    }

    fn update_item(
        &mut self,
        id: &str,
        op: &'static str,
        edit: impl FnOnce(&mut PlacedItem),
    ) -> Mutation {
        let Some(index) = self.index_of(id) else {
            self.selected = None;
            debug!("event=scene_mutation module=scene op={op} status=noop reason=not_found");
            return Mutation::NotFound;
        };

        let mut updated = self.items()[index].clone();
        edit(&mut updated);
        self.selected = Some(updated.id.clone());
        if updated == self.items()[index] {
            debug!("event=scene_mutation module=scene op={op} status=noop reason=unchanged");
            return Mutation::Unchanged;
        }

        let mut next = self.items().to_vec();
        next[index] = updated;
        self.commit(next, op);
        Mutation::Applied
    }

    fn commit(&mut self, next: Vec<PlacedItem>, op: &'static str) {
        let discarded = self.log.push(HistorySnapshot::new(next));
        debug!(
            "event=scene_mutation module=scene op={op} status=ok items={} history_len={} cursor={} discarded_redo={discarded}",
            self.items().len(),
            self.log.len(),
            self.log.cursor()
        );
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items().iter().position(|item| item.id == id)
    }

    fn fresh_id(&self) -> ItemId {
        loop {
            let candidate = generate_item_id();
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}

fn generate_unique_id(taken: &HashSet<String>) -> ItemId {
    loop {
        let candidate = generate_item_id();
        if !taken.contains(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Mutation, SceneConfig, SceneError, SceneHistoryStore};
    use crate::model::item::{Dimensions, PlacedItem, Position};

    fn sofa() -> PlacedItem {
        let size = Dimensions::new(2.0, 0.8, 0.9);
        PlacedItem::new("Modern Sofa", "sofa", "Seating", size)
    }

    #[test]
    fn add_assigns_id_and_selects() {
        let mut scene = SceneHistoryStore::new();
        let id = scene.add(sofa()).unwrap();

        assert!(!id.is_empty());
        assert_eq!(scene.selected_id(), Some(id.as_str()));
        assert_eq!(scene.history_len(), 2);
        assert!(scene.can_undo());
    }

    #[test]
    fn add_rejects_duplicate_provided_id() {
        let mut scene = SceneHistoryStore::new();
        scene.add(sofa().with_id("sofa-1")).unwrap();

        let err = scene.add(sofa().with_id("sofa-1")).unwrap_err();
        assert_eq!(err, SceneError::DuplicateId("sofa-1".to_string()));
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.history_len(), 2);
    }

    #[test]
    fn rotate_to_same_value_records_nothing() {
        let mut scene = SceneHistoryStore::new();
        let id = scene.add(sofa()).unwrap();
        scene.clear_selection();

        assert_eq!(scene.rotate(&id, 0.0).unwrap(), Mutation::Unchanged);
        assert_eq!(scene.history_len(), 2);
        assert_eq!(scene.selected_id(), Some(id.as_str()));
    }

    #[test]
    fn move_rejects_non_finite_position() {
        let mut scene = SceneHistoryStore::new();
        let id = scene.add(sofa()).unwrap();

        let err = scene
            .move_item(&id, Position::new(0.0, f64::NAN, 0.0))
            .unwrap_err();
        assert!(matches!(err, SceneError::InvalidValue(_)));
        assert_eq!(scene.history_len(), 2);
    }

    #[test]
    fn history_limit_bounds_log() {
        let mut scene = SceneHistoryStore::with_config(SceneConfig { history_limit: 3 });
        let id = scene.add(sofa()).unwrap();
        for step in 1..=5 {
            scene
                .move_item(&id, Position::new(f64::from(step), 0.4, 0.0))
                .unwrap();
        }

        assert_eq!(scene.history_len(), 3);
        assert_eq!(scene.history_index(), 2);
        assert!(scene.undo());
        assert!(scene.undo());
        assert!(!scene.undo());
        assert_eq!(scene.item(&id).unwrap().position.x, 3.0);
    }

    #[test]
    fn apply_all_rejects_duplicate_ids_without_side_effects() {
        let mut scene = SceneHistoryStore::new();
        let id = scene.add(sofa()).unwrap();

        let layout = vec![sofa().with_id("a"), sofa().with_id("a")];
        let err = scene.apply_all(layout).unwrap_err();
        assert_eq!(err, SceneError::DuplicateId("a".to_string()));
        assert_eq!(scene.selected_id(), Some(id.as_str()));
        assert_eq!(scene.history_len(), 2);
    }
}
