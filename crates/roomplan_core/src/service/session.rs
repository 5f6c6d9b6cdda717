//! Design editing session.
//!
//! # Responsibility
//! - Tie room settings (extents, wall color, floor) to one scene store.
//! - Route catalog and recommendation input into scene mutations.
//! - Snapshot the session into a `RoomDesign` record.
//!
//! # Invariants
//! - Room settings are always valid; rejected input leaves them untouched.
//! - Room settings are not part of undo/redo history.

use crate::catalog::furniture::CatalogEntry;
use crate::model::item::ItemId;
use crate::model::recommendation::Recommendation;
use crate::model::room::{
    now_epoch_ms, DesignId, FloorType, RoomDesign, RoomDimensions, RoomValidationError, WallColor,
};
use crate::recommend::RecommendationProvider;
use crate::scene::store::{Mutation, SceneConfig, SceneHistoryStore, SceneResult};
use uuid::Uuid;

/// One open room design with its editing history.
#[derive(Debug, Clone)]
pub struct DesignSession {
    id: DesignId,
    name: String,
    dimensions: RoomDimensions,
    wall_color: WallColor,
    floor_type: FloorType,
    created_at: i64,
    persisted: bool,
    scene: SceneHistoryStore,
}

impl DesignSession {
    /// Opens a blank session in a default 5x5x3 m room.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, SceneConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: SceneConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            dimensions: RoomDimensions::default(),
            wall_color: WallColor::default(),
            floor_type: FloorType::default(),
            created_at: now_epoch_ms(),
            persisted: false,
            scene: SceneHistoryStore::with_config(config),
        }
    }

    /// Reopens a saved design.
    ///
    /// History starts at an empty room followed by the loaded layout, so the
    /// load itself can be undone.
    pub fn from_design(design: RoomDesign, config: SceneConfig) -> SceneResult<Self> {
        let mut scene = SceneHistoryStore::with_config(config);
        scene.apply_all(design.furniture)?;
        Ok(Self {
            id: design.id,
            name: design.name,
            dimensions: design.dimensions,
            wall_color: design.wall_color,
            floor_type: design.floor_type,
            created_at: design.created_at,
            persisted: true,
            scene,
        })
    }

    pub fn id(&self) -> DesignId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn dimensions(&self) -> RoomDimensions {
        self.dimensions
    }

    pub fn wall_color(&self) -> &WallColor {
        &self.wall_color
    }

    pub fn floor_type(&self) -> FloorType {
        self.floor_type
    }

    /// Whether this session has been written to storage at least once.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub(crate) fn mark_persisted(&mut self) {
        self.persisted = true;
    }

    pub fn scene(&self) -> &SceneHistoryStore {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneHistoryStore {
        &mut self.scene
    }

    /// Resizes the room. Placed items keep their coordinates.
    pub fn set_dimensions(
        &mut self,
        dimensions: RoomDimensions,
    ) -> Result<(), RoomValidationError> {
        dimensions.validate()?;
        self.dimensions = dimensions;
        Ok(())
    }

    pub fn set_wall_color(&mut self, value: &str) -> Result<(), RoomValidationError> {
        self.wall_color = WallColor::parse(value)?;
        Ok(())
    }

    pub fn set_floor_type(&mut self, floor_type: FloorType) {
        self.floor_type = floor_type;
    }

    /// Places a fresh instance of a catalog template.
    pub fn add_from_catalog(&mut self, entry: &CatalogEntry) -> SceneResult<ItemId> {
        self.scene.add(entry.instantiate())
    }

    /// Layouts from `provider` sized for the current room.
    pub fn recommendations(&self, provider: &impl RecommendationProvider) -> Vec<Recommendation> {
        provider.recommendations(&self.dimensions)
    }

    /// Installs a recommended layout as one undoable step.
    pub fn apply_recommendation(
        &mut self,
        recommendation: &Recommendation,
    ) -> SceneResult<Mutation> {
        self.scene.apply_all(recommendation.furniture.clone())
    }

    /// Snapshot of the current state, stamped with the current time.
    pub fn to_design(&self) -> RoomDesign {
        RoomDesign {
            id: self.id,
            name: self.name.clone(),
            dimensions: self.dimensions,
            furniture: self.scene.items().to_vec(),
            wall_color: self.wall_color.clone(),
            floor_type: self.floor_type,
            created_at: self.created_at,
            updated_at: now_epoch_ms().max(self.created_at),
        }
    }
}
