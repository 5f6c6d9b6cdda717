//! Core domain logic for roomplan.
//! This crate is the single source of truth for scene and design invariants.

pub mod catalog;
pub mod db;
pub mod logging;
pub mod model;
pub mod recommend;
pub mod repo;
pub mod scene;
pub mod search;
pub mod service;

pub use catalog::furniture::{CatalogEntry, CatalogQuery};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::item::{Dimensions, ItemId, ItemValidationError, PlacedItem, Position};
pub use model::recommendation::Recommendation;
pub use model::room::{
    DesignId, FloorType, RoomDesign, RoomDimensions, RoomValidationError, WallColor,
};
pub use recommend::scale::{scale_layout, scale_position, REFERENCE_ROOM_SIZE};
pub use recommend::{RecommendationProvider, SampleRecommendations};
pub use repo::design_repo::{
    DesignListQuery, DesignRepository, RepoError, RepoResult, SqliteDesignRepository,
};
pub use scene::history::{HistoryLog, HistorySnapshot};
pub use scene::shared::SharedScene;
pub use scene::store::{
    Mutation, SceneConfig, SceneError, SceneHistoryStore, SceneResult, DEFAULT_HISTORY_LIMIT,
};
pub use search::gallery::{search_gallery, GalleryEntry, GalleryQuery};
pub use service::design_service::{DesignService, DesignServiceError, DesignServiceResult};
pub use service::session::DesignSession;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
