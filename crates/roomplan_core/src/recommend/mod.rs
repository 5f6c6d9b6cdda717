//! Layout recommendations.
//!
//! # Responsibility
//! - Provide typed candidate layouts for a room.
//! - Scale reference layouts to the room they are offered for.
//!
//! # Invariants
//! - Providers return positions already scaled to the requested room.
//! - Item ids are unique within one recommendation.

pub mod samples;
pub mod scale;

use crate::model::recommendation::Recommendation;
use crate::model::room::RoomDimensions;

/// Source of candidate layouts.
pub trait RecommendationProvider {
    /// Returns layouts with absolute positions for `room`.
    fn recommendations(&self, room: &RoomDimensions) -> Vec<Recommendation>;

    /// Looks one layout up by id.
    fn recommendation(&self, room: &RoomDimensions, id: &str) -> Option<Recommendation> {
        self.recommendations(room)
            .into_iter()
            .find(|recommendation| recommendation.id == id)
    }
}

/// Static sample layouts scaled to the target room.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleRecommendations;

impl RecommendationProvider for SampleRecommendations {
    fn recommendations(&self, room: &RoomDimensions) -> Vec<Recommendation> {
        samples::sample_recommendations()
            .into_iter()
            .map(|recommendation| Recommendation {
                furniture: scale::scale_layout(&recommendation.furniture, room),
                ..recommendation
            })
            .collect()
    }
}
