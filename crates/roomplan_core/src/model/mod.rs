//! Domain model for room layouts.
//!
//! # Responsibility
//! - Define canonical data structures used by scene, storage and services.
//! - Keep validation next to the records it protects.
//!
//! # Invariants
//! - Placed items are identified by a stable `ItemId`.
//! - Saved designs are identified by a stable `DesignId`.

pub mod item;
pub mod recommendation;
pub mod room;
