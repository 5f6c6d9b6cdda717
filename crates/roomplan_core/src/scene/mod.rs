//! Scene editing state.
//!
//! # Responsibility
//! - Hold the live placed-item collection of an editing session.
//! - Record every effective change as a snapshot for undo/redo.
//!
//! # Invariants
//! - History is linear: a new edit after undo discards the redo branch.
//! - Navigating history clears selection.

pub mod history;
pub mod shared;
pub mod store;
