//! Search entry points.
//!
//! # Responsibility
//! - Expose query APIs over browsable showcase data.
//! - Keep result shaping inside core.

pub mod gallery;
