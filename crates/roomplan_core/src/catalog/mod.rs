//! Furniture catalog.
//!
//! # Responsibility
//! - Supply item templates that scenes instantiate.
//! - Keep browse/filter behavior inside core.

pub mod furniture;
