//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate scene, catalog, recommendation and repository calls into
//!   use-case level APIs.
//! - Keep UI layers decoupled from storage details.

pub mod design_service;
pub mod session;
