//! Saved-design use-case service.
//!
//! # Responsibility
//! - Persist and reopen design sessions through a repository.
//! - Provide list/delete entry points for saved designs.
//!
//! # Invariants
//! - The first save of a session creates a record; later saves update it,
//!   or create it again when the record was deleted in between.
//! - Service APIs never bypass repository validation.

use crate::model::room::{DesignId, RoomDesign};
use crate::repo::design_repo::{DesignListQuery, DesignRepository, RepoError};
use crate::scene::store::{SceneConfig, SceneError};
use crate::service::session::DesignSession;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Service error for saved-design use-cases.
#[derive(Debug)]
pub enum DesignServiceError {
    /// Target design does not exist.
    DesignNotFound(DesignId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Stored layout cannot be loaded into a scene.
    Scene(SceneError),
}

impl Display for DesignServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DesignNotFound(id) => write!(f, "design not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Scene(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DesignServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DesignNotFound(_) => None,
            Self::Repo(err) => Some(err),
            Self::Scene(err) => Some(err),
        }
    }
}

impl From<RepoError> for DesignServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::DesignNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<SceneError> for DesignServiceError {
    fn from(value: SceneError) -> Self {
        Self::Scene(value)
    }
}

pub type DesignServiceResult<T> = Result<T, DesignServiceError>;

/// Saved-design facade over repository implementations.
pub struct DesignService<R: DesignRepository> {
    repo: R,
    scene_config: SceneConfig,
}

impl<R: DesignRepository> DesignService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self::with_scene_config(repo, SceneConfig::default())
    }

    /// Like [`DesignService::new`], with the scene config used by `load`.
    pub fn with_scene_config(repo: R, scene_config: SceneConfig) -> Self {
        Self { repo, scene_config }
    }

    /// Writes the session and returns the stored record.
    ///
    /// A persisted session whose record has since been deleted is stored
    /// again as a new record under the same id.
    pub fn save(&self, session: &mut DesignSession) -> DesignServiceResult<RoomDesign> {
        let started_at = Instant::now();
        let design = session.to_design();
        let mut mode = if session.is_persisted() {
            "update"
        } else {
            "create"
        };

        let result = if session.is_persisted() {
            match self.repo.update_design(&design) {
                Err(RepoError::NotFound(_)) => {
                    mode = "recreate";
                    self.repo.create_design(&design).map(|_| ())
                }
                other => other,
            }
        } else {
            self.repo.create_design(&design).map(|_| ())
        };

        match result {
            Ok(()) => {
                session.mark_persisted();
                info!(
                    "event=design_save module=service status=ok mode={mode} items={} duration_ms={}",
                    design.furniture.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(design)
            }
            Err(err) => {
                error!(
                    "event=design_save module=service status=error mode={mode} duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Reopens a saved design as a fresh editing session.
    pub fn load(&self, id: DesignId) -> DesignServiceResult<DesignSession> {
        let design = self
            .repo
            .get_design(id)?
            .ok_or(DesignServiceError::DesignNotFound(id))?;
        let session = DesignSession::from_design(design, self.scene_config)?;
        info!(
            "event=design_load module=service status=ok items={}",
            session.scene().len()
        );
        Ok(session)
    }

    pub fn get(&self, id: DesignId) -> DesignServiceResult<Option<RoomDesign>> {
        Ok(self.repo.get_design(id)?)
    }

    pub fn list(&self, query: &DesignListQuery) -> DesignServiceResult<Vec<RoomDesign>> {
        Ok(self.repo.list_designs(query)?)
    }

    pub fn delete(&self, id: DesignId) -> DesignServiceResult<()> {
        self.repo.delete_design(id)?;
        info!("event=design_delete module=service status=ok");
        Ok(())
    }
}
