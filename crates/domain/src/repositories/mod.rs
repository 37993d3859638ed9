//! Repository Abstractions - ports for the infrastructure layer
//!
//! The domain defines the store contracts; infrastructure supplies them at
//! composition time through [`ProjectBackends`].

mod local_project_store;
mod remote_project_store;

pub use local_project_store::{LocalProjectStore, RawProjectConfig};
pub use remote_project_store::RemoteProjectStore;

#[cfg(test)]
pub use local_project_store::MockLocalProjectStore;
#[cfg(test)]
pub use remote_project_store::MockRemoteProjectStore;

use crate::validation::ProjectConfigValidator;
use std::fmt;
use std::sync::Arc;

/// Collaborators a project needs to resolve, load and save itself
#[derive(Clone)]
pub struct ProjectBackends {
    pub local: Arc<dyn LocalProjectStore>,
    pub remote: Arc<dyn RemoteProjectStore>,
    pub validator: Arc<dyn ProjectConfigValidator>,
}

impl ProjectBackends {
    pub fn new(
        local: Arc<dyn LocalProjectStore>,
        remote: Arc<dyn RemoteProjectStore>,
        validator: Arc<dyn ProjectConfigValidator>,
    ) -> Self {
        Self {
            local,
            remote,
            validator,
        }
    }
}

impl fmt::Debug for ProjectBackends {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectBackends").finish_non_exhaustive()
    }
}
