//! ProjectRegistry - one live project per identifier
//!
//! Owned explicitly and shared by handle. The first access to an identifier
//! publishes a shared load future; every concurrent caller awaits that same
//! future and receives its result, success or failure. construct -> classify
//! -> load therefore runs once, and the instance is only visible after it
//! finished.

use futures::future::{BoxFuture, FutureExt, Shared};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::entities::{Project, SharedProject};
use crate::errors::ProjectResult;
use crate::repositories::ProjectBackends;

type PendingLoad = Shared<BoxFuture<'static, ProjectResult<SharedProject>>>;

enum Slot {
    Loading(PendingLoad),
    Ready(SharedProject),
}

pub struct ProjectRegistry {
    backends: ProjectBackends,
    slots: Mutex<HashMap<String, Slot>>,
}

impl ProjectRegistry {
    pub fn new(backends: ProjectBackends) -> Self {
        Self {
            backends,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn backends(&self) -> &ProjectBackends {
        &self.backends
    }

    /// Return the loaded project for `identifier`, constructing and loading
    /// it on first access.
    ///
    /// Callers arriving while a load is in flight share its outcome. A failed
    /// load caches nothing; only a later call starts a new one.
    pub async fn get_instance(&self, identifier: &str) -> ProjectResult<SharedProject> {
        let pending = {
            let mut slots = self.slots.lock().await;
            match slots.get(identifier) {
                Some(Slot::Ready(project)) => {
                    debug!(project = identifier, "Registry hit");
                    return Ok(project.clone());
                }
                Some(Slot::Loading(pending)) => {
                    debug!(project = identifier, "Registry joining in-flight load");
                    pending.clone()
                }
                None => {
                    debug!(project = identifier, "Registry miss, loading project");
                    let pending =
                        load_project(self.backends.clone(), identifier.to_string()).shared();
                    slots.insert(identifier.to_string(), Slot::Loading(pending.clone()));
                    pending
                }
            }
        };

        let result = pending.clone().await;
        self.settle(identifier, &pending, &result).await;
        result
    }

    /// Whether a loaded instance exists for `identifier`
    pub async fn contains(&self, identifier: &str) -> bool {
        self.cached(identifier).await.is_some()
    }

    /// The loaded instance for `identifier`, without triggering a load
    pub async fn cached(&self, identifier: &str) -> Option<SharedProject> {
        let slots = self.slots.lock().await;
        match slots.get(identifier) {
            Some(Slot::Ready(project)) => Some(project.clone()),
            _ => None,
        }
    }

    /// Number of loaded instances
    pub async fn len(&self) -> usize {
        let slots = self.slots.lock().await;
        slots
            .values()
            .filter(|slot| matches!(slot, Slot::Ready(_)))
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    // First caller to finish replaces the in-flight slot: the instance on
    // success, nothing on failure. Later finishers find it already settled.
    async fn settle(
        &self,
        identifier: &str,
        pending: &PendingLoad,
        result: &ProjectResult<SharedProject>,
    ) {
        let mut slots = self.slots.lock().await;
        let in_flight = matches!(
            slots.get(identifier),
            Some(Slot::Loading(current)) if current.ptr_eq(pending)
        );
        if !in_flight {
            return;
        }
        match result {
            Ok(project) => {
                slots.insert(identifier.to_string(), Slot::Ready(project.clone()));
            }
            Err(_) => {
                slots.remove(identifier);
            }
        }
    }
}

fn load_project(
    backends: ProjectBackends,
    identifier: String,
) -> BoxFuture<'static, ProjectResult<SharedProject>> {
    async move {
        let mut project = Project::new(backends, &identifier)?;
        project.load().await?;
        Ok(Arc::new(RwLock::new(project)))
    }
    .boxed()
}
