//! Domain Layer - project identity, lifecycle and registry
//!
//! A project is persisted either in a local project file or through the
//! remote API. Which one is decided once, from the shape of its identifier:
//! - Value Objects: `ProjectRef`, `StorageType`
//! - Entities: `Project`, `ProjectRecord`
//! - Repository Abstractions: local/remote store contracts
//! - Services: `ProjectRegistry`, one loaded instance per identifier
//!
//! No file system or network access happens here; concrete stores are
//! injected through `ProjectBackends`.

pub mod channel;
pub mod config;
pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod validation;
pub mod value_objects;

pub use channel::{ChannelConfig, ChannelLike};
pub use config::{HapifyConfig, LoggingSettings, ProjectDefaults, StorageConfig};
pub use entities::{Project, ProjectRecord, ProjectUpdate, SharedProject};
pub use errors::{ErrorCategory, ProjectError, ProjectResult};
pub use repositories::{LocalProjectStore, ProjectBackends, RawProjectConfig, RemoteProjectStore};
pub use services::ProjectRegistry;
pub use validation::{transform_validation_message, ProjectConfigValidator, ValidationIssue};
pub use value_objects::{LocalPath, ProjectRef, RemoteToken, StorageType};
