//! Infrastructure Layer - concrete collaborators for the project domain
//!
//! - `storage`: file-backed local store, in-memory remote store
//! - `schema`: structural validation of local project files
//! - `config`: configuration loading from files and environment
//! - `environment`: composition root

pub mod config;
pub mod environment;
pub mod schema;
pub mod storage;

pub use config::{ConfigLoader, ConfigSource};
pub use environment::ProjectEnvironment;
pub use schema::ProjectConfigSchema;
pub use storage::{FileProjectStore, InMemoryRemoteStore, ProjectDocument};
