//! Domain Value Objects - immutable identity concepts

pub mod project_ref;
mod storage_type;

pub use project_ref::{LocalPath, ProjectRef, RemoteToken};
pub use storage_type::StorageType;
