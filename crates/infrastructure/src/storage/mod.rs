pub mod file_project_store;
pub mod memory_remote_store;

pub use file_project_store::{FileProjectStore, ProjectDocument};
pub use memory_remote_store::InMemoryRemoteStore;
