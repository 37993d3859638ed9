//! Domain Entities

pub mod project;
mod project_record;

pub use project::{Project, SharedProject};
pub use project_record::{ProjectRecord, ProjectUpdate};
