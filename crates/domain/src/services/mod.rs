//! Domain Services

pub mod project_registry;

pub use project_registry::ProjectRegistry;
