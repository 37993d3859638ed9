pub mod loader;

pub use loader::{ConfigLoader, ConfigSource};
