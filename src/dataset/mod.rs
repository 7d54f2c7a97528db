pub mod dataset;
pub mod handle;
pub mod loader;

pub use dataset::{Dataset, LoadReport};
pub use handle::{DatasetHandle, ReloadOutcome};
pub use loader::{DatasetLoader, LoadError};
