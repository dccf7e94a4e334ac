//! Ingestion step and its building blocks.
//!
//! Most callers should use [`DataIngestion`] (from [`step`]) which:
//!
//! - loads the configured source CSV into an in-memory [`crate::types::DataSet`]
//! - splits it into seeded train/test subsets
//! - writes the raw/train/test artifacts and returns the train/test paths
//! - reports progress and failures to an [`IngestionObserver`]
//!
//! The pieces are also available on their own under:
//! - [`csv`]
//! - [`split`]
//! - [`config`]

pub mod config;
pub mod csv;
pub mod observability;
pub mod split;
pub mod step;

pub use config::{ARTIFACTS_DIR, DataIngestionConfig, SplitOptions};
pub use observability::{
    Artifact, CompositeObserver, FileObserver, IngestionContext, IngestionEvent, IngestionObserver,
    IngestionSeverity, LogObserver, NoopObserver,
};
pub use split::train_test_split;
pub use step::DataIngestion;
