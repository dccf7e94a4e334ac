//! `ml-data-ingestion` is the first step of a machine-learning pipeline: it loads a CSV dataset,
//! splits it into reproducible train/test subsets, and persists three artifacts for the stages
//! that follow.
//!
//! The primary entrypoint is [`ingestion::DataIngestion`].
//!
//! ## What the step does
//!
//! 1. Reads the source CSV (default `notebook/data/StudentsPerformance.csv`) into a
//!    [`types::DataSet`]. The header row becomes the [`types::Schema`]; cells are kept verbatim.
//! 2. Splits it 80/20 into train/test with a fixed seed (`42`), so repeated runs on the same input
//!    produce the same partition.
//! 3. Writes `artifacts/data.csv`, `artifacts/train.csv`, and `artifacts/test.csv`, each with a
//!    header row and no index column, creating `artifacts/` if needed.
//! 4. Returns `(train_path, test_path)`.
//!
//! Any failure is reported to the configured [`ingestion::IngestionObserver`] and returned as a
//! single [`DataIngestionError`] carrying an [`ErrorKind`], the original cause, and where it
//! happened.
//!
//! ## Quick example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use ml_data_ingestion::ingestion::{DataIngestion, DataIngestionConfig, LogObserver};
//!
//! # fn main() -> Result<(), ml_data_ingestion::DataIngestionError> {
//! let step = DataIngestion::new(DataIngestionConfig::default(), Arc::new(LogObserver));
//! let (train, test) = step.initiate_data_ingestion()?;
//! println!("train={} test={}", train.display(), test.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Splitting an in-memory dataset
//!
//! ```rust
//! use ml_data_ingestion::ingestion::{train_test_split, SplitOptions};
//! use ml_data_ingestion::types::{DataSet, Schema};
//!
//! let rows = (0..10).map(|i| vec![i.to_string(), format!("name-{i}")]).collect();
//! let ds = DataSet::new(Schema::from_names(["id", "name"]), rows);
//!
//! let (train, test) = train_test_split(&ds, &SplitOptions::default()).unwrap();
//! assert_eq!(train.row_count(), 8);
//! assert_eq!(test.row_count(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: the ingestion step, CSV I/O, splitting, configuration, and observers
//! - [`types`]: schema + in-memory dataset types
//! - [`error`]: error types

pub mod error;
pub mod ingestion;
pub mod types;

pub use error::{DataIngestionError, ErrorContext, ErrorKind, IngestionError, IngestionResult};
