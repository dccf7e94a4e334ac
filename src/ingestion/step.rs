//! The ingestion step: load → split → persist.
//!
//! [`DataIngestion::initiate_data_ingestion`] reads the configured source CSV, splits it into
//! seeded train/test subsets, writes the raw/train/test artifacts, and returns the train and test
//! paths.
//!
//! - Progress is reported to the [`IngestionObserver`] given at construction.
//! - Any failure is reported to the observer (and alerted on when its severity reaches the
//!   threshold), then returned as one [`DataIngestionError`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{DataIngestionError, ErrorKind};
use crate::types::DataSet;

use super::config::{DataIngestionConfig, SplitOptions};
use super::observability::{
    Artifact, IngestionContext, IngestionEvent, IngestionObserver, IngestionSeverity, LogObserver,
};
use super::{csv, split};

const OPERATION: &str = "initiate_data_ingestion";

/// Loads, splits, and persists a dataset.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use ml_data_ingestion::ingestion::{DataIngestion, DataIngestionConfig, LogObserver};
///
/// # fn main() -> Result<(), ml_data_ingestion::DataIngestionError> {
/// let step = DataIngestion::new(DataIngestionConfig::default(), Arc::new(LogObserver));
/// let (train_path, test_path) = step.initiate_data_ingestion()?;
/// println!("train={} test={}", train_path.display(), test_path.display());
/// # Ok(())
/// # }
/// ```
pub struct DataIngestion {
    config: DataIngestionConfig,
    split: SplitOptions,
    observer: Arc<dyn IngestionObserver>,
    alert_at_or_above: IngestionSeverity,
}

impl Default for DataIngestion {
    /// Default paths, the fixed 80/20 split, and events forwarded to the `log` facade.
    fn default() -> Self {
        Self::new(DataIngestionConfig::default(), Arc::new(LogObserver))
    }
}

impl fmt::Debug for DataIngestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataIngestion")
            .field("config", &self.config)
            .field("split", &self.split)
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish_non_exhaustive()
    }
}

impl DataIngestion {
    pub fn new(config: DataIngestionConfig, observer: Arc<dyn IngestionObserver>) -> Self {
        Self {
            config,
            split: SplitOptions::default(),
            observer,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }

    /// Override the train/test split parameters.
    pub fn with_split_options(mut self, split: SplitOptions) -> Self {
        self.split = split;
        self
    }

    /// Severity at or above which failures are also sent to `on_alert`.
    pub fn with_alert_threshold(mut self, severity: IngestionSeverity) -> Self {
        self.alert_at_or_above = severity;
        self
    }

    /// Run the step and return `(train_path, test_path)` as configured.
    ///
    /// Failures are classified as:
    ///
    /// - [`ErrorKind::Load`]: the source is missing, unreadable, or malformed
    /// - [`ErrorKind::Write`]: an artifact directory or file could not be written
    /// - [`ErrorKind::Unexpected`]: the dataset could not be split (e.g. fewer than two rows)
    ///
    /// Nothing is written when loading or splitting fails.
    pub fn initiate_data_ingestion(&self) -> Result<(PathBuf, PathBuf), DataIngestionError> {
        let ctx = IngestionContext {
            operation: OPERATION,
            source: self.config.source_path().to_path_buf(),
        };
        self.emit(&ctx, IngestionEvent::Started);

        let result = self.run(&ctx);
        if let Err(e) = &result {
            let sev = severity_for_error(e);
            self.observer.on_failure(&ctx, sev, e);
            if sev >= self.alert_at_or_above {
                self.observer.on_alert(&ctx, sev, e);
            }
        }
        result
    }

    fn run(&self, ctx: &IngestionContext) -> Result<(PathBuf, PathBuf), DataIngestionError> {
        let source = self.config.source_path();
        self.emit(
            ctx,
            IngestionEvent::ReadingSource {
                path: source.to_path_buf(),
            },
        );
        let dataset = csv::read_csv_from_path(source)
            .map_err(|e| DataIngestionError::new(ErrorKind::Load, "read_source", source, e))?;
        let (rows, columns) = dataset.shape();
        self.emit(ctx, IngestionEvent::Loaded { rows, columns });

        self.emit(
            ctx,
            IngestionEvent::Splitting {
                test_size: self.split.test_size,
            },
        );
        let (train, test) = split::train_test_split(&dataset, &self.split)
            .map_err(|e| DataIngestionError::new(ErrorKind::Unexpected, "train_test_split", source, e))?;
        self.emit(
            ctx,
            IngestionEvent::SplitCompleted {
                train: train.shape(),
                test: test.shape(),
            },
        );

        if let Some(dir) = parent_dir(self.config.raw_data_path()) {
            self.emit(ctx, IngestionEvent::CreatingArtifacts { dir: dir.to_path_buf() });
        }
        for path in self.config.artifact_paths() {
            if let Some(dir) = parent_dir(path) {
                fs::create_dir_all(dir).map_err(|e| {
                    DataIngestionError::new(ErrorKind::Write, "create_artifacts_dir", dir, e.into())
                })?;
            }
        }

        let artifacts = [
            (Artifact::Raw, &dataset, self.config.raw_data_path()),
            (Artifact::Train, &train, self.config.train_data_path()),
            (Artifact::Test, &test, self.config.test_data_path()),
        ];
        for (artifact, table, path) in artifacts {
            save(table, path)?;
            self.emit(
                ctx,
                IngestionEvent::Saved {
                    artifact,
                    path: path.to_path_buf(),
                },
            );
        }

        let train_path = self.config.train_data_path().to_path_buf();
        let test_path = self.config.test_data_path().to_path_buf();
        self.emit(
            ctx,
            IngestionEvent::Completed {
                train_path: train_path.clone(),
                test_path: test_path.clone(),
            },
        );
        Ok((train_path, test_path))
    }

    fn emit(&self, ctx: &IngestionContext, event: IngestionEvent) {
        self.observer.on_event(ctx, &event);
    }
}

fn save(table: &DataSet, path: &Path) -> Result<(), DataIngestionError> {
    csv::write_csv_to_path(table, path)
        .map_err(|e| DataIngestionError::new(ErrorKind::Write, "write_artifact", path, e))
}

/// The parent directory of `path`, skipping the empty parent of bare file names.
fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

fn severity_for_error(e: &DataIngestionError) -> IngestionSeverity {
    if e.cause().is_io() {
        IngestionSeverity::Critical
    } else {
        IngestionSeverity::Error
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::parent_dir;

    #[test]
    fn parent_dir_skips_bare_file_names() {
        assert_eq!(parent_dir(Path::new("data.csv")), None);
        assert_eq!(
            parent_dir(Path::new("artifacts/data.csv")),
            Some(Path::new("artifacts"))
        );
    }
}
