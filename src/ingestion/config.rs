//! Fixed-default configuration for the ingestion step.

use std::path::{Path, PathBuf};

/// Directory every artifact lands in by default.
pub const ARTIFACTS_DIR: &str = "artifacts";

/// Locations the ingestion step reads from and writes to.
///
/// Use [`Default`] for the standard layout:
///
/// - source: `notebook/data/StudentsPerformance.csv`
/// - raw: `artifacts/data.csv`
/// - train: `artifacts/train.csv`
/// - test: `artifacts/test.csv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataIngestionConfig {
    source_path: PathBuf,
    raw_data_path: PathBuf,
    train_data_path: PathBuf,
    test_data_path: PathBuf,
}

impl Default for DataIngestionConfig {
    fn default() -> Self {
        Self::under("")
    }
}

impl DataIngestionConfig {
    /// The default layout rebased under `root`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let artifacts = root.join(ARTIFACTS_DIR);
        Self {
            source_path: root.join("notebook").join("data").join("StudentsPerformance.csv"),
            raw_data_path: artifacts.join("data.csv"),
            train_data_path: artifacts.join("train.csv"),
            test_data_path: artifacts.join("test.csv"),
        }
    }

    /// Replace the source dataset path, keeping the artifact paths.
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn raw_data_path(&self) -> &Path {
        &self.raw_data_path
    }

    pub fn train_data_path(&self) -> &Path {
        &self.train_data_path
    }

    pub fn test_data_path(&self) -> &Path {
        &self.test_data_path
    }

    /// Every artifact path, in write order (raw, train, test).
    pub fn artifact_paths(&self) -> [&Path; 3] {
        [
            self.raw_data_path(),
            self.train_data_path(),
            self.test_data_path(),
        ]
    }
}

/// Train/test partition parameters.
///
/// Use [`Default`] for the fixed 80/20 split with seed `42`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitOptions {
    /// Fraction of rows held out for the test subset, in `(0, 1)`.
    pub test_size: f64,
    /// Seed for the row shuffle.
    pub seed: u64,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            test_size: 0.2,
            seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{DataIngestionConfig, SplitOptions};

    #[test]
    fn default_paths_live_under_artifacts() {
        let cfg = DataIngestionConfig::default();
        assert_eq!(cfg.raw_data_path(), Path::new("artifacts").join("data.csv"));
        assert_eq!(cfg.train_data_path(), Path::new("artifacts").join("train.csv"));
        assert_eq!(cfg.test_data_path(), Path::new("artifacts").join("test.csv"));
        assert_eq!(
            cfg.source_path(),
            Path::new("notebook").join("data").join("StudentsPerformance.csv")
        );
    }

    #[test]
    fn under_rebases_every_path() {
        let cfg = DataIngestionConfig::under("/tmp/run");
        for p in cfg.artifact_paths() {
            assert!(p.starts_with("/tmp/run/artifacts"));
        }
        assert!(cfg.source_path().starts_with("/tmp/run/notebook"));
    }

    #[test]
    fn with_source_path_keeps_artifacts() {
        let cfg = DataIngestionConfig::default().with_source_path("elsewhere.csv");
        assert_eq!(cfg.source_path(), Path::new("elsewhere.csv"));
        assert_eq!(cfg.raw_data_path(), Path::new("artifacts").join("data.csv"));
    }

    #[test]
    fn split_defaults_are_80_20_seed_42() {
        let opts = SplitOptions::default();
        assert_eq!(opts.test_size, 0.2);
        assert_eq!(opts.seed, 42);
    }
}
