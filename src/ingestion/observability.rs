//! Progress and failure reporting for the ingestion step.
//!
//! The step never writes to a global sink. It is handed an [`IngestionObserver`] and reports each
//! milestone as an [`IngestionEvent`], and any failure with an [`IngestionSeverity`].

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::DataIngestionError;

/// Severity classification used for failure callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (the step failed on its input).
    Error,
    /// Critical error (I/O or other infrastructure failures).
    Critical,
}

/// Context about an ingestion run.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// Name of the running operation.
    pub operation: &'static str,
    /// The source dataset path.
    pub source: PathBuf,
}

/// One of the three persisted tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// The full dataset as loaded.
    Raw,
    /// The train subset.
    Train,
    /// The test subset.
    Test,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Raw => "Raw data",
            Self::Train => "Train data",
            Self::Test => "Test data",
        };
        f.write_str(s)
    }
}

/// Milestones reported while the step runs.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestionEvent {
    Started,
    ReadingSource { path: PathBuf },
    Loaded { rows: usize, columns: usize },
    Splitting { test_size: f64 },
    SplitCompleted { train: (usize, usize), test: (usize, usize) },
    CreatingArtifacts { dir: PathBuf },
    Saved { artifact: Artifact, path: PathBuf },
    Completed { train_path: PathBuf, test_path: PathBuf },
}

impl fmt::Display for IngestionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => write!(f, "Entered the DataIngestion method"),
            Self::ReadingSource { path } => write!(f, "Reading dataset from {}", path.display()),
            Self::Loaded { rows, columns } => {
                write!(f, "Dataset loaded successfully with shape: ({rows}, {columns})")
            }
            Self::Splitting { test_size } => {
                let test_pct = (test_size * 100.0).round() as u32;
                write!(f, "Performing train-test split ({}-{test_pct})", 100 - test_pct.min(100))
            }
            Self::SplitCompleted { train, test } => write!(
                f,
                "Train-test split completed - Train: ({}, {}), Test: ({}, {})",
                train.0, train.1, test.0, test.1
            ),
            Self::CreatingArtifacts { dir } => write!(
                f,
                "Creating artifacts directory {} and saving data files",
                dir.display()
            ),
            Self::Saved { artifact, path } => write!(f, "{artifact} saved to: {}", path.display()),
            Self::Completed {
                train_path,
                test_path,
            } => write!(
                f,
                "Data ingestion completed successfully! Train path: {}, Test path: {}",
                train_path.display(),
                test_path.display()
            ),
        }
    }
}

/// Observer interface for ingestion progress and outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait IngestionObserver: Send + Sync {
    /// Called at each milestone of a run.
    fn on_event(&self, _ctx: &IngestionContext, _event: &IngestionEvent) {}

    /// Called when the run fails.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &DataIngestionError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &DataIngestionError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl IngestionObserver for NoopObserver {}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_event(&self, ctx: &IngestionContext, event: &IngestionEvent) {
        for o in &self.observers {
            o.on_event(ctx, event);
        }
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &DataIngestionError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &DataIngestionError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Forwards events to the [`log`] facade.
///
/// Milestones go out at `info`, failures at `warn` or `error` depending on severity.
#[derive(Debug, Default)]
pub struct LogObserver;

impl IngestionObserver for LogObserver {
    fn on_event(&self, _ctx: &IngestionContext, event: &IngestionEvent) {
        log::info!("{event}");
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &DataIngestionError) {
        let level = match severity {
            IngestionSeverity::Info => log::Level::Info,
            IngestionSeverity::Warning => log::Level::Warn,
            IngestionSeverity::Error | IngestionSeverity::Critical => log::Level::Error,
        };
        log::log!(
            level,
            "Error occurred during data ingestion: {error} (operation={} severity={severity:?})",
            ctx.operation
        );
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &DataIngestionError) {
        log::error!(
            "[ALERT] data ingestion failed: {error} (operation={} severity={severity:?} source={})",
            ctx.operation,
            ctx.source.display()
        );
    }
}

/// Appends ingestion events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored. The parent
    /// directory is not created.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// A timestamped log file name under `dir`, e.g. `logs/ingestion-1700000000.log`.
    pub fn timestamped_path(dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(format!("ingestion-{}.log", unix_ts()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl IngestionObserver for FileObserver {
    fn on_event(&self, ctx: &IngestionContext, event: &IngestionEvent) {
        self.append_line(&format!("{} INFO {} - {event}", unix_ts(), ctx.operation));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &DataIngestionError) {
        self.append_line(&format!(
            "{} ERROR {} - severity={:?} Error occurred during data ingestion: {}",
            unix_ts(),
            ctx.operation,
            severity,
            error
        ));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &DataIngestionError) {
        self.append_line(&format!(
            "{} ALERT {} - severity={:?} source={} err={}",
            unix_ts(),
            ctx.operation,
            severity,
            ctx.source.display(),
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
