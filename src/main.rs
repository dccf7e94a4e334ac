use std::fs;
use std::process::ExitCode;
use std::sync::Arc;

use ml_data_ingestion::ingestion::{
    CompositeObserver, DataIngestion, DataIngestionConfig, FileObserver, IngestionObserver, LogObserver,
};

const LOG_DIR: &str = "logs";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut observers: Vec<Arc<dyn IngestionObserver>> = Vec::new();
    observers.push(Arc::new(LogObserver));
    match fs::create_dir_all(LOG_DIR) {
        Ok(()) => observers.push(Arc::new(FileObserver::new(FileObserver::timestamped_path(LOG_DIR)))),
        Err(e) => log::warn!("cannot create log directory '{LOG_DIR}': {e}; logging to stderr only"),
    }

    log::info!("Starting data ingestion script...");
    let step = DataIngestion::new(
        DataIngestionConfig::default(),
        Arc::new(CompositeObserver::new(observers)),
    );

    match step.initiate_data_ingestion() {
        Ok((train_path, test_path)) => {
            log::info!(
                "Data ingestion completed - Train path: {}, Test path: {}",
                train_path.display(),
                test_path.display()
            );
            ExitCode::SUCCESS
        }
        // Already reported by the observers.
        Err(_) => ExitCode::FAILURE,
    }
}
