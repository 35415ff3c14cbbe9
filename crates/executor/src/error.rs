use std::path::PathBuf;
use thiserror::Error;

use common::error::{Error as GraphError, LoadError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Channel sender failed: Receiver has been dropped.")]
    ChannelSendFailed,

    #[error("Graph processing error: {0}")]
    GraphError(#[from] GraphError),

    #[error("Graph load error: {0}")]
    LoadError(#[from] LoadError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("No .txt graph files found in {0}")]
    NoGraphFiles(PathBuf),

    #[error("{0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("Background task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
