use std::path::PathBuf;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

use super::error::Error;
use allpaths_core::GraphModel;

/// A trait defining the contract for any source that produces graphs and
/// streams them into the trace pipeline.
///
/// This keeps the Producer task independent of where graphs come from
/// (description files, CSV edge lists, generated data).
///
/// The trait bounds (`Send`, `Sync`, `'static`) are required so the
/// implementation can run on the multi-threaded Tokio runtime.
#[async_trait::async_trait]
pub trait GraphSource: Send + Sync + 'static {
    async fn run_stream(self, sender: Sender<GraphJob>) -> Result<(), Error>;
}

/// One graph to analyze. `model` is `None` when the input could not be loaded;
/// the reason has already been logged by the source.
#[derive(Debug)]
pub struct GraphJob {
    pub name: String,
    pub model: Option<GraphModel>,
}

/// Rendered trace for one graph, `body` is `None` for a failed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceSection {
    pub name: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A directory of graph description files, or a single file.
    Text(PathBuf),
    Csv(PathBuf),
    Sim,
}

pub type JoinHandleResult = JoinHandle<Result<(), Error>>;
