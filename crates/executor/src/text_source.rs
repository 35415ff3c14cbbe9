use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::mpsc::Sender;
use tracing::{info, warn};

use super::error::Error;
use super::types::{GraphJob, GraphSource};
use allpaths_core::GraphModel;
use allpaths_core::loader::parse_graph;

/// Streams graph description files (`*.txt`) from a directory in file-name
/// order, or a single file when `path` points at one.
pub struct DirectorySource {
    path: PathBuf,
}

impl DirectorySource {
    pub fn new(path: PathBuf) -> Self {
        DirectorySource { path }
    }

    async fn graph_files(&self) -> Result<Vec<PathBuf>, Error> {
        if fs::metadata(&self.path).await?.is_file() {
            return Ok(vec![self.path.clone()]);
        }

        let mut files = Vec::new();
        let mut entries = fs::read_dir(&self.path).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "txt") && entry.file_type().await?.is_file()
            {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Reads one description file; load failures are logged and collapse to `None`.
async fn load_model(path: &Path) -> Option<GraphModel> {
    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "could not read graph file");
            return None;
        }
    };

    match parse_graph(&text) {
        Ok(model) => Some(model),
        Err(e) => {
            warn!(file = %path.display(), error = %e, "could not parse graph file");
            None
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[async_trait]
impl GraphSource for DirectorySource {
    async fn run_stream(self, sender: Sender<GraphJob>) -> Result<(), Error> {
        let files = self.graph_files().await?;
        if files.is_empty() {
            return Err(Error::NoGraphFiles(self.path.clone()));
        }

        info!("DirectorySource: streaming {} graph files...", files.len());

        for file in files {
            let job = GraphJob {
                name: display_name(&file),
                model: load_model(&file).await,
            };
            if sender.send(job).await.is_err() {
                warn!("DirectorySource shutting down: analyzer receiver dropped.");
                return Err(Error::ChannelSendFailed);
            }
        }

        Ok(())
    }
}
