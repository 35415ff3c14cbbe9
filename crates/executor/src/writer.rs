use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc::Receiver;
use tracing::info;

use super::error::Error;
use super::types::TraceSection;

/// Async consumer that appends rendered trace sections to the output file.
pub struct TraceWriter {
    path: PathBuf,
    receiver: Receiver<TraceSection>,
}

impl TraceWriter {
    pub fn new(path: PathBuf, receiver: Receiver<TraceSection>) -> Self {
        Self { path, receiver }
    }

    /// Truncates the output file, then writes each section as it arrives.
    /// Returns the number of sections written once the analyzer hangs up.
    pub async fn write_sections(mut self) -> Result<usize, Error> {
        info!("Writer ready.");

        let mut file = File::create(&self.path).await?;
        let mut written = 0;

        while let Some(section) = self.receiver.recv().await {
            file.write_all(render_section(&section).as_bytes()).await?;
            written += 1;
        }

        file.flush().await?;
        info!("Trace saved to: {}", self.path.display());
        Ok(written)
    }

    pub fn spawn_task(self) -> tokio::task::JoinHandle<Result<usize, Error>> {
        tokio::spawn(self.write_sections())
    }
}

/// Banner line, then the trace (or the load failure notice).
pub fn render_section(section: &TraceSection) -> String {
    let mut out = format!("################### {} ###################\n", section.name);
    match &section.body {
        Some(trace) => {
            out.push_str(trace);
            out.push_str("\n\n\n");
        }
        None => out.push_str("Error: Could not load file.\n\n"),
    }
    out
}
