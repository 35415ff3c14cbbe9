use std::path::PathBuf;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tracing::info;

use super::analyzer::GraphAnalyzer;
use super::config::Config;
use super::csv_source::CsvSource;
use super::error::Error;
use super::producer::Producer;
use super::simulator::SimulatorSource;
use super::text_source::DirectorySource;
use super::types::{DataSource, GraphJob, JoinHandleResult, TraceSection};
use super::writer::TraceWriter;
use allpaths_core::FloydWarshall;

/// Streams every graph of `source` through the traced closure into `output`.
///
/// Three tasks joined by bounded channels: producer -> analyzer -> writer.
/// Returns the number of trace sections written.
pub async fn run_trace_pipeline(
    source: &DataSource,
    output: PathBuf,
    config: &Config,
) -> Result<usize, Error> {
    let capacity = config.trace.channel_capacity;
    let (job_tx, job_rx) = mpsc::channel::<GraphJob>(capacity);
    let (section_tx, section_rx) = mpsc::channel::<TraceSection>(capacity);

    let producer_handle = spawn_producer(source, job_tx, config);
    let analyzer_handle = spawn_analyzer(job_rx, section_tx);
    let writer_handle = TraceWriter::new(output, section_rx).spawn_task();

    let (producer, analyzer, writer) =
        tokio::join!(producer_handle, analyzer_handle, writer_handle);

    producer??;
    analyzer??;
    let written = writer??;

    info!("Pipeline shut down after {} graphs.", written);
    Ok(written)
}

pub fn spawn_producer(
    source: &DataSource,
    sender: Sender<GraphJob>,
    config: &Config,
) -> JoinHandleResult {
    match source {
        DataSource::Text(path) => {
            info!("Starting DirectorySource producer task...");
            Producer::new(DirectorySource::new(path.clone())).spawn(sender)
        }
        DataSource::Csv(path) => {
            info!("Starting CsvSource producer task...");
            Producer::new(CsvSource::new(path.clone())).spawn(sender)
        }
        DataSource::Sim => {
            info!("Starting SimulatorSource producer task...");
            Producer::new(SimulatorSource::new(config.simulator.clone())).spawn(sender)
        }
    }
}

/// Spawn analyzer task
fn spawn_analyzer(receiver: Receiver<GraphJob>, sender: Sender<TraceSection>) -> JoinHandleResult {
    let analyzer = GraphAnalyzer::new(FloydWarshall, receiver, sender);
    tokio::spawn(analyzer.analyze_graphs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::TempDir;

    #[tokio::test]
    async fn traces_a_directory_of_graphs() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("1_path.txt"), "3\n3\n0 1 1\n1 2 2\n0 2 10\n").unwrap();
        std::fs::write(dir.path().join("2_cycle.txt"), "2\n2\n0 1 1\n1 0 -2\n").unwrap();
        std::fs::write(dir.path().join("3_bad.txt"), "two\n").unwrap();
        let output = dir.path().join("trace_execution.txt");

        let config = load_config(None).unwrap();
        let source = DataSource::Text(dir.path().to_path_buf());
        let written = run_trace_pipeline(&source, output.clone(), &config)
            .await
            .expect("pipeline should succeed");
        assert_eq!(written, 3);

        let contents = std::fs::read_to_string(&output).unwrap();
        assert!(contents.starts_with("################### 1_path.txt ###################\nINITIAL STATE:"));
        assert!(contents.contains("RESULT: No negative cycles."));
        assert!(contents.contains("Cycle Path: [0, 1, 0]"));
        assert!(contents.contains(
            "################### 3_bad.txt ###################\nError: Could not load file.\n\n"
        ));
    }

    #[tokio::test]
    async fn traces_simulated_graphs() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let output = dir.path().join("sim_trace.txt");

        let mut config = load_config(None).unwrap();
        config.simulator.seed = Some(11);
        config.simulator.total_graphs = 2;

        let written = run_trace_pipeline(&DataSource::Sim, output.clone(), &config)
            .await
            .unwrap();
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(&output).unwrap();
        assert!(contents.contains("simulated-0"));
        assert!(contents.contains("simulated-1"));
    }

    #[tokio::test]
    async fn producer_failure_is_reported() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let output = dir.path().join("trace.txt");
        let config = load_config(None).unwrap();

        let result =
            run_trace_pipeline(&DataSource::Text(dir.path().join("empty")), output, &config).await;
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
