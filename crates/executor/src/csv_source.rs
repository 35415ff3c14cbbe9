use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;
use tokio::sync::mpsc::Sender;
use tracing::{info, warn};

use super::error::Error;
use super::types::{GraphJob, GraphSource};
use allpaths_core::GraphModel;
use common::error::Error as GraphError;
use common::types::Edge;

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_node: usize,

    #[serde(rename = "to")]
    pub to_node: usize,

    #[serde(rename = "weight")]
    pub weight: i64,
}

/// Reads a whole graph from a `from,to,weight` CSV edge list.
///
/// The file carries no vertex count, so the graph spans `0..=max index`.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: PathBuf) -> Self {
        CsvSource { path }
    }

    fn parse_csv_to_edges(&self) -> Result<Vec<Edge>, Error> {
        let file = File::open(&self.path)?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut edges = Vec::new();
        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            edges.push((record.from_node, record.to_node, record.weight));
        }
        Ok(edges)
    }

    fn build_model(&self) -> Result<GraphModel, Error> {
        let edges = self.parse_csv_to_edges()?;
        let mut num_vertices = 0;
        for &(u, v, _) in &edges {
            let highest = u.max(v);
            let needed = highest
                .checked_add(1)
                .ok_or(GraphError::NodeIndexOutOfBounds(highest))?;
            num_vertices = num_vertices.max(needed);
        }
        Ok(GraphModel::from_edges(num_vertices, &edges)?)
    }
}

#[async_trait::async_trait]
impl GraphSource for CsvSource {
    async fn run_stream(self, sender: Sender<GraphJob>) -> Result<(), Error> {
        let model = match self.build_model() {
            Ok(model) => {
                info!(
                    "CsvSource: loaded {} vertices from {}",
                    model.num_vertices(),
                    self.path.display()
                );
                Some(model)
            }
            Err(e) => {
                warn!(file = %self.path.display(), error = %e, "could not load CSV graph");
                None
            }
        };

        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());

        sender
            .send(GraphJob { name, model })
            .await
            .map_err(|_| Error::ChannelSendFailed)
    }
}
