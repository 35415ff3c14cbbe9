use tokio::sync::mpsc::{Receiver, Sender};
use tracing::{info, warn};

use super::error::Error;
use super::types::{GraphJob, TraceSection};
use allpaths_core::ClosureSolver;
use allpaths_core::report::run_with_trace;

/// Runs the traced closure for every incoming graph and forwards the rendered
/// trace to the writer.
///
/// The closure is CPU-bound, so each one runs on Tokio's blocking pool.
/// Jobs are handled one at a time to keep sections in source order.
pub struct GraphAnalyzer<S> {
    solver: S,
    receiver: Receiver<GraphJob>,
    sender: Sender<TraceSection>,
}

impl<S> GraphAnalyzer<S>
where
    S: ClosureSolver + Clone + Send + 'static,
{
    pub fn new(solver: S, receiver: Receiver<GraphJob>, sender: Sender<TraceSection>) -> Self {
        GraphAnalyzer {
            solver,
            receiver,
            sender,
        }
    }

    pub async fn analyze_graphs(mut self) -> Result<(), Error> {
        info!("Analyzer ready.");

        while let Some(GraphJob { name, model }) = self.receiver.recv().await {
            let body = match model {
                Some(model) => {
                    let solver = self.solver.clone();
                    let (closed, trace) =
                        tokio::task::spawn_blocking(move || run_with_trace(&solver, model))
                            .await?;

                    if closed.has_negative_cycle() {
                        warn!(graph = %name, "negative cycle detected");
                    } else {
                        info!(graph = %name, vertices = closed.num_vertices(), "closure complete");
                    }
                    Some(trace)
                }
                None => None,
            };

            if self.sender.send(TraceSection { name, body }).await.is_err() {
                warn!("Analyzer shutting down: writer receiver dropped.");
                return Err(Error::ChannelSendFailed);
            }
        }

        info!("Analyzer: job stream closed.");
        Ok(())
    }
}
