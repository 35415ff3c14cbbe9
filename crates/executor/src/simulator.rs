use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc::Sender;
use tracing::info;

use super::config::SimulatorConfig;
use super::error::Error;
use super::types::{GraphJob, GraphSource};
use allpaths_core::GraphModel;
use common::types::Edge;

/// Produces random dense-ish graphs for exercising the closure.
///
/// Each ordered pair `(u, v)` with `u != v` gets an edge with probability
/// `edge_probability`, weighted uniformly in `min_weight..=max_weight`. A fixed
/// `seed` makes the batch reproducible.
pub struct SimulatorSource {
    config: SimulatorConfig,
}

impl SimulatorSource {
    pub fn new(config: SimulatorConfig) -> Self {
        SimulatorSource { config }
    }

    fn rng(&self) -> SmallRng {
        match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }

    fn random_edges(&self, rng: &mut SmallRng) -> Vec<Edge> {
        let n = self.config.num_vertices;
        let weight_range = self.config.min_weight..=self.config.max_weight;

        let mut edges = Vec::new();
        for u in 0..n {
            for v in (0..n).filter(|&v| v != u) {
                if rng.random_bool(self.config.edge_probability) {
                    edges.push((u, v, rng.random_range(weight_range.clone())));
                }
            }
        }
        edges
    }
}

#[async_trait]
impl GraphSource for SimulatorSource {
    /// Sends `total_graphs` generated graphs, then closes the stream.
    /// Backpressure comes from awaiting `sender.send()`.
    async fn run_stream(self, sender: Sender<GraphJob>) -> Result<(), Error> {
        let mut rng = self.rng();

        for idx in 0..self.config.total_graphs {
            let edges = self.random_edges(&mut rng);
            let model = GraphModel::from_edges(self.config.num_vertices, &edges)?;
            info!("Simulator generated graph {} with {} edges.", idx, edges.len());

            let job = GraphJob {
                name: format!("simulated-{idx}"),
                model: Some(model),
            };
            if sender.send(job).await.is_err() {
                info!("Simulator shutting down: analyzer receiver dropped.");
                return Err(Error::ChannelSendFailed);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::Distance;
    use tokio::sync::mpsc;

    fn sim_config(seed: Option<u64>) -> SimulatorConfig {
        SimulatorConfig {
            total_graphs: 3,
            num_vertices: 6,
            edge_probability: 0.5,
            min_weight: -2,
            max_weight: 9,
            seed,
        }
    }

    /// All generated edges stay within bounds and never form self-loops.
    #[test]
    fn test_edges_in_bounds() {
        let sim = SimulatorSource::new(sim_config(Some(1)));
        let mut rng = sim.rng();

        for _ in 0..20 {
            for (u, v, w) in sim.random_edges(&mut rng) {
                assert!(u < 6 && v < 6, "vertex out of bounds");
                assert_ne!(u, v, "self-loop generated");
                assert!((-2..=9).contains(&w), "weight out of range");
            }
        }
    }

    #[test]
    fn test_seed_makes_batches_reproducible() {
        let a = SimulatorSource::new(sim_config(Some(42)));
        let b = SimulatorSource::new(sim_config(Some(42)));

        assert_eq!(a.random_edges(&mut a.rng()), b.random_edges(&mut b.rng()));
    }

    #[test]
    fn test_zero_probability_gives_empty_graphs() {
        let mut config = sim_config(Some(3));
        config.edge_probability = 0.0;
        let sim = SimulatorSource::new(config);

        assert!(sim.random_edges(&mut sim.rng()).is_empty());
    }

    #[tokio::test]
    async fn test_stream_sends_configured_number_of_graphs() {
        let sim = SimulatorSource::new(sim_config(Some(9)));
        let (tx, mut rx) = mpsc::channel(4);

        sim.run_stream(tx).await.expect("simulation should finish");

        let mut names = Vec::new();
        while let Some(job) = rx.recv().await {
            let model = job.model.expect("generated graphs always load");
            assert_eq!(model.num_vertices(), 6);
            assert_eq!(model.distance(0, 0), Distance::Finite(0));
            names.push(job.name);
        }
        assert_eq!(names, vec!["simulated-0", "simulated-1", "simulated-2"]);
    }
}
