use super::model::ClosedGraph;
use common::error::Error;
use common::types::{Distance, Path};
use tracing::{debug, warn};

/// A closed walk exhibiting a negative cycle.
///
/// Fields:
/// - `path`: vertex sequence, first and last element equal.
/// - `weight`: sum of the input edge weights along the walk, `Infinite` if a
///   step does not correspond to an input edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleWitness {
    pub path: Path,
    pub weight: Distance,
}

impl CycleWitness {
    fn from_walk(graph: &ClosedGraph, path: Path) -> Self {
        let weight = path
            .windows(2)
            .fold(Distance::Finite(0), |acc, step| {
                acc.saturating_add(graph.initial_weight(step[0], step[1]))
            });
        Self { path, weight }
    }

    /// Returns true if the walk is made of input edges and sums below zero.
    pub fn is_negative(&self) -> bool {
        self.weight.is_negative()
    }
}

impl ClosedGraph {
    /// First vertex `i` (in index order) with `L[i][i] < 0`.
    pub fn negative_vertex(&self) -> Option<usize> {
        (0..self.num_vertices()).find(|&i| self.distance(i, i).is_negative())
    }

    /// A negative cycle exists iff some self-distance dropped below zero.
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_vertex().is_some()
    }

    /// Best-effort witness for the first negative self-distance.
    ///
    /// - A negative input self-loop at that vertex is reported as `[i, i]`.
    /// - Otherwise walks backward from `P[i][i]`, always taking the first
    ///   predecessor in `P[i][curr]`, until it returns to `i`.
    ///
    /// The walk follows one representative chain only, so on graphs with
    /// overlapping negative cycles it may dead-end or wander; that is reported
    /// as a failure rather than as "no cycle".
    ///
    /// # Returns
    /// - `Ok(None)`: no negative cycle.
    /// - `Ok(Some(witness))`: a closed walk starting and ending at `i`.
    ///
    /// # Errors
    /// `Error::CycleReconstructionFailed` when a predecessor set is empty or
    /// the walk exceeds `2n` steps.
    pub fn trace_negative_cycle(&self) -> Result<Option<CycleWitness>, Error> {
        let Some(start) = self.negative_vertex() else {
            return Ok(None);
        };

        if self.initial_weight(start, start).is_negative() {
            return Ok(Some(CycleWitness::from_walk(self, vec![start, start])));
        }

        let mut curr = self
            .predecessors(start, start)
            .first()
            .ok_or(Error::CycleReconstructionFailed)?;
        let mut path = vec![curr];

        let max_steps = self.num_vertices() * 2;
        let mut steps = 0;
        while curr != start {
            if steps >= max_steps {
                warn!(start, max_steps, "cycle walk exceeded step bound");
                return Err(Error::CycleReconstructionFailed);
            }
            curr = self
                .predecessors(start, curr)
                .first()
                .ok_or(Error::CycleReconstructionFailed)?;
            path.push(curr);
            steps += 1;
        }

        path.reverse();
        if path.first() != path.last() {
            path.push(path[0]);
        }

        debug!(?path, "negative cycle rebuilt from predecessor walk");
        Ok(Some(CycleWitness::from_walk(self, path)))
    }

    /// The predecessor-walk witness as a bare vertex sequence; empty when there
    /// is no negative cycle or the walk failed.
    pub fn negative_cycle_witness(&self) -> Path {
        match self.trace_negative_cycle() {
            Ok(Some(witness)) => witness.path,
            Ok(None) | Err(_) => Vec::new(),
        }
    }

    /// Fallback reconstruction through a pivot vertex.
    ///
    /// For each `i` with `L[i][i] < 0` and each `k != i` with
    /// `L[i][k] + L[k][i] < 0`, splices the representative `i → k` and
    /// `k → i` paths (see [`first_path`](Self::first_path)) into one closed
    /// walk. Returns the first splice that succeeds.
    pub fn pivot_negative_cycle(&self) -> Option<CycleWitness> {
        let n = self.num_vertices();
        for i in (0..n).filter(|&i| self.distance(i, i).is_negative()) {
            for k in (0..n).filter(|&k| k != i) {
                let round_trip = self.distance(i, k).saturating_add(self.distance(k, i));
                if !round_trip.is_negative() {
                    continue;
                }
                let (Some(outbound), Some(inbound)) = (self.first_path(i, k), self.first_path(k, i))
                else {
                    continue;
                };

                let mut path = outbound;
                path.pop();
                path.extend(inbound);
                debug!(i, k, ?path, "negative cycle rebuilt through pivot");
                return Some(CycleWitness::from_walk(self, path));
            }
        }
        None
    }

    /// Predecessor walk first, pivot splice second.
    ///
    /// # Errors
    /// `Error::CycleReconstructionFailed` if a negative cycle exists and both
    /// strategies fail.
    pub fn find_negative_cycle(&self) -> Result<Option<CycleWitness>, Error> {
        match self.trace_negative_cycle() {
            Err(Error::CycleReconstructionFailed) => {
                warn!("predecessor walk failed, trying pivot reconstruction");
                self.pivot_negative_cycle()
                    .map(Some)
                    .ok_or(Error::CycleReconstructionFailed)
            }
            other => other,
        }
    }
}
