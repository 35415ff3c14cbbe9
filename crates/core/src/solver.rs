use super::model::{ClosedGraph, GraphModel};
use super::traits::ClosureSolver;
use common::types::Distance;
use tracing::{debug, trace};

/// Solver implementing Floyd-Warshall with tie-aware predecessor sets.
///
/// Besides the usual distance update, every pair keeps *all* immediate
/// predecessors that realise the current best cost, so the path enumerator can
/// later rebuild every optimal route instead of a single one.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Relaxes every ordered pair `(i, j)` through intermediate vertex `k`.
    ///
    /// For a finite candidate `c = L[i][k] + L[k][j]`:
    /// - `c < L[i][j]`: take the new cost and replace `P[i][j]` with `P[k][j]`.
    /// - `c == L[i][j]`: merge `P[k][j]` into `P[i][j]`, keeping earlier entries.
    ///
    /// `L[i][k]` is re-read for every `j` because it can itself drop during
    /// this pass when `L[k][k]` is negative.
    fn relax_through(model: &mut GraphModel, k: usize) {
        let n = model.num_vertices;
        for i in 0..n {
            for j in 0..n {
                let (Distance::Finite(d_ik), Distance::Finite(d_kj)) =
                    (model.distances[(i, k)], model.distances[(k, j)])
                else {
                    continue;
                };

                let candidate = Distance::Finite(d_ik.saturating_add(d_kj));
                let current = model.distances[(i, j)];

                if candidate < current {
                    model.distances[(i, j)] = candidate;
                    if i != k {
                        let via = model.predecessors[(k, j)].clone();
                        model.predecessors[(i, j)] = via;
                    }
                    trace!(i, j, k, %candidate, "improved");
                } else if candidate == current && i != k {
                    let via = model.predecessors[(k, j)].clone();
                    model.predecessors[(i, j)].merge(&via);
                }
            }
        }
    }
}

impl ClosureSolver for FloydWarshall {
    /// Runs the `k, i, j` triple loop, `k` outermost.
    ///
    /// The order is load-bearing: iteration `k` composes paths whose
    /// intermediate vertices all lie in `0..=k`, using what iterations
    /// `0..k` produced. Always performs exactly `n³` relaxation attempts.
    fn close_with_observer(
        &self,
        mut model: GraphModel,
        observer: &mut dyn FnMut(usize, &GraphModel),
    ) -> ClosedGraph {
        let n = model.num_vertices;
        debug!(num_vertices = n, "starting closure");

        for k in 0..n {
            Self::relax_through(&mut model, k);
            debug!(k, "finished intermediate vertex");
            observer(k, &model);
        }

        ClosedGraph::seal(model)
    }
}
