use super::model::{ClosedGraph, GraphModel};

/// Trait for all-pairs solvers that drive a [`GraphModel`] to its closure.
pub trait ClosureSolver {
    /// Runs the relaxation to its fixed point and seals the result.
    fn close(&self, model: GraphModel) -> ClosedGraph {
        self.close_with_observer(model, &mut |_, _| {})
    }

    /// Same as [`close`](Self::close), calling `observer(k, &model)` after each
    /// outer iteration over intermediate vertex `k` has finished.
    fn close_with_observer(
        &self,
        model: GraphModel,
        observer: &mut dyn FnMut(usize, &GraphModel),
    ) -> ClosedGraph;
}
