use super::model::ClosedGraph;
use common::error::Error;
use common::types::Path;

impl ClosedGraph {
    /// Enumerates every distinct minimum-cost vertex sequence from `start` to `end`.
    ///
    /// - No path (`L[start][end]` infinite): empty result.
    /// - `start == end`: the single path `[start]`.
    /// - Otherwise, for each `p` in `P[start][end]` (in set order) every
    ///   shortest `start → p` path is extended with `end`.
    ///
    /// The result can grow exponentially with the number of ties; nothing is
    /// pruned except predecessors already on the current expansion chain,
    /// which only exist when zero-weight or negative cycles tie with the best
    /// cost. That rule also bounds recursion depth by `n`. Callers should still
    /// check [`has_negative_cycle`](Self::has_negative_cycle) first: with an
    /// active negative cycle the costs in `L` are not path costs.
    ///
    /// # Errors
    /// Returns `Error::NodeIndexOutOfBounds` for an invalid vertex.
    pub fn all_shortest_paths(&self, start: usize, end: usize) -> Result<Vec<Path>, Error> {
        self.model().check_vertex(start)?;
        self.model().check_vertex(end)?;

        let mut on_chain = vec![false; self.num_vertices()];
        Ok(self.expand_paths(start, end, &mut on_chain))
    }

    fn expand_paths(&self, start: usize, end: usize, on_chain: &mut [bool]) -> Vec<Path> {
        if !self.distance(start, end).is_finite() {
            return Vec::new();
        }
        if start == end {
            return vec![vec![start]];
        }

        on_chain[end] = true;
        let mut paths = Vec::new();
        for pred in self.predecessors(start, end).iter() {
            if pred == end || on_chain[pred] {
                continue;
            }
            for mut path in self.expand_paths(start, pred, on_chain) {
                path.push(end);
                paths.push(path);
            }
        }
        on_chain[end] = false;

        paths
    }

    /// One representative `start → end` path, built by following the first
    /// predecessor of each vertex backward from `end`.
    ///
    /// Gives up after `2n` steps or on an empty predecessor set, which can
    /// happen when negative cycles distort `P`.
    pub fn first_path(&self, start: usize, end: usize) -> Option<Path> {
        if start >= self.num_vertices() || end >= self.num_vertices() {
            return None;
        }
        if !self.distance(start, end).is_finite() {
            return None;
        }
        if start == end {
            return Some(vec![start]);
        }

        let max_steps = self.num_vertices() * 2;
        let mut path = vec![end];
        let mut curr = end;
        for _ in 0..max_steps {
            curr = self.predecessors(start, curr).first()?;
            path.push(curr);
            if curr == start {
                path.reverse();
                return Some(path);
            }
        }
        None
    }
}
