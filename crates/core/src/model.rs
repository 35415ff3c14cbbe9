use super::matrix::DenseMatrix;
use super::pred_set::PredecessorSet;
use common::error::Error;
use common::types::{Distance, Edge};

/// Largest vertex count a model accepts. Three dense matrices of this side
/// still fit comfortably in memory.
pub const MAX_VERTICES: usize = 1024;

/// Dense all-pairs state of a weighted directed graph.
///
/// Holds three `n × n` matrices:
/// - `distances` (L): best known cost for every ordered pair, `Infinite` when
///   no path is known yet.
/// - `predecessors` (P): for every pair `(i, j)`, the immediate predecessors of
///   `j` on currently optimal `i → j` paths, in first-seen order.
/// - `initial` (A): the input edges verbatim, never touched after construction.
///
/// A model is mutated only by a closure solver, which consumes it and hands
/// back a [`ClosedGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphModel {
    pub(crate) num_vertices: usize,
    pub(crate) distances: DenseMatrix<Distance>,
    pub(crate) predecessors: DenseMatrix<PredecessorSet>,
    pub(crate) initial: DenseMatrix<Distance>,
}

impl GraphModel {
    /// Builds the initial matrices from a list of edges `(u, v, w)`.
    ///
    /// The diagonal starts at zero cost and every other pair at `Infinite`.
    /// Each edge sets `L[u][v] = A[u][v] = w` and records `u` as the only
    /// predecessor of the direct edge. When the same `(u, v)` pair appears more
    /// than once the later edge wins. A self-loop `(i, i, w)` overwrites the
    /// zero diagonal.
    ///
    /// # Errors
    /// - `Error::TooManyVertices` if `num_vertices²` overflows or
    ///   `num_vertices` exceeds [`MAX_VERTICES`].
    /// - `Error::NodeIndexOutOfBounds` if any endpoint is `>= num_vertices`.
    ///
    /// No partial model is returned in either case.
    pub fn from_edges(num_vertices: usize, edges: &[Edge]) -> Result<Self, Error> {
        num_vertices
            .checked_mul(num_vertices)
            .filter(|&cells| cells <= MAX_VERTICES * MAX_VERTICES)
            .ok_or(Error::TooManyVertices {
                requested: num_vertices,
                max: MAX_VERTICES,
            })?;

        let mut distances = DenseMatrix::new(num_vertices, Distance::Infinite);
        let mut initial = DenseMatrix::new(num_vertices, Distance::Infinite);
        let mut predecessors = DenseMatrix::new(num_vertices, PredecessorSet::new());

        for i in 0..num_vertices {
            distances[(i, i)] = Distance::Finite(0);
            initial[(i, i)] = Distance::Finite(0);
        }

        for &(u, v, w) in edges {
            if u >= num_vertices {
                return Err(Error::NodeIndexOutOfBounds(u));
            }
            if v >= num_vertices {
                return Err(Error::NodeIndexOutOfBounds(v));
            }
            distances[(u, v)] = Distance::Finite(w);
            initial[(u, v)] = Distance::Finite(w);
            predecessors[(u, v)].insert(u);
        }

        Ok(Self {
            num_vertices,
            distances,
            predecessors,
            initial,
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Current best cost from `i` to `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn distance(&self, i: usize, j: usize) -> Distance {
        self.distances[(i, j)]
    }

    /// Immediate predecessors of `j` on optimal `i → j` paths.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn predecessors(&self, i: usize, j: usize) -> &PredecessorSet {
        &self.predecessors[(i, j)]
    }

    /// Weight of the input edge `i → j` (zero on the diagonal unless a
    /// self-loop was given).
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn initial_weight(&self, i: usize, j: usize) -> Distance {
        self.initial[(i, j)]
    }

    pub fn distance_matrix(&self) -> &DenseMatrix<Distance> {
        &self.distances
    }

    pub fn predecessor_matrix(&self) -> &DenseMatrix<PredecessorSet> {
        &self.predecessors
    }

    pub fn initial_matrix(&self) -> &DenseMatrix<Distance> {
        &self.initial
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<(), Error> {
        if vertex >= self.num_vertices {
            return Err(Error::NodeIndexOutOfBounds(vertex));
        }
        Ok(())
    }
}

/// A graph model after the closure reached its fixed point.
///
/// Only a [`ClosureSolver`](super::traits::ClosureSolver) can build one, and it
/// exposes no mutation, so detection and enumeration always read a finished
/// `L`/`P` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedGraph {
    model: GraphModel,
}

impl ClosedGraph {
    pub(crate) fn seal(model: GraphModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    /// Gives the model back, e.g. to re-apply the closure.
    pub fn into_model(self) -> GraphModel {
        self.model
    }

    pub fn num_vertices(&self) -> usize {
        self.model.num_vertices
    }

    pub fn distance(&self, i: usize, j: usize) -> Distance {
        self.model.distance(i, j)
    }

    pub fn predecessors(&self, i: usize, j: usize) -> &PredecessorSet {
        self.model.predecessors(i, j)
    }

    pub fn initial_weight(&self, i: usize, j: usize) -> Distance {
        self.model.initial_weight(i, j)
    }
}
