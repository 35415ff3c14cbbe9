use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Indicates an attempt to access a vertex index that exceeds the graph size (N).
    #[error("Vertex index {0} is out of bounds.")]
    NodeIndexOutOfBounds(usize),

    /// The dense `n × n` matrices for this many vertices would not fit.
    #[error("{requested} vertices requested, at most {max} are supported.")]
    TooManyVertices { requested: usize, max: usize },

    /// A negative cycle exists but no closed walk could be rebuilt from the
    /// predecessor sets.
    #[error("Cycle path reconstruction failed due to broken predecessor chain.")]
    CycleReconstructionFailed,
}

/// Reasons a graph description could not be turned into a model.
///
/// Line numbers count only non-blank lines, starting at 1.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read graph description: {0}")]
    Io(#[from] std::io::Error),

    #[error("Graph description is empty.")]
    Empty,

    #[error("Graph description is missing the {0} line.")]
    MissingHeader(&'static str),

    #[error("Line {line}: '{token}' is not a valid integer.")]
    InvalidInteger { line: usize, token: String },

    #[error("Line {line}: expected 'u v w', found fewer than three fields.")]
    MalformedEdge { line: usize },

    #[error("Line {line}: vertex {vertex} is outside [0, {num_vertices}).")]
    VertexOutOfRange {
        line: usize,
        vertex: i64,
        num_vertices: usize,
    },

    #[error("Line {line}: vertex count {count} exceeds the supported maximum of {max}.")]
    TooManyVertices { line: usize, count: usize, max: usize },

    #[error(transparent)]
    Graph(#[from] Error),
}
