use std::fs;
use std::path::Path;

use super::model::{GraphModel, MAX_VERTICES};
use common::error::LoadError;
use common::types::{Edge, Weight};
use tracing::info;

/// Reads and parses a graph description file.
///
/// See [`parse_graph`] for the format.
pub fn load_graph(path: impl AsRef<Path>) -> Result<GraphModel, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let model = parse_graph(&text)?;
    info!(
        path = %path.display(),
        num_vertices = model.num_vertices(),
        "graph loaded"
    );
    Ok(model)
}

/// Parses the line-oriented graph description:
///
/// ```text
/// n          vertex count
/// m          edge count
/// u v w      m lines, directed edge u -> v with integer weight w
/// ```
///
/// Blank lines are dropped first. Fewer than `m` edge lines is accepted (the
/// missing edges are simply absent); anything after the `m`-th edge line and
/// any field after `w` is ignored.
///
/// # Errors
/// Any unparseable integer, short edge line or vertex outside `[0, n)` fails
/// the whole load; no partially built model escapes. So does a vertex count
/// above [`MAX_VERTICES`].
pub fn parse_graph(text: &str) -> Result<GraphModel, LoadError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(LoadError::Empty);
    }

    let num_vertices: usize = parse_token(lines[0], 1)?;
    if num_vertices > MAX_VERTICES {
        return Err(LoadError::TooManyVertices {
            line: 1,
            count: num_vertices,
            max: MAX_VERTICES,
        });
    }
    let edge_line = lines
        .get(1)
        .ok_or(LoadError::MissingHeader("edge count"))?;
    let num_edges: usize = parse_token(edge_line, 2)?;

    let mut edges: Vec<Edge> = Vec::with_capacity(num_edges.min(lines.len()));
    for (offset, line) in lines.iter().skip(2).take(num_edges).enumerate() {
        let line_no = offset + 3;
        edges.push(parse_edge(line, line_no, num_vertices)?);
    }

    Ok(GraphModel::from_edges(num_vertices, &edges)?)
}

fn parse_edge(line: &str, line_no: usize, num_vertices: usize) -> Result<Edge, LoadError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(LoadError::MalformedEdge { line: line_no });
    }

    let u: i64 = parse_token(fields[0], line_no)?;
    let v: i64 = parse_token(fields[1], line_no)?;
    let w: Weight = parse_token(fields[2], line_no)?;

    let u = vertex_index(u, line_no, num_vertices)?;
    let v = vertex_index(v, line_no, num_vertices)?;
    Ok((u, v, w))
}

fn vertex_index(raw: i64, line_no: usize, num_vertices: usize) -> Result<usize, LoadError> {
    usize::try_from(raw)
        .ok()
        .filter(|&v| v < num_vertices)
        .ok_or(LoadError::VertexOutOfRange {
            line: line_no,
            vertex: raw,
            num_vertices,
        })
}

fn parse_token<T: std::str::FromStr>(token: &str, line_no: usize) -> Result<T, LoadError> {
    token
        .trim()
        .parse()
        .map_err(|_| LoadError::InvalidInteger {
            line: line_no,
            token: token.trim().to_string(),
        })
}
