use super::matrix::DenseMatrix;
use super::model::{ClosedGraph, GraphModel};
use super::pred_set::PredecessorSet;
use super::traits::ClosureSolver;
use common::types::Distance;

const DISTANCE_WIDTH: usize = 5;
const MIN_PREDECESSOR_WIDTH: usize = 6;
const SEPARATOR_WIDTH: usize = 40;

/// Fixed-width dump of a distance matrix, `∞` for unknown costs.
///
/// ```text
///           0    1
///      ----------
///   0 |    0    4
///   1 |    ∞    0
/// ```
pub fn format_distances(distances: &DenseMatrix<Distance>) -> String {
    let n = distances.size();
    let mut lines = Vec::with_capacity(n + 2);

    lines.push(header_line(n, DISTANCE_WIDTH));
    lines.push(format!("     {}", "-".repeat(n * DISTANCE_WIDTH)));
    for (i, row) in distances.rows().enumerate() {
        let cells: String = row
            .iter()
            .map(|cell| format!("{:>width$}", cell, width = DISTANCE_WIDTH))
            .collect();
        lines.push(format!("{:3} |{}", i, cells));
    }

    lines.join("\n")
}

/// Fixed-width dump of the predecessor sets (`ø`, `3`, `[0,1]`).
///
/// Column width grows to fit the longest cell plus two spaces.
pub fn format_predecessors(predecessors: &DenseMatrix<PredecessorSet>) -> String {
    let n = predecessors.size();
    let cells: Vec<Vec<String>> = predecessors
        .rows()
        .map(|row| row.iter().map(|set| set.to_string()).collect())
        .collect();

    let width = cells
        .iter()
        .flatten()
        .map(|txt| txt.chars().count() + 2)
        .fold(MIN_PREDECESSOR_WIDTH, usize::max);

    let mut lines = Vec::with_capacity(n + 2);
    lines.push(header_line(n, width));
    lines.push(format!("     {}", "-".repeat(n * width)));
    for (i, row) in cells.iter().enumerate() {
        let padded: String = row
            .iter()
            .map(|txt| format!("{:>width$}", txt, width = width))
            .collect();
        lines.push(format!("{:3} |{}", i, padded));
    }

    lines.join("\n")
}

fn header_line(n: usize, width: usize) -> String {
    let columns: String = (0..n)
        .map(|v| format!("{:>width$}", v, width = width))
        .collect();
    format!("      {}", columns)
}

/// Both matrices of a model, distances first.
pub fn matrices_string(model: &GraphModel) -> String {
    format!(
        "Matrix L (Weights):\n{}\nMatrix P (Predecessors):\n{}",
        format_distances(model.distance_matrix()),
        format_predecessors(model.predecessor_matrix())
    )
}

/// Closes `model` while recording a step-by-step text trace.
///
/// The trace holds the initial matrices, a snapshot after every outer
/// iteration `k`, and a final verdict on negative cycles (with the
/// predecessor-walk witness, `[]` if it could not be rebuilt).
pub fn run_with_trace<S: ClosureSolver + ?Sized>(
    solver: &S,
    model: GraphModel,
) -> (ClosedGraph, String) {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut trace = vec![
        "INITIAL STATE:".to_string(),
        matrices_string(&model),
        separator.clone(),
    ];

    let closed = solver.close_with_observer(model, &mut |k, snapshot| {
        trace.push(format!("\nState after k = {k} (Processing node {k}):"));
        trace.push(matrices_string(snapshot));
        trace.push(separator.clone());
    });

    if closed.has_negative_cycle() {
        trace.push("\nRESULT: NEGATIVE ABSORBING CIRCUIT DETECTED!".to_string());
        trace.push(format!("Cycle Path: {:?}", closed.negative_cycle_witness()));
    } else {
        trace.push("\nRESULT: No negative cycles.".to_string());
    }

    (closed, trace.join("\n"))
}
