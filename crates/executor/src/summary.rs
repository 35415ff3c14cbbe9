use super::error::Error;
use allpaths_core::ClosedGraph;
use allpaths_core::report::matrices_string;

/// Full report for one graph: matrices, negative-cycle status and, when the
/// graph has no negative cycle, the cost and routes of every ordered pair.
pub fn graph_report(graph: &ClosedGraph) -> Result<String, Error> {
    let mut out = matrices_string(graph.model());

    if graph.has_negative_cycle() {
        out.push_str("\n\n!!! WARNING: NEGATIVE ABSORBING CIRCUIT !!!\n");
        match graph.find_negative_cycle() {
            Ok(Some(witness)) => {
                out.push_str(&format!(
                    "Cycle Path: {:?} (weight {})\n",
                    witness.path, witness.weight
                ));
            }
            Ok(None) | Err(_) => out.push_str("Could not reconstruct exact cycle path.\n"),
        }
        out.push_str("\nCannot list paths: Negative Cycle Present.");
        return Ok(out);
    }

    out.push_str("\n\n=== ALL SHORTEST PATHS ===\n");
    let n = graph.num_vertices();
    for start in 0..n {
        for end in (0..n).filter(|&end| end != start) {
            let cost = graph.distance(start, end);
            if !cost.is_finite() {
                out.push_str(&format!("{start} -> {end}: NO PATH\n"));
                continue;
            }
            out.push_str(&format!("{start} -> {end} (Cost: {cost})\n"));
            for path in graph.all_shortest_paths(start, end)? {
                out.push_str(&format!("   Route: {:?}\n", path));
            }
        }
    }
    out.push_str("==========================");
    Ok(out)
}

/// Every optimal route between two vertices, or why there is none.
pub fn pair_report(graph: &ClosedGraph, start: usize, end: usize) -> Result<String, Error> {
    if graph.has_negative_cycle() {
        return Ok("Cannot list paths: Negative Cycle Present.".to_string());
    }

    let paths = graph.all_shortest_paths(start, end)?;
    if paths.is_empty() {
        return Ok("NO PATH.".to_string());
    }

    let mut out = format!(
        "Found {} optimal path(s). Cost: {}",
        paths.len(),
        graph.distance(start, end)
    );
    for path in paths {
        out.push_str(&format!("\nRoute: {:?}", path));
    }
    Ok(out)
}
