//! Console presentation of a solution. Kept out of the solver so the
//! distance table and flag stay the only contract.

use std::fmt::Write;

use crate::solver::Solution;

/// Renders the distance table the way the reference scenario prints it:
/// one row per non-source vertex, then the negative-cycle note.
pub fn render(solution: &Solution, source: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Vertex\tDistance from vertex {source}");
    for (v, d) in solution.distances.iter().enumerate() {
        if v == source {
            continue;
        }
        match d {
            Some(d) => {
                let _ = writeln!(out, "  {v}\t{d}");
            }
            None => {
                let _ = writeln!(out, "  {v}\tunreachable");
            }
        }
    }
    if solution.negative_cycle {
        let _ = writeln!(out, "Note: Negative cycle detected.");
    } else {
        let _ = writeln!(out, "Note: No negative cycle detected.");
    }
    out
}
