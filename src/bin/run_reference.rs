//! Runs the hardcoded reference scenario and prints the distance table.

use bellman_core::{report, solve, Graph};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let graph = Graph::from_triples(
        5,
        &[
            (0, 1, -1),
            (0, 2, 4),
            (1, 2, 3),
            (1, 3, 2),
            (1, 4, 2),
            (3, 2, 5),
            (3, 1, 1),
            (4, 3, -3),
        ],
    );
    let source = 0;

    match solve(&graph, source) {
        Ok(solution) => print!("{}", report::render(&solution, source)),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
