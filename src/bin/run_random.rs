//! Seeded random-graph runner. Prints one JSON summary line per run.
//!
//! usage: run_random <n> <avg_degree> <seed> [--negative]
//!
//! `--negative` draws weights from -2..8 instead of 1..8, which makes
//! negative cycles likely on dense inputs.

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use bellman_core::{solve, Edge, Graph};

fn make_random_graph(n: usize, avg_degree: f32, seed: u64, negative: bool) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let m_est = (n as f32 * avg_degree) as usize;
    let mut edges = Vec::with_capacity(m_est);
    for _ in 0..m_est {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let w = if negative {
            rng.gen_range(-2..8)
        } else {
            rng.gen_range(1..8)
        };
        edges.push(Edge::new(u, v, w));
    }
    Graph::new(n, edges)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!("usage: run_random <n> <avg_degree> <seed> [--negative]");
        std::process::exit(1);
    }
    let n: usize = args[1].parse().expect("n");
    let avg_degree: f32 = args[2].parse().expect("avg_degree");
    let seed: u64 = args[3].parse().expect("seed");
    let negative = args.iter().any(|a| a == "--negative");

    let graph = make_random_graph(n, avg_degree, seed, negative);
    let t0 = Instant::now();
    let solution = match solve(&graph, 0) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let solve_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let reached = solution.distances.iter().filter(|d| d.is_some()).count();
    println!(
        "{}",
        serde_json::json!({
            "n": n,
            "m": graph.edge_count(),
            "seed": seed,
            "negative_weights": negative,
            "reached": reached,
            "negative_cycle": solution.negative_cycle,
            "solve_ms": solve_ms,
        })
    );
}
