//! Savehouse route solver.
//!
//! Given a start, an end and a daily distance, finds every savehouse that can
//! be reached from the start within one day and from which the end can be
//! reached within one day.

mod dijkstra;
mod graph;
mod input;

use std::io::{Read, Write};

use crate::error::SolveError;

pub use dijkstra::distances_within;
pub use graph::Graph;
pub use input::{parse_problem, Edge, Problem, Route, MAX_VALUE};

/// Savehouses on a valid route, ascending.
pub fn solve(problem: &Problem) -> Vec<u32> {
    let Route {
        start,
        end,
        max_distance,
    } = problem.route;
    let limit = u64::from(max_distance);

    let mut forward = Graph::from_edges(problem.edges.iter().map(|e| (e.from, e.to, e.distance)));
    let source = forward.intern(start);
    let from_start = distances_within(&forward, source, limit);

    let candidates: Vec<u32> = problem
        .savehouses
        .iter()
        .copied()
        .filter(|id| {
            forward
                .index_of(*id)
                .is_some_and(|idx| from_start[idx].is_some())
        })
        .collect();
    if candidates.is_empty() {
        return candidates;
    }

    let mut backward = Graph::from_edges(problem.edges.iter().map(|e| (e.to, e.from, e.distance)));
    let sink = backward.intern(end);
    let to_end = distances_within(&backward, sink, limit);

    candidates
        .into_iter()
        .filter(|id| {
            backward
                .index_of(*id)
                .is_some_and(|idx| to_end[idx].is_some())
        })
        .collect()
}

/// Reads a problem from `reader` and prints the answer, one id per line.
pub fn run_solver<R: Read, W: Write>(reader: R, mut out: W) -> Result<Vec<u32>, SolveError> {
    let problem = parse_problem(reader)?;
    tracing::debug!(
        edges = problem.edges.len(),
        savehouses = problem.savehouses.len(),
        "solver input parsed"
    );

    let answer = solve(&problem);
    for id in &answer {
        writeln!(out, "{id}")?;
    }
    out.flush()?;
    Ok(answer)
}
