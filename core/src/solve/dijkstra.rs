use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::graph::Graph;

/// Shortest distances from `source`, ignoring anything farther than `limit`.
/// Entries are `None` for nodes not reachable within the limit.
pub fn distances_within(graph: &Graph, source: usize, limit: u64) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; graph.len()];
    let mut heap = BinaryHeap::new();

    dist[source] = Some(0);
    heap.push(Reverse((0u64, source)));

    while let Some(Reverse((d, node))) = heap.pop() {
        if dist[node].is_some_and(|best| d > best) {
            continue;
        }
        for &(next, weight) in graph.neighbours(node) {
            let candidate = d + weight;
            if candidate > limit {
                continue;
            }
            if dist[next].is_none_or(|best| candidate < best) {
                dist[next] = Some(candidate);
                heap.push(Reverse((candidate, next)));
            }
        }
    }

    dist
}
