//! Linear-scan oracle for the threshold search.
//!
//! Independent of the union-find: components are counted with an iterative
//! flood fill over an adjacency list holding only the edges heavier than the
//! candidate.

use crate::Graph;

/// Counts components when only edges with `weight > candidate` connect nodes.
pub(super) fn flood_fill_components(graph: &Graph, candidate: u64) -> usize {
    let node_count = graph.node_count().get();
    let mut adjacency = vec![Vec::new(); node_count];
    for edge in graph.edges().iter().filter(|edge| edge.weight() > candidate) {
        adjacency[edge.source()].push(edge.target());
        adjacency[edge.target()].push(edge.source());
    }

    let mut seen = vec![false; node_count];
    let mut components = 0;
    for start in 0..node_count {
        if seen[start] {
            continue;
        }
        components += 1;
        seen[start] = true;
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            for &next in &adjacency[node] {
                if !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }
    }
    components
}

/// Tries every candidate from zero upwards and returns the first accepted
/// one, falling back to the maximum weight.
pub(super) fn linear_scan_threshold(graph: &Graph, min_components: usize) -> u64 {
    let Some(max_weight) = graph.max_weight() else {
        return 0;
    };
    (0..=max_weight)
        .find(|&candidate| flood_fill_components(graph, candidate) >= min_components)
        .unwrap_or(max_weight)
}
