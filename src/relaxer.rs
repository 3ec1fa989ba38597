//! SPFA Relaxer & Cycle Reconstructor
//!
//! Maintains the shortest-path tree incrementally from a queue of dirty
//! vertices and detects negative cycles via update-count thresholding
//! (Bellman-Ford's invariant: any vertex relaxed >= N times lies on, or
//! downstream of, a negative cycle). On detection, reconstructs the
//! cycle's vertex sequence via the standard N-step-seed-walk trick.
//!
//! SPFA bookkeeping (`distance`, `predecessor`, `update_counts`) is never
//! reset after a cycle is found; update counts are monotone for the
//! engine's lifetime, so a negative cycle, once present, re-detects on
//! every subsequent call that threads through it.

use std::collections::VecDeque;

use tracing::error;

use crate::error::ArbError;
use crate::graph::GraphStore;
use crate::registry::VertexId;

/// Distance/predecessor/update-count bookkeeping plus the dirty queue.
pub struct SpfaState {
    distance: Vec<f64>,
    predecessor: Vec<i64>,
    update_counts: Vec<u32>,
    dirty_queue: VecDeque<VertexId>,
}

impl SpfaState {
    /// Initialize state for `vertex_count` vertices. Only vertex 0 starts
    /// at distance 0; all others start at +infinity (single-source choice
    /// per spec, vertex 0 is the designated source).
    pub fn new(vertex_count: usize) -> Self {
        let mut distance = vec![f64::INFINITY; vertex_count];
        if vertex_count > 0 {
            distance[0] = 0.0;
        }

        Self {
            distance,
            predecessor: vec![-1; vertex_count],
            update_counts: vec![0; vertex_count],
            dirty_queue: VecDeque::new(),
        }
    }

    pub fn dirty_queue_mut(&mut self) -> &mut VecDeque<VertexId> {
        &mut self.dirty_queue
    }

    #[cfg(test)]
    fn distance(&self, v: VertexId) -> f64 {
        self.distance[v as usize]
    }
}

/// Drain the dirty queue, relaxing edges until either the queue empties
/// (no cycle) or some vertex's update count reaches `vertex_count`
/// (negative cycle detected, seeded at that vertex).
///
/// Tie-breaking is strict `<`: equal distances never update. Edges within
/// a vertex are scanned in stored (insertion) order; vertex dequeue is
/// strict FIFO.
pub fn relax(
    graph: &GraphStore,
    state: &mut SpfaState,
    registry: &crate::registry::SymbolRegistry,
) -> Option<Vec<String>> {
    let vertex_count = graph.vertex_count();

    while let Some(u) = state.dirty_queue.pop_front() {
        let u_idx = u as usize;
        if state.distance[u_idx].is_infinite() {
            continue;
        }

        for edge in graph.neighbors(u) {
            let candidate = state.distance[u_idx] + edge.weight;
            let v_idx = edge.destination as usize;

            if candidate < state.distance[v_idx] {
                state.distance[v_idx] = candidate;
                state.predecessor[v_idx] = u as i64;
                state.dirty_queue.push_back(edge.destination);
                state.update_counts[v_idx] += 1;

                if state.update_counts[v_idx] as usize >= vertex_count {
                    return match reconstruct_cycle(state, edge.destination, vertex_count, registry)
                    {
                        Ok(cycle) => Some(cycle),
                        Err(err) => {
                            error!(%err, "cycle reconstruction failed, reporting no cycle");
                            None
                        }
                    };
                }
            }
        }
    }

    None
}

/// Given a detection seed, walk the predecessor chain `vertex_count` times
/// to guarantee landing on a vertex that lies on the negative cycle, then
/// walk again from there until the walk returns to that vertex, building
/// the cycle's currency sequence in traversal order.
fn reconstruct_cycle(
    state: &SpfaState,
    seed: VertexId,
    vertex_count: usize,
    registry: &crate::registry::SymbolRegistry,
) -> Result<Vec<String>, ArbError> {
    let mut x = seed;
    for _ in 0..vertex_count {
        x = step_predecessor(state, x)?;
    }

    let mut path: VecDeque<VertexId> = VecDeque::new();
    path.push_front(x);

    let mut current = x;
    loop {
        let prev = step_predecessor(state, current)?;
        path.push_front(prev);
        current = prev;
        if current == x {
            break;
        }
    }

    path.iter()
        .map(|&id| {
            registry
                .name_of(id)
                .map(str::to_string)
                .ok_or_else(|| ArbError::InternalInconsistency {
                    detail: format!("vertex {id} has no registered name"),
                })
        })
        .collect()
}

fn step_predecessor(state: &SpfaState, v: VertexId) -> Result<VertexId, ArbError> {
    let pred = state.predecessor[v as usize];
    if pred < 0 {
        return Err(ArbError::InternalInconsistency {
            detail: format!("vertex {v} has no predecessor during cycle reconstruction"),
        });
    }
    Ok(pred as VertexId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SymbolRegistry;

    fn build(symbols: &[&str]) -> (SymbolRegistry, GraphStore) {
        let registry = SymbolRegistry::from_symbols(symbols.to_vec());
        let graph = GraphStore::new(registry.size());
        (registry, graph)
    }

    #[test]
    fn no_cycle_when_graph_is_consistent() {
        let (registry, mut graph) = build(&["A-B", "B-C", "A-C"]);
        let mut state = SpfaState::new(registry.size());

        let a = registry.id_of("A").unwrap();
        let b = registry.id_of("B").unwrap();
        let c = registry.id_of("C").unwrap();

        // A-B=2.0, B-C=3.0, A-C=6.0: round trip product is ~1, no arbitrage.
        graph.upsert_edge(a, b, -(2.0f64.ln()));
        graph.upsert_edge(b, a, 2.0f64.ln());
        graph.upsert_edge(b, c, -(3.0f64.ln()));
        graph.upsert_edge(c, b, 3.0f64.ln());
        graph.upsert_edge(a, c, -(6.0f64.ln()));
        graph.upsert_edge(c, a, 6.0f64.ln());

        state.dirty_queue_mut().extend([a, b, c]);
        let result = relax(&graph, &mut state, &registry);
        assert!(result.is_none());
    }

    #[test]
    fn detects_profitable_triangular_cycle() {
        let (registry, mut graph) = build(&["A-B", "B-C", "A-C"]);
        let mut state = SpfaState::new(registry.size());

        let a = registry.id_of("A").unwrap();
        let b = registry.id_of("B").unwrap();
        let c = registry.id_of("C").unwrap();

        // A-B=2.0, B-C=3.0, A-C=5.0 (instead of 6.0): A->B->C yields 6 C per
        // A, C->A yields 1/5 A per C -> profitable loop.
        graph.upsert_edge(a, b, -(2.0f64.ln()));
        graph.upsert_edge(b, a, 2.0f64.ln());
        graph.upsert_edge(b, c, -(3.0f64.ln()));
        graph.upsert_edge(c, b, 3.0f64.ln());
        graph.upsert_edge(a, c, -(5.0f64.ln()));
        graph.upsert_edge(c, a, 5.0f64.ln());

        state.dirty_queue_mut().extend([a, b, c]);
        let result = relax(&graph, &mut state, &registry);

        let cycle = result.expect("expected a cycle");
        assert!(cycle.len() >= 2);
        assert_eq!(cycle.first(), cycle.last());
    }

    #[test]
    fn empty_graph_has_no_cycle() {
        let registry = SymbolRegistry::from_symbols(Vec::<String>::new());
        let graph = GraphStore::new(registry.size());
        let mut state = SpfaState::new(registry.size());
        assert!(relax(&graph, &mut state, &registry).is_none());
    }

    #[test]
    fn single_pair_round_trip_is_not_a_false_cycle() {
        let (registry, mut graph) = build(&["A-B"]);
        let mut state = SpfaState::new(registry.size());
        let a = registry.id_of("A").unwrap();
        let b = registry.id_of("B").unwrap();

        graph.upsert_edge(a, b, -(2.0f64.ln()));
        graph.upsert_edge(b, a, 2.0f64.ln());

        state.dirty_queue_mut().extend([a, b]);
        assert!(relax(&graph, &mut state, &registry).is_none());

        // Re-applying the same prices must not falsely flag a cycle either.
        graph.upsert_edge(a, b, -(2.0f64.ln()));
        graph.upsert_edge(b, a, 2.0f64.ln());
        state.dirty_queue_mut().extend([a, b]);
        assert!(relax(&graph, &mut state, &registry).is_none());
    }

    #[test]
    fn tie_breaking_is_strict_less_than() {
        let registry = SymbolRegistry::from_symbols(["A-B"]);
        let mut graph = GraphStore::new(registry.size());
        let a = registry.id_of("A").unwrap();
        let b = registry.id_of("B").unwrap();

        graph.upsert_edge(a, b, 0.0);
        let mut state = SpfaState::new(registry.size());
        assert_eq!(state.distance(b), f64::INFINITY);

        state.dirty_queue_mut().push_back(a);
        relax(&graph, &mut state, &registry);
        assert_eq!(state.distance(b), 0.0);

        // Re-relaxing the same zero-weight edge must not "improve" distance
        // again since the test is strict `<`.
        let counts_before = state.update_counts[b as usize];
        state.dirty_queue_mut().push_back(a);
        relax(&graph, &mut state, &registry);
        assert_eq!(state.update_counts[b as usize], counts_before);
    }
}
