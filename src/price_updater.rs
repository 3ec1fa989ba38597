//! Price Updater
//!
//! Translates a `(symbol, price)` tick into up to two `GraphStore` edge
//! writes and marks the affected vertices dirty. The forward/reverse
//! weights are computed and applied through `apply_rates`, kept separate
//! from `update_price` so that a future best-bid/best-ask ingestion change
//! can supply the two weights independently without reshaping this seam.

use std::collections::VecDeque;

use tracing::warn;

use crate::error::ArbError;
use crate::graph::GraphStore;
use crate::registry::{SymbolRegistry, VertexId};

/// Apply one tick to the graph store, enqueueing both endpoints as dirty.
///
/// Returns `Err(ArbError::MalformedSymbol)` or `Err(ArbError::InvalidPrice)`
/// for caller errors. An unknown currency is logged and swallowed: this
/// function performs no mutation and returns `Ok(())`, matching the
/// propagation policy that the engine remains fully usable on the next
/// call.
pub fn update_price(
    registry: &SymbolRegistry,
    graph: &mut GraphStore,
    dirty_queue: &mut VecDeque<VertexId>,
    symbol: &str,
    price: f64,
) -> Result<(), ArbError> {
    let (base, quote) = crate::registry::split_symbol(symbol).ok_or_else(|| {
        ArbError::MalformedSymbol {
            symbol: symbol.to_string(),
        }
    })?;

    if base.is_empty() || quote.is_empty() {
        return Err(ArbError::MalformedSymbol {
            symbol: symbol.to_string(),
        });
    }

    if !(price > 0.0) || !price.is_finite() {
        return Err(ArbError::InvalidPrice { price });
    }

    let base_id = registry.id_of(base);
    let quote_id = registry.id_of(quote);

    let (base_id, quote_id) = match (base_id, quote_id) {
        (Some(b), Some(q)) => (b, q),
        (None, _) => {
            warn!(currency = base, "update_price: unknown currency, swallowing");
            return Ok(());
        }
        (_, None) => {
            warn!(currency = quote, "update_price: unknown currency, swallowing");
            return Ok(());
        }
    };

    let forward_weight = -price.ln();
    let reverse_weight = price.ln();

    apply_rates(
        graph,
        dirty_queue,
        base_id,
        quote_id,
        forward_weight,
        reverse_weight,
    );

    Ok(())
}

/// Write both directed edge weights for a base/quote pair and mark both
/// endpoints dirty. Kept independent of any particular rate derivation so
/// bid/ask-sourced weights can be threaded through without touching
/// `update_price`'s parsing/validation logic.
pub fn apply_rates(
    graph: &mut GraphStore,
    dirty_queue: &mut VecDeque<VertexId>,
    base_id: VertexId,
    quote_id: VertexId,
    forward_weight: f64,
    reverse_weight: f64,
) {
    graph.upsert_edge(base_id, quote_id, forward_weight);
    graph.upsert_edge(quote_id, base_id, reverse_weight);

    dirty_queue.push_back(base_id);
    dirty_queue.push_back(quote_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (SymbolRegistry, GraphStore, VecDeque<VertexId>) {
        let registry = SymbolRegistry::from_symbols(["A-B", "B-C", "A-C"]);
        let graph = GraphStore::new(registry.size());
        (registry, graph, VecDeque::new())
    }

    #[test]
    fn forward_and_reverse_weights_are_logarithms() {
        let (registry, mut graph, mut dirty) = setup();
        update_price(&registry, &mut graph, &mut dirty, "A-B", 2.0).unwrap();

        let a = registry.id_of("A").unwrap();
        let b = registry.id_of("B").unwrap();

        assert!((graph.edge_weight(a, b).unwrap() - (-2.0f64.ln())).abs() < 1e-12);
        assert!((graph.edge_weight(b, a).unwrap() - 2.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn round_trip_weights_sum_to_zero() {
        let (registry, mut graph, mut dirty) = setup();
        update_price(&registry, &mut graph, &mut dirty, "A-B", 7.3).unwrap();

        let a = registry.id_of("A").unwrap();
        let b = registry.id_of("B").unwrap();
        let sum = graph.edge_weight(a, b).unwrap() + graph.edge_weight(b, a).unwrap();
        assert!(sum.abs() < 1e-9);
    }

    #[test]
    fn price_of_one_gives_zero_weights() {
        let (registry, mut graph, mut dirty) = setup();
        update_price(&registry, &mut graph, &mut dirty, "A-B", 1.0).unwrap();

        let a = registry.id_of("A").unwrap();
        let b = registry.id_of("B").unwrap();
        assert_eq!(graph.edge_weight(a, b), Some(0.0));
        assert_eq!(graph.edge_weight(b, a), Some(0.0));
    }

    #[test]
    fn malformed_symbol_rejected() {
        let (registry, mut graph, mut dirty) = setup();
        let result = update_price(&registry, &mut graph, &mut dirty, "ABUSD", 1.0);
        assert!(matches!(result, Err(ArbError::MalformedSymbol { .. })));
    }

    #[test]
    fn unknown_currency_swallowed_without_mutation() {
        let registry = SymbolRegistry::from_symbols(["A-B"]);
        let mut graph = GraphStore::new(registry.size());
        let mut dirty = VecDeque::new();

        let result = update_price(&registry, &mut graph, &mut dirty, "A-C", 1.0);
        assert!(result.is_ok());
        assert!(dirty.is_empty());
    }

    #[test]
    fn non_positive_or_nonfinite_price_rejected() {
        let (registry, mut graph, mut dirty) = setup();
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = update_price(&registry, &mut graph, &mut dirty, "A-B", bad);
            assert!(matches!(result, Err(ArbError::InvalidPrice { .. })));
        }
    }

    #[test]
    fn idempotent_reapplication() {
        let (registry, mut graph, mut dirty) = setup();
        update_price(&registry, &mut graph, &mut dirty, "A-B", 3.0).unwrap();
        let a = registry.id_of("A").unwrap();
        let b = registry.id_of("B").unwrap();
        let first = graph.edge_weight(a, b);

        update_price(&registry, &mut graph, &mut dirty, "A-B", 3.0).unwrap();
        let second = graph.edge_weight(a, b);

        assert_eq!(first, second);
    }
}
