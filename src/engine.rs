//! Engine facade
//!
//! `ArbitrageEngine` composes the Symbol Registry, Graph Store, and SPFA
//! state behind the two operations external callers use: `update_price`
//! and `find_arbitrage_cycle`. Single-owner, synchronous, no internal
//! locking; callers are expected to serialize calls from one thread, as
//! specified for the core engine.

use crate::error::ArbError;
use crate::graph::GraphStore;
use crate::price_updater;
use crate::registry::SymbolRegistry;
use crate::relaxer::{self, SpfaState};

pub struct ArbitrageEngine {
    registry: SymbolRegistry,
    graph: GraphStore,
    spfa: SpfaState,
}

impl ArbitrageEngine {
    /// Build the engine from the initial symbol universe. Vertices and the
    /// registry are fixed for the engine's lifetime after this call.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let registry = SymbolRegistry::from_symbols(symbols);
        let graph = GraphStore::new(registry.size());
        let spfa = SpfaState::new(registry.size());

        Self {
            registry,
            graph,
            spfa,
        }
    }

    /// Apply one price tick. See `error::ArbError` for the propagation
    /// policy: an unknown currency is logged and swallowed, performing no
    /// mutation and returning `Ok(())`; `MalformedSymbol`/`InvalidPrice` are
    /// surfaced to the caller as `Err`.
    pub fn update_price(&mut self, symbol: &str, price: f64) -> Result<(), ArbError> {
        price_updater::update_price(
            &self.registry,
            &mut self.graph,
            self.spfa.dirty_queue_mut(),
            symbol,
            price,
        )
    }

    /// Drain pending relaxation work and report a negative cycle if one is
    /// found. Returns `None` if the dirty queue empties without detection,
    /// or if cycle reconstruction hits an internal inconsistency (logged
    /// and treated as "no cycle" for this call).
    pub fn find_arbitrage_cycle(&mut self) -> Option<Vec<String>> {
        relaxer::relax(&self.graph, &mut self.spfa, &self.registry)
    }

    /// Number of registered currencies.
    pub fn currency_count(&self) -> usize {
        self.registry.size()
    }
}
