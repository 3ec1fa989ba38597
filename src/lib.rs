//! Incremental negative-cycle detection engine for cross-currency
//! arbitrage.
//!
//! Consumes a stream of `(symbol, price)` ticks for `BASE-QUOTE` trading
//! pairs and, after each tick, determines whether the current exchange
//! rates admit a closed sequence of conversions whose product exceeds 1,
//! a risk-free profit cycle, ignoring fees and latency.
//!
//! The engine is a weighted directed graph over currencies (edge weights
//! derived from `-log(price)`) together with an incremental
//! Shortest-Path-Faster variant of Bellman-Ford that re-evaluates only
//! vertices affected by recent price updates, and a cycle reconstruction
//! procedure. Market-data ingestion, inter-thread transport, the CLI, and
//! order execution are external collaborators; see `feed` and `config`
//! for the thin demo scaffolding around those boundaries.

pub mod config;
pub mod engine;
pub mod error;
pub mod feed;
pub mod graph;
pub mod price_updater;
pub mod registry;
pub mod relaxer;

pub use engine::ArbitrageEngine;
pub use error::ArbError;
