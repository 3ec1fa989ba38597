//! Tick feed boundary
//!
//! The `(symbol, price)` record exchanged across the ingestion/engine
//! boundary, plus a thin demonstration of the producer/consumer shape
//! described for the engine's surroundings: an ingestion thread produces
//! ticks, a logic thread owns the engine and drains them in order. This is
//! scaffolding for the CLI demo; the engine's own contract has no
//! transport, threading, or I/O of its own.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;

use serde::{Deserialize, Serialize};

/// One `(symbol, price)` record on the tick feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tick {
    pub symbol: String,
    pub price: f64,
}

impl Tick {
    /// Reserved shutdown sentinel symbol (convention, not engine semantics).
    pub const STOP_SENTINEL: &'static str = "STOP";

    pub fn is_stop(&self) -> bool {
        self.symbol == Self::STOP_SENTINEL
    }
}

/// Spawn a producer thread that feeds `ticks` into a bounded channel in
/// order, followed by the stop sentinel, and return the receiving end.
///
/// Stands in for the blocking MPMC queue described as an external
/// collaborator; `std::sync::mpsc::sync_channel` is a single-consumer
/// specialization used here purely for the demo.
pub fn spawn_replay(ticks: Vec<Tick>, capacity: usize) -> Receiver<Tick> {
    let (tx, rx): (SyncSender<Tick>, Receiver<Tick>) = mpsc::sync_channel(capacity);

    thread::spawn(move || {
        for tick in ticks {
            if tx.send(tick).is_err() {
                return;
            }
        }
        let _ = tx.send(Tick {
            symbol: Tick::STOP_SENTINEL.to_string(),
            price: 0.0,
        });
    });

    rx
}
