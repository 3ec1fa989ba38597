//! Error taxonomy for the arbitrage engine.
//!
//! Propagation policy: `UnknownCurrency` is non-fatal; the engine performs
//! no mutation and remains fully usable on the next call. `MalformedSymbol`
//! and `InvalidPrice` are caller errors. `InternalInconsistency` indicates a
//! bug in cycle reconstruction; the engine remains usable afterward.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArbError {
    #[error("symbol '{symbol}' is malformed: expected BASE-QUOTE")]
    MalformedSymbol { symbol: String },

    #[error("currency '{currency}' is not registered")]
    UnknownCurrency { currency: String },

    #[error("invalid price {price}: must be finite and > 0")]
    InvalidPrice { price: f64 },

    #[error("internal inconsistency during cycle reconstruction: {detail}")]
    InternalInconsistency { detail: String },
}
