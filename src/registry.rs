//! Symbol Registry
//!
//! Establishes the fixed vertex universe: a bijection between currency
//! names (e.g. "BTC") and dense vertex ids in `[0, N)`. Built once from the
//! initial symbol list and never mutated afterward; vertices are never
//! added, removed, or renamed over the engine's lifetime.

use std::collections::BTreeSet;
use std::collections::HashMap;

pub type VertexId = u32;

/// Bijection between currency names and dense vertex ids.
#[derive(Debug, Clone)]
pub struct SymbolRegistry {
    id_to_name: Vec<String>,
    name_to_id: HashMap<String, VertexId>,
}

impl SymbolRegistry {
    /// Build the registry from a sequence of `"BASE-QUOTE"` symbols.
    ///
    /// Symbols missing the `-` separator are skipped. Currency ids are
    /// assigned in sorted-ascending order for a deterministic mapping given
    /// the same input, independent of symbol order or duplicates.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: BTreeSet<String> = BTreeSet::new();

        for symbol in symbols {
            let symbol = symbol.as_ref();
            if let Some((base, quote)) = split_symbol(symbol) {
                if !base.is_empty() {
                    names.insert(base.to_string());
                }
                if !quote.is_empty() {
                    names.insert(quote.to_string());
                }
            }
        }

        let id_to_name: Vec<String> = names.into_iter().collect();
        let name_to_id = id_to_name
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id as VertexId))
            .collect();

        Self {
            id_to_name,
            name_to_id,
        }
    }

    /// Look up the vertex id for a currency name.
    pub fn id_of(&self, name: &str) -> Option<VertexId> {
        self.name_to_id.get(name).copied()
    }

    /// Look up the currency name for a vertex id.
    pub fn name_of(&self, id: VertexId) -> Option<&str> {
        self.id_to_name.get(id as usize).map(String::as_str)
    }

    /// Number of registered currencies.
    pub fn size(&self) -> usize {
        self.id_to_name.len()
    }
}

/// Split a `"BASE-QUOTE"` symbol on its first `-`. Returns `None` if the
/// separator is absent.
pub fn split_symbol(symbol: &str) -> Option<(&str, &str)> {
    symbol.split_once('-')
}
