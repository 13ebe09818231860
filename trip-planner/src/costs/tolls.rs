//! Toll lookup table.

use std::collections::HashMap;

/// Fixed toll estimates keyed by ordered (origin, destination).
///
/// Direction matters: an entry for A→B says nothing about B→A.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TollTable {
    /// origin -> destination -> toll
    rates: HashMap<String, HashMap<String, f64>>,
}

impl TollTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the toll for a pair. Returns the previous value.
    pub fn insert(
        &mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        toll: f64,
    ) -> Option<f64> {
        self.rates
            .entry(origin.into())
            .or_default()
            .insert(destination.into(), toll)
    }

    /// Look up a pair.
    pub fn get(&self, origin: &str, destination: &str) -> Option<f64> {
        self.rates.get(origin)?.get(destination).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<((String, String), f64)> for TollTable {
    fn from_iter<I: IntoIterator<Item = ((String, String), f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for ((origin, destination), toll) in iter {
            table.insert(origin, destination, toll);
        }
        table
    }
}
