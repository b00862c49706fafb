use indexmap::IndexMap;
use log::trace;

use crate::data_structs::typedef::{
    SymbolBucket,
    SymbolType,
};

/// Counts every distinct symbol of `sequence`, in first-occurrence order.
pub fn symbol_counts(sequence: &str) -> IndexMap<SymbolType, usize> {
    sequence
        .chars()
        .fold(IndexMap::new(), |mut counts, symbol| {
            *counts.entry(symbol).or_insert(0) += 1;
            counts
        })
}

/// Normalized composition vector of `sequence`: `count(symbol) / length`
/// for every symbol that occurs. Absent symbols have no entry.
///
/// Callers filter out empty sequences; an empty input yields an empty
/// bucket.
pub fn vectorize(sequence: &str) -> SymbolBucket {
    let counts = symbol_counts(sequence);
    let length = counts.values().sum::<usize>() as f64;
    trace!(
        "Vectorizing sequence of length {} with {} distinct symbols",
        length,
        counts.len()
    );

    counts
        .into_iter()
        .map(|(symbol, count)| (symbol, count as f64 / length))
        .collect()
}
