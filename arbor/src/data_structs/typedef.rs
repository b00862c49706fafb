use indexmap::IndexMap;

/// Genomic coordinate. Signed so that directional distances between
/// overlapping intervals can go negative.
pub type PosType = i64;

/// Amino-acid residue symbol.
pub type SymbolType = char;

/// Per-symbol fraction of a sequence, in first-occurrence order.
pub type SymbolBucket = IndexMap<SymbolType, f64>;

/// Protein identifier as found in the `protein_id` qualifier.
pub type ProteinId = String;
