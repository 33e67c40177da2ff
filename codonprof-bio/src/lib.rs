//! Codon usage analysis for codonprof

pub mod codon;
pub mod usage;

// Re-export commonly used types
pub use codon::{AminoAcid, Codon, CodonLookup, StandardCodonTable, Translation};
pub use usage::{CodonProfile, UsageNode};
