//! Codon usage profiles: construction, sorting, linearization and comparison

mod compare;
pub mod node;
pub mod profile;

pub use node::UsageNode;
pub use profile::{CodonProfile, Iter};
