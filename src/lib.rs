//! codonprof: codon usage profiles
//!
//! Build a per-amino-acid tally of codon usage from an RNA or DNA sequence,
//! sort it into amino acid order, and measure how far two profiles are apart.
//!
//! ```
//! use codonprof::CodonProfile;
//!
//! let left = CodonProfile::from_sequence("AAGGCUGCACUUUAA").unwrap().sorted();
//! let right = CodonProfile::from_sequence("UACGCC").unwrap().sorted();
//!
//! assert_eq!(left.amino_acid_compare(&right).unwrap(), 4);
//! ```

pub use codonprof_bio::{codon, usage};
pub use codonprof_bio::{AminoAcid, Codon, CodonLookup, CodonProfile, StandardCodonTable, Translation, UsageNode};
pub use codonprof_core::{config, error, logging};
pub use codonprof_core::{
    init_logging, load_config, save_config, CodonError, CodonResult, Config, LoggingConfig,
    TranslationConfig, VERSION,
};

/// Build a profile using the translation settings from `config`
pub fn profile_with_config<S: AsRef<[u8]>>(sequence: S, config: &Config) -> CodonResult<CodonProfile> {
    CodonProfile::build(sequence, &StandardCodonTable, &config.translation)
}
