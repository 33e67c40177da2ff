//! Codons, amino acids and the lookup contract used by usage profiles

pub mod table;

pub use table::StandardCodonTable;

use codonprof_core::{CodonResult, TranslationConfig};
use std::fmt;

/// The twenty standard amino acids, ordered by one-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AminoAcid {
    Ala,
    Cys,
    Asp,
    Glu,
    Phe,
    Gly,
    His,
    Ile,
    Lys,
    Leu,
    Met,
    Asn,
    Pro,
    Gln,
    Arg,
    Ser,
    Thr,
    Val,
    Trp,
    Tyr,
}

impl AminoAcid {
    /// All amino acids in ascending order
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Ala,
        AminoAcid::Cys,
        AminoAcid::Asp,
        AminoAcid::Glu,
        AminoAcid::Phe,
        AminoAcid::Gly,
        AminoAcid::His,
        AminoAcid::Ile,
        AminoAcid::Lys,
        AminoAcid::Leu,
        AminoAcid::Met,
        AminoAcid::Asn,
        AminoAcid::Pro,
        AminoAcid::Gln,
        AminoAcid::Arg,
        AminoAcid::Ser,
        AminoAcid::Thr,
        AminoAcid::Val,
        AminoAcid::Trp,
        AminoAcid::Tyr,
    ];

    pub fn one_letter(self) -> char {
        match self {
            AminoAcid::Ala => 'A',
            AminoAcid::Cys => 'C',
            AminoAcid::Asp => 'D',
            AminoAcid::Glu => 'E',
            AminoAcid::Phe => 'F',
            AminoAcid::Gly => 'G',
            AminoAcid::His => 'H',
            AminoAcid::Ile => 'I',
            AminoAcid::Lys => 'K',
            AminoAcid::Leu => 'L',
            AminoAcid::Met => 'M',
            AminoAcid::Asn => 'N',
            AminoAcid::Pro => 'P',
            AminoAcid::Gln => 'Q',
            AminoAcid::Arg => 'R',
            AminoAcid::Ser => 'S',
            AminoAcid::Thr => 'T',
            AminoAcid::Val => 'V',
            AminoAcid::Trp => 'W',
            AminoAcid::Tyr => 'Y',
        }
    }

    /// Parse a one-letter code, case-insensitively
    pub fn from_one_letter(code: char) -> Option<Self> {
        let upper = code.to_ascii_uppercase();
        Self::ALL.iter().copied().find(|aa| aa.one_letter() == upper)
    }

    /// Position in `ALL`, usable as a dense array index
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_letter())
    }
}

/// Result of translating a single codon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Translation {
    Amino(AminoAcid),
    Stop,
}

/// A nucleotide triplet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon([u8; 3]);

impl Codon {
    pub const fn new(bases: [u8; 3]) -> Self {
        Self(bases)
    }

    /// Take the first three bytes of `bytes`, if there are that many
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [a, b, c, ..] => Some(Self([*a, *b, *c])),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    /// Rewrite the triplet into the canonical uppercase RNA alphabet as far as `config` allows
    pub fn normalized(self, config: &TranslationConfig) -> Self {
        let mut bases = self.0;
        for base in bases.iter_mut() {
            if config.fold_case {
                *base = base.to_ascii_uppercase();
            }
            if config.dna_input {
                *base = match *base {
                    b'T' => b'U',
                    b't' => b'u',
                    other => other,
                };
            }
        }
        Self(bases)
    }
}

impl std::str::FromStr for Codon {
    type Err = codonprof_core::CodonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [a, b, c] => Ok(Self([*a, *b, *c])),
            other => Err(codonprof_core::CodonError::unknown_codon(other)),
        }
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// Codon table collaborator queried while building profiles
///
/// Implementations must be pure: the same codon always yields the same
/// translation, and `codons_of` returns a non-empty list of distinct codons
/// in a stable order.
pub trait CodonLookup {
    /// Classify a codon, failing with `UnknownCodon` if it is not in the table
    fn amino_acid_of(&self, codon: &Codon) -> CodonResult<Translation>;

    /// Synonymous codons for an amino acid, in canonical order
    fn codons_of(&self, amino_acid: AminoAcid) -> &[Codon];
}
