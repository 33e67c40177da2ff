use super::{AminoAcid, Codon, CodonLookup, Translation};
use codonprof_core::{CodonError, CodonResult};
use once_cell::sync::Lazy;
use smallvec::SmallVec;

// Standard genetic code (NCBI table 1). Codons are enumerated with each
// position cycling through U, C, A, G, first position slowest.
const STANDARD_CODE: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

const BASES: [u8; 4] = [b'U', b'C', b'A', b'G'];

/// Synonymous codons per amino acid, indexed by `AminoAcid::index`
static SYNONYMS: Lazy<Vec<SmallVec<[Codon; 6]>>> = Lazy::new(|| {
    let mut synonyms = vec![SmallVec::new(); AminoAcid::ALL.len()];
    for (idx, &symbol) in STANDARD_CODE.iter().enumerate() {
        if let Some(aa) = AminoAcid::from_one_letter(symbol as char) {
            synonyms[aa.index()].push(index_to_codon(idx));
        }
    }
    synonyms
});

fn base_index(base: u8) -> Option<usize> {
    BASES.iter().position(|&b| b == base)
}

/// Index of an uppercase RNA codon in `STANDARD_CODE`
fn codon_index(codon: &Codon) -> Option<usize> {
    let [b1, b2, b3] = *codon.as_bytes();
    Some(base_index(b1)? * 16 + base_index(b2)? * 4 + base_index(b3)?)
}

fn index_to_codon(idx: usize) -> Codon {
    Codon::new([BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]])
}

/// The standard genetic code over uppercase RNA triplets
///
/// Lowercase or DNA input must be normalized first (see `Codon::normalized`).
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCodonTable;

impl StandardCodonTable {
    pub fn new() -> Self {
        Self
    }

    /// All 64 codons in table order
    pub fn all_codons() -> impl Iterator<Item = Codon> {
        (0..STANDARD_CODE.len()).map(index_to_codon)
    }

    /// Codons that terminate translation
    pub fn stop_codons() -> impl Iterator<Item = Codon> {
        STANDARD_CODE
            .iter()
            .enumerate()
            .filter(|&(_, &symbol)| symbol == b'*')
            .map(|(idx, _)| index_to_codon(idx))
    }
}

impl CodonLookup for StandardCodonTable {
    fn amino_acid_of(&self, codon: &Codon) -> CodonResult<Translation> {
        let idx = codon_index(codon).ok_or_else(|| CodonError::unknown_codon(codon.as_bytes()))?;

        match STANDARD_CODE[idx] {
            b'*' => Ok(Translation::Stop),
            symbol => AminoAcid::from_one_letter(symbol as char)
                .map(Translation::Amino)
                .ok_or_else(|| CodonError::unknown_codon(codon.as_bytes())),
        }
    }

    fn codons_of(&self, amino_acid: AminoAcid) -> &[Codon] {
        &SYNONYMS[amino_acid.index()]
    }
}
