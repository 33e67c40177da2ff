use crate::codon::{AminoAcid, Codon, CodonLookup, Translation};
use codonprof_core::{CodonError, CodonResult};
use smallvec::SmallVec;

/// Codon usage tally for one amino acid, linked to the next amino acid in a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageNode {
    code: AminoAcid,
    codons: SmallVec<[Codon; 6]>,
    counts: SmallVec<[usize; 6]>,
    pub(crate) next: Option<Box<UsageNode>>,
}

impl UsageNode {
    /// Create the node for `codon`'s amino acid with that codon counted once
    pub fn new<L: CodonLookup + ?Sized>(codon: Codon, lookup: &L) -> CodonResult<Self> {
        let code = match lookup.amino_acid_of(&codon)? {
            Translation::Amino(aa) => aa,
            Translation::Stop => return Err(CodonError::UnexpectedStop(codon.to_string())),
        };

        let codons: SmallVec<[Codon; 6]> = SmallVec::from_slice(lookup.codons_of(code));
        let counts = SmallVec::from_elem(0, codons.len());

        let mut node = Self {
            code,
            codons,
            counts,
            next: None,
        };
        node.increment(&codon);
        Ok(node)
    }

    pub fn code(&self) -> AminoAcid {
        self.code
    }

    pub fn codons(&self) -> &[Codon] {
        &self.codons
    }

    /// Counts aligned index-for-index with `codons()`
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn next(&self) -> Option<&UsageNode> {
        self.next.as_deref()
    }

    /// Count one occurrence of `codon`; codons outside this amino acid are ignored
    pub fn increment(&mut self, codon: &Codon) {
        match self.codons.iter().position(|c| c == codon) {
            Some(i) => self.counts[i] += 1,
            None => tracing::trace!(%codon, amino_acid = %self.code, "codon not synonymous, ignored"),
        }
    }

    pub fn count_of(&self, codon: &Codon) -> usize {
        self.codons
            .iter()
            .position(|c| c == codon)
            .map_or(0, |i| self.counts[i])
    }

    /// Total occurrences of this amino acid across all its codons
    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Difference in amino acid totals against a node for the same amino acid
    pub fn total_diff(&self, other: &UsageNode) -> usize {
        self.total_count().abs_diff(other.total_count())
    }

    /// Codon-by-codon difference against a node for the same amino acid
    pub fn codon_diff(&self, other: &UsageNode) -> usize {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .map(|(a, b)| a.abs_diff(*b))
            .sum()
    }
}
