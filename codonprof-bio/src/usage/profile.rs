use super::node::UsageNode;
use crate::codon::{AminoAcid, Codon, CodonLookup, StandardCodonTable, Translation};
use codonprof_core::{CodonResult, TranslationConfig};

type Link = Option<Box<UsageNode>>;

/// Per-amino-acid codon usage, held as a singly linked chain of `UsageNode`s
///
/// A freshly built profile lists amino acids in first-occurrence order;
/// `sort` puts it into ascending `AminoAcid` order, which the comparison
/// operations require.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodonProfile {
    pub(crate) head: Link,
}

impl CodonProfile {
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Build from an RNA/DNA sequence with the standard table and default normalization
    pub fn from_sequence<S: AsRef<[u8]>>(sequence: S) -> CodonResult<Self> {
        Self::build(sequence, &StandardCodonTable, &TranslationConfig::default())
    }

    /// Tally whole codons up to the first stop codon
    ///
    /// A trailing partial codon is ignored. Any triplet the lookup cannot
    /// classify fails the whole build.
    pub fn build<S, L>(sequence: S, lookup: &L, config: &TranslationConfig) -> CodonResult<Self>
    where
        S: AsRef<[u8]>,
        L: CodonLookup + ?Sized,
    {
        let sequence = sequence.as_ref();
        let mut profile = Self::new();
        let mut consumed = 0usize;

        for chunk in sequence.chunks_exact(3) {
            let Some(codon) = Codon::from_slice(chunk) else {
                break;
            };
            let codon = codon.normalized(config);

            let code = match lookup.amino_acid_of(&codon)? {
                Translation::Stop => {
                    tracing::debug!(%codon, position = consumed * 3, "stop codon reached");
                    break;
                }
                Translation::Amino(aa) => aa,
            };

            profile.add_codon(code, codon, lookup)?;
            consumed += 1;
        }

        tracing::debug!(
            codons = consumed,
            amino_acids = profile.len(),
            ignored_bases = sequence.len() % 3,
            "built codon profile"
        );
        Ok(profile)
    }

    /// Increment the node for `code`, appending a new node at the tail if there is none
    fn add_codon<L: CodonLookup + ?Sized>(
        &mut self,
        code: AminoAcid,
        codon: Codon,
        lookup: &L,
    ) -> CodonResult<()> {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            if node.code() == code {
                node.increment(&codon);
                return Ok(());
            }
            slot = &mut node.next;
        }

        *slot = Some(Box::new(UsageNode::new(codon, lookup)?));
        Ok(())
    }

    /// Reorder the chain into ascending amino acid order
    ///
    /// Stable insertion sort: each node is detached and relinked before the
    /// first node whose code exceeds it. No node is created or dropped.
    pub fn sort(&mut self) {
        let mut unsorted = self.head.take();
        let mut sorted: Link = None;

        while let Some(mut node) = unsorted {
            unsorted = node.next.take();
            insert_sorted(&mut sorted, node);
        }

        self.head = sorted;
        tracing::debug!(amino_acids = self.len(), "sorted codon profile");
    }

    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }

    /// True when every node's code is no greater than its successor's
    pub fn is_sorted(&self) -> bool {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            match node.next() {
                Some(next) if node.code() > next.code() => return false,
                next => current = next,
            }
        }
        true
    }

    /// Amino acids in chain order
    pub fn codes(&self) -> Vec<AminoAcid> {
        self.iter().map(UsageNode::code).collect()
    }

    /// Total count per amino acid, aligned with `codes()`
    pub fn totals(&self) -> Vec<usize> {
        self.iter().map(UsageNode::total_count).collect()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn head(&self) -> Option<&UsageNode> {
        self.head.as_deref()
    }

    pub fn get(&self, code: AminoAcid) -> Option<&UsageNode> {
        self.iter().find(|node| node.code() == code)
    }

    /// Number of distinct amino acids observed
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of codons tallied across the whole profile
    pub fn total_count(&self) -> usize {
        self.iter().map(UsageNode::total_count).sum()
    }
}

/// Link `node` in front of the first node in `slot`'s chain whose code is greater
fn insert_sorted(mut slot: &mut Link, mut node: Box<UsageNode>) {
    while slot.as_ref().is_some_and(|current| current.code() <= node.code()) {
        if let Some(current) = slot {
            slot = &mut current.next;
        }
    }
    node.next = slot.take();
    *slot = Some(node);
}

impl Drop for CodonProfile {
    fn drop(&mut self) {
        // Unlink iteratively so long chains don't recurse through Box drops
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

/// Borrowing iterator over the nodes of a profile, head to tail
pub struct Iter<'a> {
    next: Option<&'a UsageNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a UsageNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        Some(node)
    }
}

impl<'a> IntoIterator for &'a CodonProfile {
    type Item = &'a UsageNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
