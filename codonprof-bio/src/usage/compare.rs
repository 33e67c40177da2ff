//! Distances between sorted codon profiles
//!
//! Both profiles are walked together like the merge step of merge sort.
//! An amino acid present on only one side contributes its full count; an
//! amino acid present on both contributes the difference between the two
//! nodes, measured either per amino acid or per codon.

use super::node::UsageNode;
use super::profile::CodonProfile;
use codonprof_core::{CodonError, CodonResult};
use std::cmp::Ordering;

impl CodonProfile {
    /// Distance in amino acid totals. Both profiles must be sorted.
    pub fn amino_acid_compare(&self, other: &CodonProfile) -> CodonResult<usize> {
        check_sorted(self, other)?;
        Ok(merge_distance(self, other, UsageNode::total_diff))
    }

    /// Distance in per-codon counts. Both profiles must be sorted.
    pub fn codon_compare(&self, other: &CodonProfile) -> CodonResult<usize> {
        check_sorted(self, other)?;
        Ok(merge_distance(self, other, UsageNode::codon_diff))
    }
}

fn check_sorted(left: &CodonProfile, right: &CodonProfile) -> CodonResult<()> {
    let side = match (left.is_sorted(), right.is_sorted()) {
        (true, true) => return Ok(()),
        (false, true) => "left",
        (true, false) => "right",
        (false, false) => "both",
    };
    Err(CodonError::PreconditionViolation(format!(
        "{} profile(s) must be sorted before comparison",
        side
    )))
}

fn merge_distance<F>(left: &CodonProfile, right: &CodonProfile, matched: F) -> usize
where
    F: Fn(&UsageNode, &UsageNode) -> usize,
{
    let mut a = left.head();
    let mut b = right.head();
    let mut distance = 0;

    loop {
        match (a, b) {
            (None, None) => break,
            (Some(x), None) => {
                distance += x.total_count();
                a = x.next();
            }
            (None, Some(y)) => {
                distance += y.total_count();
                b = y.next();
            }
            (Some(x), Some(y)) => match x.code().cmp(&y.code()) {
                Ordering::Equal => {
                    distance += matched(x, y);
                    a = x.next();
                    b = y.next();
                }
                Ordering::Less => {
                    distance += x.total_count();
                    a = x.next();
                }
                Ordering::Greater => {
                    distance += y.total_count();
                    b = y.next();
                }
            },
        }
    }

    distance
}
