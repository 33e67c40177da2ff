/// Property tests for codon usage profiles
use codonprof_bio::codon::{CodonLookup, StandardCodonTable, Translation};
use codonprof_bio::usage::CodonProfile;
use proptest::prelude::*;

/// Any of the 64 uppercase RNA codons
fn codon_strategy() -> impl Strategy<Value = String> {
    let codons: Vec<String> = StandardCodonTable::all_codons().map(|c| c.to_string()).collect();
    prop::sample::select(codons)
}

/// Sense codons only
fn sense_codon_strategy() -> impl Strategy<Value = String> {
    let table = StandardCodonTable::new();
    let codons: Vec<String> = StandardCodonTable::all_codons()
        .filter(|c| table.amino_acid_of(c).unwrap() != Translation::Stop)
        .map(|c| c.to_string())
        .collect();
    prop::sample::select(codons)
}

/// Codons followed by 0-2 stray bases
fn sequence_strategy() -> impl Strategy<Value = (Vec<String>, String)> {
    (
        prop::collection::vec(codon_strategy(), 0..60),
        "[ACGU]{0,2}",
    )
}

fn is_stop(codon: &str) -> bool {
    matches!(codon, "UAA" | "UAG" | "UGA")
}

fn join(codons: &[String], tail: &str) -> String {
    let mut sequence = codons.concat();
    sequence.push_str(tail);
    sequence
}

proptest! {
    #[test]
    fn prop_count_conservation((codons, tail) in sequence_strategy()) {
        let profile = CodonProfile::from_sequence(join(&codons, &tail)).unwrap();
        let before_stop = codons.iter().take_while(|c| !is_stop(c)).count();

        prop_assert_eq!(profile.totals().iter().sum::<usize>(), before_stop);
        prop_assert_eq!(profile.total_count(), before_stop);
    }

    #[test]
    fn prop_nothing_after_stop_is_observed(
        prefix in prop::collection::vec(sense_codon_strategy(), 0..30),
        stop in prop::sample::select(vec!["UAA", "UAG", "UGA"]),
        suffix in prop::collection::vec(codon_strategy(), 0..30),
    ) {
        let with_suffix = format!("{}{}{}", prefix.concat(), stop, suffix.concat());
        let prefix_only = prefix.concat();

        prop_assert_eq!(
            CodonProfile::from_sequence(with_suffix).unwrap(),
            CodonProfile::from_sequence(prefix_only).unwrap()
        );
    }

    #[test]
    fn prop_sort_is_idempotent((codons, tail) in sequence_strategy()) {
        let once = CodonProfile::from_sequence(join(&codons, &tail)).unwrap().sorted();
        let twice = once.clone().sorted();

        prop_assert!(once.is_sorted());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_sort_preserves_nodes((codons, tail) in sequence_strategy()) {
        let profile = CodonProfile::from_sequence(join(&codons, &tail)).unwrap();
        let sorted = profile.clone().sorted();

        prop_assert_eq!(sorted.len(), profile.len());
        for node in &profile {
            prop_assert_eq!(sorted.get(node.code()).map(|n| n.counts()), Some(node.counts()));
        }
    }

    #[test]
    fn prop_is_sorted_matches_adjacent_pairs((codons, tail) in sequence_strategy()) {
        let profile = CodonProfile::from_sequence(join(&codons, &tail)).unwrap();
        let codes = profile.codes();
        let expected = codes.windows(2).all(|pair| pair[0] <= pair[1]);

        prop_assert_eq!(profile.is_sorted(), expected);
    }

    #[test]
    fn prop_self_distance_is_zero((codons, tail) in sequence_strategy()) {
        let profile = CodonProfile::from_sequence(join(&codons, &tail)).unwrap().sorted();

        prop_assert_eq!(profile.amino_acid_compare(&profile).unwrap(), 0);
        prop_assert_eq!(profile.codon_compare(&profile).unwrap(), 0);
    }

    #[test]
    fn prop_distance_is_symmetric_and_bounded(
        (left, left_tail) in sequence_strategy(),
        (right, right_tail) in sequence_strategy(),
    ) {
        let a = CodonProfile::from_sequence(join(&left, &left_tail)).unwrap().sorted();
        let b = CodonProfile::from_sequence(join(&right, &right_tail)).unwrap().sorted();

        let aa = a.amino_acid_compare(&b).unwrap();
        let codon = a.codon_compare(&b).unwrap();

        prop_assert_eq!(aa, b.amino_acid_compare(&a).unwrap());
        prop_assert_eq!(codon, b.codon_compare(&a).unwrap());
        prop_assert!(aa <= codon);
        prop_assert!(codon <= a.total_count() + b.total_count());
    }
}
