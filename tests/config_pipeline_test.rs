/// End-to-end checks: configuration file -> logging -> profiles -> distance
use codonprof::{
    init_logging, load_config, profile_with_config, save_config, AminoAcid, CodonError, Config,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_config_pipeline() -> anyhow::Result<()> {
    let config = Config::default();
    init_logging(&config.logging)?;

    let left = profile_with_config("atgaaggctgcacttTAA", &config)?.sorted();
    let right = profile_with_config("UACGCC", &config)?.sorted();

    assert_eq!(
        left.codes(),
        vec![AminoAcid::Ala, AminoAcid::Lys, AminoAcid::Leu, AminoAcid::Met]
    );
    assert_eq!(left.amino_acid_compare(&right)?, 5);
    Ok(())
}

#[test]
fn test_strict_config_from_file() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[translation]
fold_case = false
dna_input = false
"#
    )?;

    let config = load_config(file.path())?;

    assert!(profile_with_config("AUGGCU", &config).is_ok());
    match profile_with_config("augGCU", &config) {
        Err(CodonError::UnknownCodon(codon)) => assert_eq!(codon, "aug"),
        other => panic!("Expected UnknownCodon, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_saved_config_is_reloadable() -> anyhow::Result<()> {
    let mut config = Config::default();
    config.translation.dna_input = false;

    let file = NamedTempFile::new()?;
    save_config(file.path(), &config)?;

    assert_eq!(load_config(file.path())?, config);
    Ok(())
}
