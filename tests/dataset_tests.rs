use std::fs::File;
use std::path::Path;

use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use smiles_sanitizer::dataset::*;
use smiles_sanitizer::sanitize::BatchOptions;
use tempdir::TempDir;

const ACTIVES: &str = "PUBCHEM_CID\tSMILES\n\
2244\tCCO\n\
1983\t\n\
241\tC1=CC=CC=C1\n\
9999\tnot_a_molecule\n";

fn write_input(dir: &Path) -> eyre::Result<std::path::PathBuf> {
    let path = dir.join("actives.tsv");
    std::fs::write(&path, ACTIVES)?;
    Ok(path)
}

#[test]
fn test_read_table_keeps_text_and_nulls() -> eyre::Result<()> {
    let tempdir = TempDir::new("smiles-sanitizer-dataset-")?;
    let table = read_table(&write_input(tempdir.path())?, b'\t')?;

    assert_eq!(table.num_rows(), 4);
    assert_eq!(table.column_names(), vec!["PUBCHEM_CID", "SMILES"]);
    assert_eq!(
        table.column_values("SMILES")?,
        vec![
            Some("CCO".to_string()),
            None,
            Some("C1=CC=CC=C1".to_string()),
            Some("not_a_molecule".to_string()),
        ]
    );
    assert!(table.column_values("missing").is_err());

    Ok(())
}

#[test]
fn test_sanitize_table_round_trip() -> eyre::Result<()> {
    let tempdir = TempDir::new("smiles-sanitizer-dataset-")?;
    let input = write_input(tempdir.path())?;
    let table = read_table(&input, b'\t')?;

    let sanitized = sanitize_table(&table, &ColumnConfig::default(), &BatchOptions::default())?;
    assert_eq!(sanitized.summary.changed, 1);
    assert_eq!(sanitized.summary.parse_failures, 1);
    assert_eq!(sanitized.summary.no_input, 1);

    let output = default_output_path(&input);
    assert_eq!(output, tempdir.path().join("actives_sanitized.tsv"));
    write_tsv(&sanitized.table, &output)?;

    let written = read_table(&output, b'\t')?;
    assert_eq!(
        written.column_names(),
        vec!["PUBCHEM_CID", "SMILES", "SMILES_sanitized", "Was_Changed"]
    );
    assert_eq!(written.column_values("PUBCHEM_CID")?, table.column_values("PUBCHEM_CID")?);
    assert_eq!(
        written.column_values("SMILES_sanitized")?,
        vec![Some("CCO".to_string()), None, Some("c1ccccc1".to_string()), None]
    );
    assert_eq!(
        written.column_values("Was_Changed")?,
        vec![
            Some("false".to_string()),
            Some("false".to_string()),
            Some("true".to_string()),
            Some("false".to_string()),
        ]
    );

    Ok(())
}

#[test]
fn test_sanitize_table_rejects_bad_columns() -> eyre::Result<()> {
    let tempdir = TempDir::new("smiles-sanitizer-dataset-")?;
    let table = read_table(&write_input(tempdir.path())?, b'\t')?;

    let missing_input = ColumnConfig {
        smiles_column: "Canonical_SMILES".to_string(),
        ..Default::default()
    };
    assert!(sanitize_table(&table, &missing_input, &BatchOptions::default()).is_err());

    let clashing_output = ColumnConfig {
        sanitized_column: "PUBCHEM_CID".to_string(),
        ..Default::default()
    };
    assert!(sanitize_table(&table, &clashing_output, &BatchOptions::default()).is_err());

    Ok(())
}

#[test]
fn test_interrupted_sanitize_is_an_error() -> eyre::Result<()> {
    let tempdir = TempDir::new("smiles-sanitizer-dataset-")?;
    let table = read_table(&write_input(tempdir.path())?, b'\t')?;

    let options = BatchOptions {
        deadline: Some(std::time::Instant::now()),
        ..Default::default()
    };
    assert!(sanitize_table(&table, &ColumnConfig::default(), &options).is_err());

    Ok(())
}

#[test]
fn test_write_parquet() -> eyre::Result<()> {
    let tempdir = TempDir::new("smiles-sanitizer-dataset-")?;
    let table = read_table(&write_input(tempdir.path())?, b'\t')?;
    let sanitized = sanitize_table(&table, &ColumnConfig::default(), &BatchOptions::default())?;

    let path = tempdir.path().join("actives_sanitized.parquet");
    write_parquet(&sanitized.table, &path)?;

    let reader = ParquetRecordBatchReaderBuilder::try_new(File::open(&path)?)?.build()?;
    let mut rows = 0;
    for batch in reader {
        let batch = batch?;
        assert_eq!(batch.num_columns(), 4);
        rows += batch.num_rows();
    }
    assert_eq!(rows, 4);

    Ok(())
}

#[test]
fn test_header_only_table() -> eyre::Result<()> {
    let tempdir = TempDir::new("smiles-sanitizer-dataset-")?;
    let input = tempdir.path().join("empty.tsv");
    std::fs::write(&input, "SMILES\n")?;

    let table = read_table(&input, b'\t')?;
    assert_eq!(table.num_rows(), 0);

    let sanitized = sanitize_table(&table, &ColumnConfig::default(), &BatchOptions::default())?;
    let output = tempdir.path().join("empty_sanitized.tsv");
    write_tsv(&sanitized.table, &output)?;

    let written = std::fs::read_to_string(&output)?;
    assert_eq!(written.trim_end(), "SMILES\tSMILES_sanitized\tWas_Changed");

    Ok(())
}
