use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::csv::{ReaderBuilder, WriterBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::dataset::Table;

const READ_BATCH_SIZE: usize = 8_192;

/// Reads a delimited text file with a header row. Every column is loaded as nullable text and
/// empty cells become nulls.
pub fn read_table(path: &Path, delimiter: u8) -> eyre::Result<Table> {
    let mut header_line = String::new();
    BufReader::new(File::open(path)?).read_line(&mut header_line)?;

    let header_line = header_line.trim_end_matches(['\r', '\n']);
    if header_line.is_empty() {
        return Err(eyre::eyre!("{} has no header row", path.display()));
    }

    let fields = header_line
        .split(delimiter as char)
        .map(|name| Field::new(name.trim(), DataType::Utf8, true))
        .collect::<Vec<_>>();
    let schema = Arc::new(Schema::new(fields));

    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_delimiter(delimiter)
        .with_batch_size(READ_BATCH_SIZE)
        .build(File::open(path)?)?;

    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    log::info!(
        "Read {} rows from {}",
        batches.iter().map(|b| b.num_rows()).sum::<usize>(),
        path.display()
    );

    Ok(Table { schema, batches })
}

pub fn write_tsv(table: &Table, path: &Path) -> eyre::Result<()> {
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new()
        .with_header(true)
        .with_delimiter(b'\t')
        .build(file);

    if table.batches.is_empty() {
        writer.write(&RecordBatch::new_empty(table.schema.clone()))?;
    }
    for batch in &table.batches {
        writer.write(batch)?;
    }

    log::info!("Wrote {} rows to {}", table.num_rows(), path.display());
    Ok(())
}

/// `actives.tsv` becomes `actives_sanitized.tsv` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let extension = input
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_else(|| "tsv".to_string());

    input.with_file_name(format!("{stem}_sanitized.{extension}"))
}
