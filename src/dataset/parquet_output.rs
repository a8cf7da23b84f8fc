use std::fs::File;
use std::path::Path;

use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::dataset::Table;

pub fn write_parquet(table: &Table, path: &Path) -> eyre::Result<()> {
    let file = File::create(path)?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();

    let mut writer = ArrowWriter::try_new(file, table.schema.clone(), Some(props))?;
    for batch in &table.batches {
        writer.write(batch)?;
    }
    writer.close()?;

    log::info!("Wrote {} rows to {}", table.num_rows(), path.display());
    Ok(())
}
