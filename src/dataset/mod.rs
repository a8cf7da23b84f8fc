use std::sync::Arc;

use arrow::array::{Array, ArrayRef, BooleanArray, StringArray};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

use crate::sanitize::{sanitize_batch, BatchOptions, BatchSummary};

mod parquet_output;
pub use parquet_output::*;

mod tsv;
pub use tsv::*;

pub const DEFAULT_SMILES_COLUMN: &str = "SMILES";
pub const DEFAULT_SANITIZED_COLUMN: &str = "SMILES_sanitized";
pub const DEFAULT_CHANGED_COLUMN: &str = "Was_Changed";

/// An in-memory tabular dataset. All input columns are read as nullable text.
#[derive(Debug, Clone)]
pub struct Table {
    pub schema: SchemaRef,
    pub batches: Vec<RecordBatch>,
}

impl Table {
    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(|b| b.num_rows()).sum()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.schema
            .fields()
            .iter()
            .map(|f| f.name().to_string())
            .collect()
    }

    /// Values of a text column across every batch, nulls preserved.
    pub fn column_values(&self, name: &str) -> eyre::Result<Vec<Option<String>>> {
        let idx = self
            .schema
            .index_of(name)
            .map_err(|_| eyre::eyre!("Column '{}' not found in table", name))?;

        let mut values = Vec::with_capacity(self.num_rows());
        for batch in &self.batches {
            let column = batch
                .column(idx)
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or(eyre::eyre!("Column '{}' is not a text column", name))?;

            for row in 0..column.len() {
                if column.is_null(row) {
                    values.push(None);
                } else {
                    values.push(Some(column.value(row).to_string()));
                }
            }
        }

        Ok(values)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    pub smiles_column: String,
    pub sanitized_column: String,
    pub changed_column: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            smiles_column: DEFAULT_SMILES_COLUMN.to_string(),
            sanitized_column: DEFAULT_SANITIZED_COLUMN.to_string(),
            changed_column: DEFAULT_CHANGED_COLUMN.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SanitizedTable {
    pub table: Table,
    pub summary: BatchSummary,
}

/// Appends the sanitized SMILES and was-changed columns to every row of `table`. Existing
/// columns and row order are untouched.
pub fn sanitize_table(
    table: &Table,
    columns: &ColumnConfig,
    options: &BatchOptions,
) -> eyre::Result<SanitizedTable> {
    for output in [&columns.sanitized_column, &columns.changed_column] {
        if table.schema.index_of(output).is_ok() {
            return Err(eyre::eyre!("Output column '{}' already exists", output));
        }
    }

    let smiles = table.column_values(&columns.smiles_column)?;
    let report = sanitize_batch(&smiles, options);
    if report.interrupted {
        return Err(eyre::eyre!(
            "Time limit reached after {} of {} records, no output written",
            report.outcomes.len(),
            smiles.len()
        ));
    }

    let mut fields = table
        .schema
        .fields()
        .iter()
        .map(|f| f.as_ref().clone())
        .collect::<Vec<Field>>();
    fields.push(Field::new(&columns.sanitized_column, DataType::Utf8, true));
    fields.push(Field::new(&columns.changed_column, DataType::Boolean, false));
    let schema = Arc::new(Schema::new(fields));

    let mut outcomes = report.outcomes.iter();
    let mut batches = Vec::with_capacity(table.batches.len());
    for batch in &table.batches {
        let (sanitized, changed): (Vec<Option<String>>, Vec<bool>) = outcomes
            .by_ref()
            .take(batch.num_rows())
            .map(|outcome| outcome.to_columns())
            .unzip();

        let mut arrays: Vec<ArrayRef> = batch.columns().to_vec();
        arrays.push(Arc::new(StringArray::from(sanitized)));
        arrays.push(Arc::new(BooleanArray::from(changed)));

        batches.push(RecordBatch::try_new(schema.clone(), arrays)?);
    }

    Ok(SanitizedTable {
        table: Table { schema, batches },
        summary: report.summary,
    })
}
