use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::command_line::prelude::*;
use crate::dataset::{
    default_output_path, read_table, sanitize_table, write_parquet, write_tsv, ColumnConfig,
    DEFAULT_CHANGED_COLUMN, DEFAULT_SANITIZED_COLUMN, DEFAULT_SMILES_COLUMN,
};
use crate::sanitize::{BatchOptions, DEFAULT_CHUNK_SIZE};

pub const NAME: &str = "sanitize";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Standardize every SMILES in a TSV file and flag the ones that changed")
        .arg(
            Arg::new("input")
                .required(true)
                .long("input")
                .short('i')
                .num_args(1),
        )
        .arg(
            Arg::new("output")
                .required(false)
                .long("output")
                .short('o')
                .help("Defaults to <input stem>_sanitized.tsv next to the input")
                .num_args(1),
        )
        .arg(
            Arg::new("smiles-column")
                .required(false)
                .long("smiles-column")
                .default_value(DEFAULT_SMILES_COLUMN)
                .num_args(1),
        )
        .arg(
            Arg::new("sanitized-column")
                .required(false)
                .long("sanitized-column")
                .default_value(DEFAULT_SANITIZED_COLUMN)
                .num_args(1),
        )
        .arg(
            Arg::new("changed-column")
                .required(false)
                .long("changed-column")
                .default_value(DEFAULT_CHANGED_COLUMN)
                .num_args(1),
        )
        .arg(
            Arg::new("chunk-size")
                .required(false)
                .long("chunk-size")
                .short('c')
                .num_args(1),
        )
        .arg(
            Arg::new("time-limit")
                .required(false)
                .long("time-limit")
                .short('t')
                .help("Give up after this many seconds")
                .num_args(1),
        )
        .arg(
            Arg::new("sequential")
                .required(false)
                .long("sequential")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("parquet-output")
                .required(false)
                .long("parquet-output")
                .help("Also write the sanitized table as Parquet")
                .num_args(1),
        )
}

#[allow(clippy::print_stdout)]
pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let input = matches
        .get_one::<String>("input")
        .ok_or(eyre::eyre!("Failed to extract input path"))?;
    let input = PathBuf::from(input);
    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(&input));

    let columns = ColumnConfig {
        smiles_column: matches
            .get_one::<String>("smiles-column")
            .ok_or(eyre::eyre!("Failed to extract smiles column"))?
            .to_string(),
        sanitized_column: matches
            .get_one::<String>("sanitized-column")
            .ok_or(eyre::eyre!("Failed to extract sanitized column"))?
            .to_string(),
        changed_column: matches
            .get_one::<String>("changed-column")
            .ok_or(eyre::eyre!("Failed to extract changed column"))?
            .to_string(),
    };

    let chunk_size = if let Some(chunk_size) = matches.get_one::<String>("chunk-size") {
        chunk_size.parse::<usize>()?
    } else {
        DEFAULT_CHUNK_SIZE
    };

    let deadline = match matches.get_one::<String>("time-limit") {
        Some(seconds) => {
            Some(Instant::now() + Duration::try_from_secs_f64(seconds.parse::<f64>()?)?)
        }
        None => None,
    };

    let options = BatchOptions {
        parallel: !matches.get_flag("sequential"),
        chunk_size,
        deadline,
    };

    let table = read_table(&input, b'\t')?;
    let sanitized = sanitize_table(&table, &columns, &options)?;

    write_tsv(&sanitized.table, &output)?;
    if let Some(parquet_output) = matches.get_one::<String>("parquet-output") {
        write_parquet(&sanitized.table, &PathBuf::from(parquet_output))?;
    }

    log::info!(
        "Parse failures: {}, standardization failures: {}, empty inputs: {}",
        sanitized.summary.parse_failures,
        sanitized.summary.standardization_failures,
        sanitized.summary.no_input
    );
    println!("Total SMILES changed: {}", sanitized.summary.changed);

    Ok(())
}
