use crate::command_line::prelude::*;
use crate::sanitize::sanitize_smiles;

pub const NAME: &str = "standardize";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Sanitize a single SMILES and print the outcome as JSON")
        .arg(
            Arg::new("smiles")
                .required(true)
                .long("smiles")
                .short('s')
                .num_args(1),
        )
}

#[allow(clippy::print_stdout)]
pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let smiles = matches
        .get_one::<String>("smiles")
        .ok_or(eyre::eyre!("Failed to extract smiles"))?;

    let outcome = sanitize_smiles(Some(smiles));

    let result = serde_json::json!({
        "smiles": smiles,
        "canonical_smiles": outcome.canonical_smiles(),
        "changed": outcome.changed(),
        "status": outcome.status(),
        "error": outcome.error_message(),
    });
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
