use smiles_sanitizer::command_line::prelude::Command;
use smiles_sanitizer::command_line::{publish, rest_api_server, sanitize, standardize};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = Command::new("smiles-sanitizer")
        .subcommand_required(true)
        .subcommand(sanitize::command())
        .subcommand(standardize::command())
        .subcommand(publish::command())
        .subcommand(rest_api_server::command());
    let matches = app.get_matches();

    match matches.subcommand() {
        Some((sanitize::NAME, matches)) => sanitize::action(matches),
        Some((standardize::NAME, matches)) => standardize::action(matches),
        Some((publish::NAME, matches)) => publish::action(matches).await,
        Some((rest_api_server::NAME, matches)) => rest_api_server::action(matches).await,
        Some((unknown, _)) => Err(eyre::eyre!("Unknown subcommand: {}", unknown)),
        None => Err(eyre::eyre!("No subcommand given")),
    }
}
