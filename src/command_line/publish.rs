use std::path::PathBuf;

use crate::command_line::prelude::*;
use crate::publishing::{
    prepare_publish, upload, write_bundle, DatasetCard, HubClient, HubCredentials, RepoId,
    DEFAULT_DATASET_NAME, DEFAULT_ENDPOINT,
};

pub const NAME: &str = "publish";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Upload a sanitized TSV and its dataset card to a dataset hub")
        .arg(
            Arg::new("data")
                .required(true)
                .long("data")
                .short('d')
                .num_args(1),
        )
        .arg(
            Arg::new("repo-name")
                .required(false)
                .long("repo-name")
                .short('n')
                .default_value(DEFAULT_DATASET_NAME)
                .num_args(1),
        )
        .arg(
            Arg::new("namespace")
                .required(false)
                .long("namespace")
                .help("Defaults to the user the token belongs to")
                .num_args(1),
        )
        .arg(
            Arg::new("token")
                .required(false)
                .long("token")
                .help("Hub access token, HF_TOKEN is used when absent")
                .num_args(1),
        )
        .arg(
            Arg::new("endpoint")
                .required(false)
                .long("endpoint")
                .default_value(DEFAULT_ENDPOINT)
                .num_args(1),
        )
        .arg(
            Arg::new("private")
                .required(false)
                .long("private")
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new("title").required(false).long("title").num_args(1))
        .arg(
            Arg::new("description")
                .required(false)
                .long("description")
                .num_args(1),
        )
        .arg(
            Arg::new("citation")
                .required(false)
                .long("citation")
                .num_args(1),
        )
        .arg(
            Arg::new("license")
                .required(false)
                .long("license")
                .num_args(1),
        )
        .arg(
            Arg::new("tag")
                .required(false)
                .long("tag")
                .action(ArgAction::Append)
                .num_args(1),
        )
        .arg(
            Arg::new("bundle-dir")
                .required(false)
                .long("bundle-dir")
                .help("Write the repository files to this directory instead of uploading")
                .num_args(1),
        )
}

fn build_card(matches: &ArgMatches, repo: RepoId) -> DatasetCard {
    let mut card = DatasetCard::new(repo);
    if let Some(title) = matches.get_one::<String>("title") {
        card.title = title.to_string();
    }
    if let Some(description) = matches.get_one::<String>("description") {
        card.description = description.to_string();
    }
    if let Some(citation) = matches.get_one::<String>("citation") {
        card.citation = citation.to_string();
    }
    if let Some(license) = matches.get_one::<String>("license") {
        card.license = license.to_string();
    }
    if let Some(tags) = matches.get_many::<String>("tag") {
        card.tags = tags.cloned().collect();
    }
    card
}

pub async fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let data = matches
        .get_one::<String>("data")
        .ok_or(eyre::eyre!("Failed to extract data path"))?;
    let data = PathBuf::from(data);
    let repo_name = matches
        .get_one::<String>("repo-name")
        .ok_or(eyre::eyre!("Failed to extract repo name"))?;
    let namespace = matches.get_one::<String>("namespace");

    if let Some(bundle_dir) = matches.get_one::<String>("bundle-dir") {
        let namespace = namespace.ok_or(eyre::eyre!("--bundle-dir requires --namespace"))?;
        let repo = RepoId::new(namespace, repo_name)?;
        let request = prepare_publish(&data, build_card(matches, repo))?;
        write_bundle(&request, &PathBuf::from(bundle_dir))?;

        log::info!("Dataset bundle for {} written to {}", request.repo, bundle_dir);
        return Ok(());
    }

    let credentials = match matches.get_one::<String>("token") {
        Some(token) => HubCredentials::new(token.as_str()),
        None => HubCredentials::from_env()?,
    };
    let endpoint = matches
        .get_one::<String>("endpoint")
        .ok_or(eyre::eyre!("Failed to extract endpoint"))?;
    let client = HubClient::new(endpoint, credentials);

    let namespace = match namespace {
        Some(namespace) => namespace.to_string(),
        None => client.whoami().await?,
    };
    let repo = RepoId::new(&namespace, repo_name)?;

    let request = prepare_publish(&data, build_card(matches, repo))?;
    upload(&client, &request, matches.get_flag("private")).await?;

    Ok(())
}
