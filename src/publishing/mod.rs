use std::path::Path;

use crate::dataset::{read_table, DEFAULT_CHANGED_COLUMN};

mod dataset_card;
pub use dataset_card::*;

mod hub;
pub use hub::*;

#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub repo: RepoId,
    pub card: DatasetCard,
    pub files: Vec<CommitFile>,
}

/// Reads a sanitized TSV and prepares the data file and card that make up the dataset
/// repository.
pub fn prepare_publish(data_path: &Path, mut card: DatasetCard) -> eyre::Result<PublishRequest> {
    let table = read_table(data_path, b'\t')?;
    let changed = table
        .column_values(DEFAULT_CHANGED_COLUMN)?
        .into_iter()
        .filter(|value| {
            value
                .as_deref()
                .is_some_and(|v| v.eq_ignore_ascii_case("true"))
        })
        .count();

    card.total_records = table.num_rows();
    card.changed_records = changed;

    let files = vec![
        CommitFile {
            path_in_repo: DATA_FILE_PATH.to_string(),
            content: std::fs::read(data_path)?,
        },
        CommitFile {
            path_in_repo: CARD_PATH.to_string(),
            content: card.render()?.into_bytes(),
        },
    ];

    Ok(PublishRequest {
        repo: card.repo.clone(),
        card,
        files,
    })
}

/// Writes the repository files below `dir` instead of uploading them.
pub fn write_bundle(request: &PublishRequest, dir: &Path) -> eyre::Result<()> {
    for file in &request.files {
        let target = dir.join(&file.path_in_repo);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, &file.content)?;
        log::info!("Wrote {}", target.display());
    }
    Ok(())
}

pub async fn upload(
    client: &HubClient,
    request: &PublishRequest,
    private: bool,
) -> eyre::Result<()> {
    client.create_dataset_repo(&request.repo, private).await?;
    client
        .commit_files(
            &request.repo,
            &request.files,
            &format!("Upload {}", request.card.title),
        )
        .await?;

    log::info!(
        "Published {} records to {}/datasets/{}",
        request.card.total_records,
        client.endpoint(),
        request.repo
    );
    Ok(())
}
