use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";
pub const DEFAULT_DATASET_NAME: &str = "Simeonov2008";
pub const TOKEN_ENV_VAR: &str = "HF_TOKEN";

lazy_static::lazy_static! {
    static ref REPO_PART_RE: regex::Regex = regex::Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,95}$").unwrap();
}

/// Access token for the hub. Built once by the caller and passed to `HubClient::new`.
#[derive(Clone)]
pub struct HubCredentials {
    token: String,
}

impl HubCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn from_env() -> eyre::Result<Self> {
        let token = std::env::var(TOKEN_ENV_VAR)
            .map_err(|_| eyre::eyre!("No hub token given and {} is not set", TOKEN_ENV_VAR))?;
        Ok(Self::new(token))
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for HubCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubCredentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid repository id '{0}', expected namespace/name")]
pub struct InvalidRepoId(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub namespace: String,
    pub name: String,
}

impl RepoId {
    pub fn new(namespace: &str, name: &str) -> Result<Self, InvalidRepoId> {
        if !REPO_PART_RE.is_match(namespace) || !REPO_PART_RE.is_match(name) {
            return Err(InvalidRepoId(format!("{namespace}/{name}")));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
        })
    }
}

impl FromStr for RepoId {
    type Err = InvalidRepoId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, name) = s.split_once('/').ok_or(InvalidRepoId(s.to_string()))?;
        Self::new(namespace, name).map_err(|_| InvalidRepoId(s.to_string()))
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitFile {
    pub path_in_repo: String,
    pub content: Vec<u8>,
}

#[derive(Deserialize)]
struct WhoAmI {
    name: String,
}

/// Builds the NDJSON body of a commit: a header line followed by one base64 line per file.
pub fn commit_payload(files: &[CommitFile], summary: &str, description: &str) -> String {
    let mut lines = Vec::with_capacity(files.len() + 1);
    lines.push(json!({
        "key": "header",
        "value": {"summary": summary, "description": description},
    }));
    for file in files {
        lines.push(json!({
            "key": "file",
            "value": {
                "content": STANDARD.encode(&file.content),
                "path": file.path_in_repo,
                "encoding": "base64",
            },
        }));
    }

    let mut payload = lines
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    payload.push('\n');
    payload
}

async fn check_status(response: Response, context: &str) -> eyre::Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(eyre::eyre!("{} failed with status {}: {}", context, status, body))
}

pub struct HubClient {
    client: Client,
    endpoint: String,
    credentials: HubCredentials,
}

impl HubClient {
    pub fn new(endpoint: &str, credentials: HubCredentials) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn whoami(&self) -> eyre::Result<String> {
        let response = self
            .client
            .get(format!("{}/api/whoami-v2", self.endpoint))
            .bearer_auth(self.credentials.token())
            .send()
            .await?;
        let response = check_status(response, "whoami").await?;

        let user: WhoAmI = response.json().await?;
        Ok(user.name)
    }

    /// Creates the dataset repository. An existing repository is not an error.
    pub async fn create_dataset_repo(&self, repo: &RepoId, private: bool) -> eyre::Result<()> {
        let response = self
            .client
            .post(format!("{}/api/repos/create", self.endpoint))
            .bearer_auth(self.credentials.token())
            .json(&json!({
                "type": "dataset",
                "name": repo.name,
                "organization": repo.namespace,
                "private": private,
            }))
            .send()
            .await?;

        if response.status() == StatusCode::CONFLICT {
            log::info!("Dataset repository {} already exists", repo);
            return Ok(());
        }
        check_status(response, "create repository").await?;

        log::info!("Created dataset repository {}", repo);
        Ok(())
    }

    pub async fn commit_files(
        &self,
        repo: &RepoId,
        files: &[CommitFile],
        summary: &str,
    ) -> eyre::Result<()> {
        let response = self
            .client
            .post(format!(
                "{}/api/datasets/{}/{}/commit/main",
                self.endpoint, repo.namespace, repo.name
            ))
            .bearer_auth(self.credentials.token())
            .header(reqwest::header::CONTENT_TYPE, "application/x-ndjson")
            .body(commit_payload(files, summary, ""))
            .send()
            .await?;
        check_status(response, "commit").await?;

        log::info!("Committed {} files to {}", files.len(), repo);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_id_parsing() {
        let repo: RepoId = "alice/Simeonov2008".parse().unwrap();
        assert_eq!(repo.namespace, "alice");
        assert_eq!(repo.name, "Simeonov2008");
        assert_eq!(repo.to_string(), "alice/Simeonov2008");

        assert!("Simeonov2008".parse::<RepoId>().is_err());
        assert!("alice/".parse::<RepoId>().is_err());
        assert!("a/b/c".parse::<RepoId>().is_err());
        assert!("alice/has space".parse::<RepoId>().is_err());
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let credentials = HubCredentials::new("hf_secret");
        assert!(!format!("{:?}", credentials).contains("hf_secret"));
    }
}
