use serde::Serialize;

use crate::dataset::{DEFAULT_CHANGED_COLUMN, DEFAULT_SANITIZED_COLUMN, DEFAULT_SMILES_COLUMN};
use crate::publishing::RepoId;

pub const DATA_FILE_PATH: &str = "data/train.tsv";
pub const CARD_PATH: &str = "README.md";

pub const DEFAULT_TITLE: &str = "Simeonov2008 Active Compounds";
pub const DEFAULT_DESCRIPTION: &str = "This dataset contains active compounds identified in a \
Quantitative High-Throughput Screening (qHTS) study. The compounds were screened for Luciferase \
inhibition to identify false positives in bioluminescence assays.";
pub const DEFAULT_CITATION: &str = "Simeonov A, et al. \"Interference with bioluminescence \
imaging cross-talk in quantitative high-throughput screening.\" *J Med Chem.* 2008; 51(8): \
2363-2374.";
pub const DEFAULT_LICENSE: &str = "mit";

#[derive(Serialize)]
struct DataFiles {
    split: &'static str,
    path: &'static str,
}

#[derive(Serialize)]
struct DataConfig {
    config_name: &'static str,
    data_files: Vec<DataFiles>,
    sep: &'static str,
}

#[derive(Serialize)]
struct FrontMatter<'a> {
    license: &'a str,
    tags: &'a [String],
    pretty_name: &'a str,
    configs: Vec<DataConfig>,
}

/// README.md for a published dataset repository.
#[derive(Debug, Clone)]
pub struct DatasetCard {
    pub repo: RepoId,
    pub title: String,
    pub description: String,
    pub citation: String,
    pub license: String,
    pub tags: Vec<String>,
    pub total_records: usize,
    pub changed_records: usize,
}

impl DatasetCard {
    pub fn new(repo: RepoId) -> Self {
        Self {
            repo,
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            citation: DEFAULT_CITATION.to_string(),
            license: DEFAULT_LICENSE.to_string(),
            tags: vec!["chemistry".to_string(), "biology".to_string()],
            total_records: 0,
            changed_records: 0,
        }
    }

    pub fn render(&self) -> eyre::Result<String> {
        let front_matter = serde_yaml::to_string(&FrontMatter {
            license: &self.license,
            tags: &self.tags,
            pretty_name: &self.title,
            configs: vec![DataConfig {
                config_name: "default",
                data_files: vec![DataFiles {
                    split: "train",
                    path: DATA_FILE_PATH,
                }],
                sep: "\t",
            }],
        })?;

        let mut card = String::new();
        card.push_str("---\n");
        card.push_str(&front_matter);
        card.push_str("---\n\n");

        card.push_str(&format!("# {}\n\n", self.title));

        card.push_str("## 1. Description and Citations\n\n");
        card.push_str(&format!("{}\n\n", self.description));
        card.push_str("**Citation:**\n\n");
        card.push_str(&format!("> {}\n\n", self.citation));

        card.push_str("## 2. Quick-Start Guide\n\n");
        card.push_str("```python\n");
        card.push_str("from datasets import load_dataset\n\n");
        card.push_str(&format!("dataset = load_dataset(\"{}\")\n", self.repo));
        card.push_str("```\n\n");

        card.push_str("## 3. Sanitization\n\n");
        card.push_str(&format!(
            "Each structure in `{}` was parsed with RDKit, cleaned up and written as a canonical \
isomeric SMILES in `{}`. `{}` is true when the cleanup changed the structure. Rows that could not be \
parsed or standardized have an empty `{}` and `{}` set to false.\n\n",
            DEFAULT_SMILES_COLUMN,
            DEFAULT_SANITIZED_COLUMN,
            DEFAULT_CHANGED_COLUMN,
            DEFAULT_SANITIZED_COLUMN,
            DEFAULT_CHANGED_COLUMN,
        ));
        card.push_str(&format!(
            "Total SMILES changed: {} of {}\n",
            self.changed_records, self.total_records
        ));

        Ok(card)
    }
}
