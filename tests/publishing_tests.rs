use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use smiles_sanitizer::publishing::*;
use tempdir::TempDir;

const SANITIZED: &str = "SMILES\tSMILES_sanitized\tWas_Changed\n\
CCO\tCCO\tfalse\n\
C1=CC=CC=C1\tc1ccccc1\ttrue\n\
not_a_molecule\t\tfalse\n";

fn repo() -> RepoId {
    RepoId::new("alice", DEFAULT_DATASET_NAME).unwrap()
}

#[test]
fn test_dataset_card_render() -> eyre::Result<()> {
    let mut card = DatasetCard::new(repo());
    card.total_records = 3;
    card.changed_records = 1;
    let rendered = card.render()?;

    assert!(rendered.starts_with("---\n"));
    assert!(rendered.contains("license: mit"));
    assert!(rendered.contains("- chemistry"));
    assert!(rendered.contains("- biology"));
    assert!(rendered.contains("data/train.tsv"));
    assert!(rendered.contains("# Simeonov2008 Active Compounds"));
    assert!(rendered.contains("## 1. Description and Citations"));
    assert!(rendered.contains("> Simeonov A, et al."));
    assert!(rendered.contains("## 2. Quick-Start Guide"));
    assert!(rendered.contains("dataset = load_dataset(\"alice/Simeonov2008\")"));
    assert!(rendered.contains("Total SMILES changed: 1 of 3"));

    let front_matter = rendered
        .trim_start_matches("---\n")
        .split("---\n")
        .next()
        .unwrap();
    let yaml: serde_yaml::Value = serde_yaml::from_str(front_matter)?;
    assert_eq!(yaml["license"].as_str(), Some("mit"));
    assert_eq!(yaml["pretty_name"].as_str(), Some("Simeonov2008 Active Compounds"));
    assert_eq!(yaml["configs"][0]["sep"].as_str(), Some("\t"));

    Ok(())
}

#[test]
fn test_commit_payload() -> eyre::Result<()> {
    let files = vec![
        CommitFile {
            path_in_repo: "data/train.tsv".to_string(),
            content: b"SMILES\nCCO\n".to_vec(),
        },
        CommitFile {
            path_in_repo: "README.md".to_string(),
            content: b"# Card\n".to_vec(),
        },
    ];

    let payload = commit_payload(&files, "Upload", "");
    let lines = payload
        .lines()
        .map(serde_json::from_str::<serde_json::Value>)
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["key"], "header");
    assert_eq!(lines[0]["value"]["summary"], "Upload");
    assert_eq!(lines[1]["key"], "file");
    assert_eq!(lines[1]["value"]["path"], "data/train.tsv");
    assert_eq!(lines[1]["value"]["encoding"], "base64");

    let content = lines[1]["value"]["content"].as_str().unwrap();
    assert_eq!(STANDARD.decode(content)?, b"SMILES\nCCO\n".to_vec());

    Ok(())
}

#[test]
fn test_prepare_publish_and_bundle() -> eyre::Result<()> {
    let tempdir = TempDir::new("smiles-sanitizer-publishing-")?;
    let data = tempdir.path().join("actives_sanitized.tsv");
    std::fs::write(&data, SANITIZED)?;

    let request = prepare_publish(&data, DatasetCard::new(repo()))?;
    assert_eq!(request.card.total_records, 3);
    assert_eq!(request.card.changed_records, 1);
    assert_eq!(request.files.len(), 2);

    let bundle = tempdir.path().join("bundle");
    write_bundle(&request, &bundle)?;

    assert_eq!(std::fs::read_to_string(bundle.join(DATA_FILE_PATH))?, SANITIZED);
    let readme = std::fs::read_to_string(bundle.join(CARD_PATH))?;
    assert!(readme.contains("Total SMILES changed: 1 of 3"));

    Ok(())
}

#[test]
fn test_prepare_publish_requires_changed_column() -> eyre::Result<()> {
    let tempdir = TempDir::new("smiles-sanitizer-publishing-")?;
    let data = tempdir.path().join("raw.tsv");
    std::fs::write(&data, "SMILES\nCCO\n")?;

    assert!(prepare_publish(&data, DatasetCard::new(repo())).is_err());

    Ok(())
}

#[test]
fn test_repo_id_validation() {
    assert!(RepoId::new("alice", "Simeonov2008").is_ok());
    assert!(RepoId::new("", "Simeonov2008").is_err());
    assert!(RepoId::new("alice", "bad/name").is_err());
    assert_eq!(
        "org-name/data.set_1".parse::<RepoId>().unwrap().to_string(),
        "org-name/data.set_1"
    );
}
