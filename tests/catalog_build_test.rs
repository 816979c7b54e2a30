//! End-to-end catalog tests: configuration, harvesting, namespacing, and
//! report output across mixed collection kinds.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use toolharvest::catalog::{report, CatalogBuilder};
use toolharvest::config::CatalogConfig;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

const CLASS_TOOLS: &str = r#"
DESC_MOLWT = "Calculate the molecular weight of a compound."

class CalculateMolWt:
    name: str = "CalculateMolWt"
    description: str = DESC_MOLWT

    def _run(self, smiles: str) -> float:
        """
        Parameters
        ----------
        smiles : str
        Returns
        -------
        weight : float
        """
        return 0.0

class NotATool:
    name: str = "Helper"
    description: str = "No _run method here."
"#;

const FUNCTION_TOOLS: &str = r#"
def balance(equation: str) -> str:
    """
    Name: BalanceEquation
    Description: Balance a chemical equation.
    Parameters:
        equation (str): unbalanced equation
    Returns:
        balanced (str): balanced equation
    """
    return equation
"#;

const DELIMITED_TOOLS: &str = r#"
def to_smiles(name: str) -> str:
    """Convert a compound name to SMILES.

    Args:
        name: IUPAC or common name

    Returns:
        smiles: the SMILES string
    """
    return ""
"#;

#[test]
fn test_mixed_collections_build_in_config_order() {
    let dir = tempfile::tempdir().unwrap();

    let classes_dir = dir.path().join("cactus");
    fs::create_dir(&classes_dir).unwrap();
    write_file(&classes_dir, "molwt.py", CLASS_TOOLS);

    let functions_dir = dir.path().join("chemlib");
    fs::create_dir(&functions_dir).unwrap();
    write_file(&functions_dir, "balance.py", FUNCTION_TOOLS);

    let delimited_dir = dir.path().join("convert");
    fs::create_dir(&delimited_dir).unwrap();
    write_file(&delimited_dir, "names.py", DELIMITED_TOOLS);

    let csv_path = write_file(
        dir.path(),
        "extra.csv",
        "name,description,inputs,outputs\nMolSim,Molecular similarity,\"smiles: str\",float\n",
    );

    let config_path = write_file(
        dir.path(),
        "catalog.toml",
        &format!(
            r#"
[[collections]]
name = "cactus"
kind = "classes"
path = "{}"

[[collections]]
name = "chemlib"
kind = "functions"
path = "{}"

[[collections]]
name = "convert"
kind = "delimited"
path = "{}"

[[collections]]
name = "extra"
kind = "csv"
path = "{}"
"#,
            classes_dir.display(),
            functions_dir.display(),
            delimited_dir.display(),
            csv_path.display()
        ),
    );

    let config = CatalogConfig::from_file(&config_path).unwrap();
    let records = CatalogBuilder::new(config).build().unwrap();

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "cactus/CalculateMolWt",
            "chemlib/balance",
            "convert/to_smiles",
            "extra/MolSim"
        ]
    );

    // Class without _run is excluded.
    assert!(!names.iter().any(|n| n.contains("Helper")));

    let molwt = &records[0];
    assert_eq!(
        molwt.description,
        "Calculate the molecular weight of a compound."
    );
    assert_eq!(molwt.inputs, "smiles : str");
    assert_eq!(molwt.outputs, "weight : float");
}

#[test]
fn test_manifest_limits_collection_to_listed_files() {
    let dir = tempfile::tempdir().unwrap();

    let tools_dir = dir.path().join("tools");
    fs::create_dir(&tools_dir).unwrap();
    write_file(&tools_dir, "wanted.py", CLASS_TOOLS);
    write_file(
        &tools_dir,
        "unwanted.py",
        r#"
class Extra:
    name: str = "Extra"
    description: str = "Should not be harvested."

    def _run(self):
        pass
"#,
    );

    let manifest = write_file(
        dir.path(),
        "tools.json",
        r#"{"molwt": {"path": "wanted.py"}}"#,
    );

    let config_path = write_file(
        dir.path(),
        "catalog.toml",
        &format!(
            r#"
[[collections]]
name = "curated"
kind = "classes"
path = "{}"
manifest = "{}"
"#,
            tools_dir.display(),
            manifest.display()
        ),
    );

    let config = CatalogConfig::from_file(&config_path).unwrap();
    let records = CatalogBuilder::new(config).build().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "curated/CalculateMolWt");
}

#[test]
fn test_report_and_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    let functions_dir = dir.path().join("chemlib");
    fs::create_dir(&functions_dir).unwrap();
    write_file(&functions_dir, "balance.py", FUNCTION_TOOLS);

    let config_path = write_file(
        dir.path(),
        "catalog.toml",
        &format!(
            r#"
[[collections]]
name = "chemlib"
kind = "functions"
path = "{}"
"#,
            functions_dir.display()
        ),
    );

    let config = CatalogConfig::from_file(&config_path).unwrap();
    let records = CatalogBuilder::new(config).build().unwrap();

    let mut text = Vec::new();
    report::write_text_report(&mut text, &records).unwrap();
    let text = String::from_utf8(text).unwrap();
    assert!(text.starts_with("0\nName: chemlib/balance\n"));
    assert!(text.contains("Description: Balance a chemical equation.\n"));
    assert!(text.contains("Inputs: \n\tequation (str): unbalanced equation\n"));
    assert!(text.contains("Outputs:\n\tbalanced (str): balanced equation\n"));

    let mut jsonl = Vec::new();
    report::write_jsonl(&mut jsonl, &records).unwrap();
    let jsonl = String::from_utf8(jsonl).unwrap();
    let parsed: Vec<toolharvest::ToolRecord> = jsonl
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(parsed, records);
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    // Collection names may not contain the namespace separator.
    let config_path = write_file(
        dir.path(),
        "catalog.toml",
        r#"
[[collections]]
name = "bad/name"
kind = "classes"
path = "tools"
"#,
    );
    assert!(CatalogConfig::from_file(&config_path).is_err());

    // CSV collections take no manifest.
    let config_path = write_file(
        dir.path(),
        "catalog2.toml",
        r#"
[[collections]]
name = "extra"
kind = "csv"
path = "extra.csv"
manifest = "tools.json"
"#,
    );
    assert!(CatalogConfig::from_file(&config_path).is_err());
}
