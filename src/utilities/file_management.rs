use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::errors::FetchError;

/// Writes `content` as pretty printed JSON, creating parent directories as needed.
/// Non-ASCII text is written as-is.
pub fn save_to_file<T: Serialize + ?Sized>(path: &Path, content: &T) -> Result<(), FetchError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(content)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
pub fn load_from_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, FetchError> {
    let reader = std::io::BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/cards.json");

        save_to_file(&path, &json!([{"id": "OGN-001"}])).unwrap();

        assert!(path.is_file());
    }

    #[test]
    fn test_save_is_pretty_printed_with_two_spaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.json");

        save_to_file(&path, &json!([{"id": "OGN-001"}])).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "[\n  {\n    \"id\": \"OGN-001\"\n  }\n]");
    }

    #[test]
    fn test_save_keeps_non_ascii_unescaped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.json");

        save_to_file(&path, &json!(["Kai'Sa – Évolution"])).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Kai'Sa – Évolution"));
        assert!(!written.contains("\\u"));
    }

    #[test]
    fn test_load_reads_back_saved_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.json");
        let content = json!([{"id": "OGN-001", "tags": ["Mech"]}]);

        save_to_file(&path, &content).unwrap();
        let loaded: Value = load_from_json_file(&path).unwrap();

        assert_eq!(loaded, content);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result: Result<Value, FetchError> =
            load_from_json_file(&dir.path().join("missing.json"));

        assert!(matches!(result, Err(FetchError::Io(_))));
    }
}
