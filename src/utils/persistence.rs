use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::Result;
use crate::utils::paths::ensure_dir;

const TMP_SUFFIX: &str = "tmp";

/// Writes a value as pretty JSON atomically by staging to a temporary file.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a JSON document from disk, returning structured errors on failure.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Probe {
        label: String,
        value: i64,
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("probe.json");
        let probe = Probe {
            label: "groceries".into(),
            value: 42,
        };
        write_json_atomic(&path, &probe).expect("write");
        let loaded: Probe = read_json(&path).expect("read");
        assert_eq!(loaded, probe);
    }

    #[test]
    fn write_leaves_no_temp_file_behind() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("probe.json");
        let probe = Probe {
            label: "rent".into(),
            value: 7,
        };
        write_json_atomic(&path, &probe).expect("write");
        assert!(!path.with_extension("json.tmp").exists());
    }
}
