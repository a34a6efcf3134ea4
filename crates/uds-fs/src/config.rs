//! JSON-backed key/value settings store

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::{Error, Result, io};

/// A flat key/value settings store persisted as a pretty-printed JSON object.
///
/// Keys are opaque dotted strings (e.g. `UDS.public_ip`). Mutations happen
/// in memory; [`JsonKvStore::save`] persists the whole object atomically.
#[derive(Debug)]
pub struct JsonKvStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl JsonKvStore {
    /// Open the store backed by `path`. A missing file loads as an empty
    /// store; a present file must contain a JSON object.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = io::read_text(&path)?;
            let value: Value =
                serde_json::from_str(&content).map_err(|e| Error::StoreParse {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
            match value {
                Value::Object(map) => map,
                other => {
                    return Err(Error::StoreParse {
                        path,
                        message: format!("expected a JSON object, found {other}"),
                    });
                }
            }
        } else {
            Map::new()
        };
        Ok(Self { path, entries })
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    /// Look up the string value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Remove `key` if present. Removing an absent key is a no-op.
    pub fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Persist the store atomically to its backing file.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&Value::Object(self.entries.clone()))
            .map_err(|e| Error::StoreParse {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        io::write_text(&self.path, &content)
    }
}
