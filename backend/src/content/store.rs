use common::model::content::{Collection, CollectionKind};
use log::{debug, warn};
use serde_json::Value;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON error in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} does not contain a JSON object", .path.display())]
    NotAMapping { path: PathBuf },
}

impl ContentError {
    /// True when the collection file simply does not exist.
    pub fn is_missing(&self) -> bool {
        matches!(self, ContentError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Loads content collections from a directory of JSON files.
///
/// There is no cache: every call reads the file again, so edits to the JSON files
/// show up on the next request.
#[derive(Debug, Clone)]
pub struct ContentStore {
    data_dir: PathBuf,
}

impl ContentStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        ContentStore {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_of(&self, kind: CollectionKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    /// Reads and parses one collection file.
    pub async fn read(&self, kind: CollectionKind) -> Result<Collection, ContentError> {
        let path = self.path_of(kind);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| ContentError::Io {
                path: path.clone(),
                source,
            })?;

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(ContentError::NotAMapping { path }),
            Err(source) => Err(ContentError::Json { path, source }),
        }
    }

    /// Reads a collection, returning `default` if it cannot be loaded.
    pub async fn load_or(&self, kind: CollectionKind, default: Collection) -> Collection {
        match self.read(kind).await {
            Ok(collection) => collection,
            Err(err) if err.is_missing() => {
                debug!("{}, using built-in {:?} content", err, kind);
                default
            }
            Err(err) => {
                warn!("{}, using built-in {:?} content", err, kind);
                default
            }
        }
    }

    /// Reads a collection, falling back to the kind's built-in default.
    pub async fn load(&self, kind: CollectionKind) -> Collection {
        self.load_or(kind, kind.default_collection()).await
    }
}
