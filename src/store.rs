//! The on-disk store: one JSON array of todo records.
//!
//! A deliberately narrow interface — load all, save all, raw bytes — so the
//! handlers never touch the filesystem directly and the whole persistence
//! layer could be swapped out behind these three methods.
//!
//! Every mutating request performs full read → in-memory change → full
//! rewrite. Two concurrent writers race and the last write wins; callers
//! must not rely on concurrent-safe semantics.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::error;

use crate::error::Error;
use crate::todo::Todo;

/// Handle to the JSON store file.
#[derive(Clone, Debug)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Points the store at `path`. The file itself is created and owned by
    /// the deployment, not by this constructor.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file's bytes, verbatim.
    ///
    /// The list route forwards whatever is on disk without parsing it, so a
    /// malformed store is returned to the client as-is. An unreadable file
    /// is a [`Error::Storage`] failure.
    pub async fn raw(&self) -> Result<Vec<u8>, Error> {
        fs::read(&self.path).await.map_err(|e| {
            error!(path = %self.path.display(), "store read failed: {e}");
            Error::Storage(e)
        })
    }

    /// All records, in insertion order.
    ///
    /// A missing, unreadable, or unparseable file reads as the empty list —
    /// the lookup and mutation routes start from scratch rather than fail.
    pub async fn load(&self) -> Vec<Todo> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(_) => return Vec::new(),
        };
        serde_json::from_slice(&bytes).unwrap_or_default()
    }

    /// Rewrites the entire store, pretty-printed with 2-space indentation.
    pub async fn save(&self, todos: &[Todo]) -> Result<(), Error> {
        let bytes = serde_json::to_vec_pretty(todos)?;
        fs::write(&self.path, bytes).await.map_err(|e| {
            error!(path = %self.path.display(), "store write failed: {e}");
            Error::Storage(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> Store {
        Store::new(dir.path().join("todo.json"))
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn missing_file_fails_raw_read() {
        let dir = TempDir::new().unwrap();
        let result = store_in(&dir).raw().await;
        assert!(matches!(result, Err(Error::Storage(_))));
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let todos = vec![Todo::new("first"), Todo::new("second")];
        store.save(&todos).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded, todos);
    }

    #[tokio::test]
    async fn save_preserves_insertion_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let todos = vec![Todo::new("a"), Todo::new("b"), Todo::new("c")];
        store.save(&todos).await.unwrap();

        let titles: Vec<String> =
            store.load().await.into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn save_writes_two_space_indented_json() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&[Todo::new("pretty")]).await.unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert!(contents.starts_with("[\n  {\n    \""));
    }

    #[tokio::test]
    async fn raw_returns_bytes_verbatim() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "definitely not json").unwrap();
        assert_eq!(store.raw().await.unwrap(), b"definitely not json");
    }
}
