use std::{collections::BTreeMap, path::PathBuf, sync::Arc};

use serde_json::Value;
use tokio::sync::{Mutex, RwLock};

use crate::{error::StoreError, types::Profile};

const DELETED_MARKER: &str = "$$deleted";

/// File-backed collection of profiles keyed by id.
///
/// The file holds one JSON document per line. When loading, a later line for
/// an id replaces earlier ones and a line with `"$$deleted": true` drops the
/// id. Every write rewrites the file compacted, one line per live profile,
/// through a temporary file that is renamed into place.
///
/// Writers queue on `writer` for the whole rewrite. The table lock is only
/// taken to copy or swap the map, so reads never wait for file I/O.
#[derive(Clone)]
pub struct ProfileStore {
    path: PathBuf,
    table: Arc<RwLock<BTreeMap<String, Profile>>>,
    writer: Arc<Mutex<()>>,
}

impl ProfileStore {
    /// Opens the collection at `path`. A missing file is an empty collection.
    pub async fn load(path: PathBuf) -> Result<Self, StoreError> {
        let table = match async_fs::read_to_string(&path).await {
            Ok(content) => Self::parse(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StoreError::Io(e)),
        };

        tracing::debug!(path = %path.display(), profiles = table.len(), "profile store loaded");

        Ok(Self {
            path,
            table: Arc::new(RwLock::new(table)),
            writer: Arc::new(Mutex::new(())),
        })
    }

    pub async fn find_all(&self) -> Result<Vec<Profile>, StoreError> {
        let table = self.table.read().await;
        Ok(table.values().cloned().collect())
    }

    pub async fn find_one(&self, id: &str) -> Result<Profile, StoreError> {
        let table = self.table.read().await;
        table
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Replaces the profile stored under `profile.id`, or inserts it.
    pub async fn upsert(&self, profile: Profile) -> Result<(), StoreError> {
        let _writer = self.writer.lock().await;
        let mut next = self.table.read().await.clone();
        next.insert(profile.id.clone(), profile);
        self.commit(next).await
    }

    pub async fn insert(&self, profile: Profile) -> Result<(), StoreError> {
        let _writer = self.writer.lock().await;
        let mut next = self.table.read().await.clone();
        if next.contains_key(&profile.id) {
            return Err(StoreError::DuplicateId(profile.id));
        }

        next.insert(profile.id.clone(), profile);
        self.commit(next).await
    }

    /// Removes the profile with `id`. Removing an unknown id succeeds.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let _writer = self.writer.lock().await;
        let mut next = self.table.read().await.clone();
        if next.remove(id).is_none() {
            return Ok(());
        }

        self.commit(next).await
    }

    /// Persists `next` and only then makes it visible to readers. Callers
    /// hold the writer lock.
    async fn commit(&self, next: BTreeMap<String, Profile>) -> Result<(), StoreError> {
        self.persist(&next).await?;
        *self.table.write().await = next;
        Ok(())
    }

    fn parse(content: &str) -> Result<BTreeMap<String, Profile>, StoreError> {
        let mut table = BTreeMap::new();

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let doc: Value = serde_json::from_str(line).map_err(|source| StoreError::Corrupt {
                line: idx + 1,
                source,
            })?;

            if doc.get(DELETED_MARKER).and_then(Value::as_bool) == Some(true) {
                if let Some(id) = doc.get("_id").and_then(Value::as_str) {
                    table.remove(id);
                }
                continue;
            }

            let profile: Profile =
                serde_json::from_value(doc).map_err(|source| StoreError::Corrupt {
                    line: idx + 1,
                    source,
                })?;
            table.insert(profile.id.clone(), profile);
        }

        Ok(table)
    }

    async fn persist(&self, table: &BTreeMap<String, Profile>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let mut content = String::new();
        for profile in table.values() {
            content.push_str(&serde_json::to_string(profile)?);
            content.push('\n');
        }

        let tmp_path = self.path.with_extension("db~");
        async_fs::write(&tmp_path, content).await?;
        if let Err(e) = async_fs::rename(&tmp_path, &self.path).await {
            if let Err(cleanup) = async_fs::remove_file(&tmp_path).await {
                tracing::warn!(path = %tmp_path.display(), error = %cleanup, "could not remove temp file");
            }
            return Err(StoreError::Io(e));
        }
        Ok(())
    }
}
