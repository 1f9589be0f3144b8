//! Collection repository contract and key-value implementation.

use super::{RepoError, RepoResult, StoredCollection};
use crate::store::KeyValueStore;
use log::warn;
use std::collections::HashSet;
use std::marker::PhantomData;

/// Load/save contract for one record collection.
pub trait RecordRepository<T> {
    /// Returns every stored record; an absent key yields an empty list.
    fn load_all(&self) -> RepoResult<Vec<T>>;
    /// Replaces the stored collection with `records`.
    fn save_all(&self, records: &[T]) -> RepoResult<()>;
}

/// Collection repository persisting JSON under `T::STORAGE_KEY`.
pub struct KvRecordRepository<S, T> {
    store: S,
    _record: PhantomData<fn() -> T>,
}

impl<S: KeyValueStore, T: StoredCollection> KvRecordRepository<S, T> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }
}

impl<S: KeyValueStore, T: StoredCollection> RecordRepository<T> for KvRecordRepository<S, T> {
    fn load_all(&self) -> RepoResult<Vec<T>> {
        let key = T::STORAGE_KEY;
        let Some(raw) = self.store.get(key)? else {
            return Ok(Vec::new());
        };

        let records = match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    "event=repo_load module=repo status=degraded key={} error_code=corrupt_json line={} column={}",
                    key,
                    err.line(),
                    err.column()
                );
                return Ok(Vec::new());
            }
        };

        Ok(dedupe_by_id(key, records))
    }

    fn save_all(&self, records: &[T]) -> RepoResult<()> {
        let key = T::STORAGE_KEY;
        let raw = serde_json::to_string(records).map_err(|err| RepoError::Encode {
            key,
            message: err.to_string(),
        })?;
        self.store.set(key, &raw)?;
        Ok(())
    }
}

// First occurrence wins when a hand-edited store repeats an id.
fn dedupe_by_id<T: StoredCollection>(key: &str, records: Vec<T>) -> Vec<T> {
    let total = records.len();
    let mut seen = HashSet::with_capacity(total);
    let unique: Vec<T> = records
        .into_iter()
        .filter(|record| seen.insert(record.record_id().to_string()))
        .collect();

    if unique.len() != total {
        warn!(
            "event=repo_load module=repo status=degraded key={} error_code=duplicate_ids dropped={}",
            key,
            total - unique.len()
        );
    }
    unique
}
