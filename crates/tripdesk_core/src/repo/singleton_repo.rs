//! Singleton repository contract and key-value implementation.

use super::{RepoError, RepoResult, StoredSingleton};
use crate::store::KeyValueStore;
use log::warn;
use std::marker::PhantomData;

/// Load/save/clear contract for one singleton value.
pub trait SingletonRepository<T> {
    fn load(&self) -> RepoResult<Option<T>>;
    fn save(&self, value: &T) -> RepoResult<()>;
    fn clear(&self) -> RepoResult<()>;
}

pub struct KvSingletonRepository<S, T> {
    store: S,
    _value: PhantomData<fn() -> T>,
}

impl<S: KeyValueStore, T: StoredSingleton> KvSingletonRepository<S, T> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            _value: PhantomData,
        }
    }
}

impl<S: KeyValueStore, T: StoredSingleton> SingletonRepository<T> for KvSingletonRepository<S, T> {
    fn load(&self) -> RepoResult<Option<T>> {
        let key = T::STORAGE_KEY;
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Option<T>>(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(
                    "event=repo_load module=repo status=degraded key={} error_code=corrupt_json line={} column={}",
                    key,
                    err.line(),
                    err.column()
                );
                Ok(None)
            }
        }
    }

    fn save(&self, value: &T) -> RepoResult<()> {
        let key = T::STORAGE_KEY;
        let raw = serde_json::to_string(value).map_err(|err| RepoError::Encode {
            key,
            message: err.to_string(),
        })?;
        self.store.set(key, &raw)?;
        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        self.store.remove(T::STORAGE_KEY)?;
        Ok(())
    }
}
