//! Key-value persistence seam.
//!
//! Both scopes (local and session) are plain string stores. Records are
//! serialized as JSON; anything that fails to decode is read back as absent.

mod memory;

pub use memory::MemoryStore;

use crate::errors::AppResult;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Local scope: locally created/edited events.
pub const EVENTS_KEY: &str = "events";
/// Local scope: seed ids suppressed at merge time.
pub const DELETED_IDS_KEY: &str = "deletedEventIds";
/// Session scope: the signed-in user and their bookings.
pub const USER_KEY: &str = "user";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }
}

/// Read and decode a JSON record. Absent or malformed values yield `None`;
/// only backend failures are reported.
pub fn read_json<T, S>(store: &S, key: &str) -> AppResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    Ok(store
        .get(key)?
        .and_then(|raw| serde_json::from_str(&raw).ok()))
}

pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> AppResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
