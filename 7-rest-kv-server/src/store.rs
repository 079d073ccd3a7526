//! In-memory key-value storage shared by the HTTP handlers.
//!
//! The store is an explicitly constructed value. Cloning a [`KvStore`] hands
//! out another reference to the same map, so the router can give each
//! request task its own handle without any process-wide state.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type InnerMap = HashMap<String, String>;

/// Thread-safe string-to-string map.
///
/// Reads take the shared side of an [`RwLock`], writes the exclusive side.
/// Guards never outlive a single map access, so response formatting always
/// happens with the lock released.
#[derive(Clone, Debug, Default)]
pub struct KvStore {
    data: Arc<RwLock<InnerMap>>,
}

impl KvStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a key-value pair, overwriting any existing value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.write().insert(key.into(), value.into());
    }

    /// Returns the value for `key`, or an empty string if it was never set.
    ///
    /// An absent key and a key holding `""` look the same here. Use
    /// [`KvStore::lookup`] when the difference matters.
    pub fn get(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_default()
    }

    /// Returns the value for `key`, or `None` if it was never set.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    /// Returns a sorted copy of every entry.
    ///
    /// The copy is taken under the read lock and released before the caller
    /// sees it, so later writes do not show up in the returned map.
    pub fn get_all(&self) -> BTreeMap<String, String> {
        self.read()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Every mutation is a single insert, so a panic elsewhere can't leave the
    // map half-written and a poisoned guard is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, InnerMap> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, InnerMap> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn get_returns_most_recent_value() {
        let store = KvStore::new();
        store.set("color", "red");
        store.set("color", "blue");
        assert_eq!(store.get("color"), "blue");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missing_key_reads_as_empty_string() {
        let store = KvStore::new();
        assert_eq!(store.get("nope"), "");
        assert!(store.is_empty());
    }

    #[test]
    fn lookup_tells_absent_from_empty() {
        let store = KvStore::new();
        store.set("blank", "");
        assert_eq!(store.lookup("blank"), Some(String::new()));
        assert_eq!(store.lookup("missing"), None);
        assert_eq!(store.get("blank"), store.get("missing"));
    }

    #[test]
    fn setting_same_pair_twice_is_idempotent() {
        let store = KvStore::new();
        store.set("k", "v");
        let once = store.get_all();
        store.set("k", "v");
        assert_eq!(store.get_all(), once);
    }

    #[test]
    fn get_all_is_a_snapshot() {
        let store = KvStore::new();
        store.set("b", "2");
        store.set("a", "1");

        let snapshot = store.get_all();
        store.set("c", "3");

        let keys: Vec<_> = snapshot.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn clones_share_the_same_map() {
        let store = KvStore::new();
        let handle = store.clone();
        handle.set("shared", "yes");
        assert_eq!(store.get("shared"), "yes");
    }

    #[test]
    fn concurrent_writers_with_distinct_keys_lose_nothing() {
        let store = KvStore::new();

        let workers: Vec<_> = (0..8)
            .map(|worker| {
                let store = store.clone();
                thread::spawn(move || {
                    for i in 0..100 {
                        store.set(format!("w{worker}-{i}"), i.to_string());
                    }
                })
            })
            .collect();

        for worker in workers {
            worker.join().expect("writer thread panicked");
        }

        assert_eq!(store.len(), 800);
        assert_eq!(store.get("w7-99"), "99");
    }

    #[test]
    fn poisoned_lock_still_serves_reads() {
        let store = KvStore::new();
        store.set("survivor", "ok");

        let poisoner = store.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.data.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(store.data.is_poisoned());
        assert_eq!(store.get("survivor"), "ok");
        store.set("after", "poison");
        assert_eq!(store.get("after"), "poison");
    }
}
