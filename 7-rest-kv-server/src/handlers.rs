use std::collections::BTreeMap;

use axum::extract::{Path, State};
use tracing::debug;

use crate::store::KvStore;

/// Renders a read response. An empty `key` lists the whole store.
pub fn show(store: &KvStore, key: &str) -> String {
    if key.is_empty() {
        return render_list(&store.get_all());
    }
    let value = store.get(key);
    format!("Read entry: data[{key}] = {value}")
}

/// Writes `key -> value` and renders the pair this call wrote.
pub fn update(store: &KvStore, key: String, value: String) -> String {
    let response = format!("Updated: data[{key}] = {value}");
    store.set(key, value);
    response
}

fn render_list(entries: &BTreeMap<String, String>) -> String {
    format!("Read list: {}", render_entries(entries))
}

/// Formats entries as `map[k1 -> v1 k2 -> v2]`, in key order.
pub fn render_entries(entries: &BTreeMap<String, String>) -> String {
    let body = entries
        .iter()
        .map(|(key, value)| format!("{key} -> {value}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("map[{body}]")
}

// GET /list
pub async fn list(State(store): State<KvStore>) -> String {
    let entries = store.get_all();
    debug!(entries = entries.len(), "listing store");
    render_list(&entries)
}

// GET /entry/:key
pub async fn read_entry(Path(key): Path<String>, State(store): State<KvStore>) -> String {
    debug!(%key, "reading entry");
    show(&store, &key)
}

// PUT /entry/:key/:value
pub async fn write_entry(
    Path((key, value)): Path<(String, String)>,
    State(store): State<KvStore>,
) -> String {
    debug!(%key, "updating entry");
    update(&store, key, value)
}
