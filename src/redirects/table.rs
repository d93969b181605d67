use std::{collections::HashMap, sync::Arc};

use super::record::RedirectRecord;

/// Read-only lookup from request path to redirect target.
///
/// Clones share the same map, so handing the table to every request is cheap.
#[derive(Debug, Clone, Default)]
pub struct RedirectTable(Arc<HashMap<String, String>>);

impl RedirectTable {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<RedirectRecord> for RedirectTable {
    /// Later records overwrite earlier ones with the same path.
    fn from_iter<I: IntoIterator<Item = RedirectRecord>>(records: I) -> Self {
        let mut paths = HashMap::new();
        for RedirectRecord { path, url } in records {
            paths.insert(path, url);
        }
        Self(Arc::new(paths))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RedirectTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        pairs
            .into_iter()
            .map(|(path, url)| RedirectRecord {
                path: path.into(),
                url: url.into(),
            })
            .collect()
    }
}

impl From<HashMap<String, String>> for RedirectTable {
    fn from(paths: HashMap<String, String>) -> Self {
        Self(Arc::new(paths))
    }
}
