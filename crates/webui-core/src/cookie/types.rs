use serde::Serialize;
use std::collections::BTreeMap;

/// Key/value session data decoded from the session cookie.
///
/// Built once per page load and never mutated afterwards. A record is
/// eligible for probing only when it carries a non-empty `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SessionRecord {
    fields: BTreeMap<String, String>,
}

impl SessionRecord {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The session identifier, if present and non-empty.
    pub fn id(&self) -> Option<&str> {
        self.get("id").filter(|id| !id.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl From<BTreeMap<String, String>> for SessionRecord {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }
}

/// Later duplicates replace earlier ones.
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SessionRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
