use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Providers offered by the profile form.
pub const KNOWN_PROVIDERS: [&str; 3] = ["twitter", "instagram", "website"];

/// Mapping of provider name to profile URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileLinks(BTreeMap<String, String>);

impl ProfileLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links map with every known provider present and empty.
    pub fn with_known_providers() -> Self {
        Self(
            KNOWN_PROVIDERS
                .iter()
                .map(|provider| (provider.to_string(), String::new()))
                .collect(),
        )
    }

    pub fn insert(&mut self, provider: impl Into<String>, url: impl Into<String>) {
        self.0.insert(provider.into(), url.into());
    }

    pub fn get(&self, provider: &str) -> Option<&str> {
        self.0.get(provider).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for ProfileLinks {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
