//! Page history record types.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Caller-supplied state attached to a page visit (search text, filters, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    /// Create an empty property set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `defaults` under `overrides`: keys present in `overrides` win.
    #[must_use]
    pub fn with_defaults(overrides: Self, mut defaults: Self) -> Self {
        defaults.0.retain(|key, _| !overrides.0.contains_key(key));
        defaults.0.extend(overrides.0);
        defaults
    }

    /// Insert or replace a property.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get the raw string value of a property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether a property with this key exists.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One visited page's navigation record.
///
/// Serialized with `PascalCase` field names so history blobs written by
/// older deployments stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageState {
    /// Page identifier, unique within a session's history.
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: String,

    /// Display label for breadcrumbs.
    #[serde(default)]
    pub name: Option<String>,

    /// 1-based position in the navigation sequence.
    #[serde(default)]
    pub index: u32,

    /// Absolute URL captured when the visit was recorded.
    #[serde(default)]
    pub url: Option<String>,

    /// Caller-supplied state for this visit.
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Properties,
}

impl PageState {
    /// Create a state for `page` with the given properties.
    #[must_use]
    pub fn new(page: &str, name: Option<&str>, properties: Properties) -> Self {
        Self {
            page: page.to_string(),
            name: name.map(ToString::to_string),
            index: 0,
            url: None,
            properties,
        }
    }

    /// Breadcrumb label: the name when set, otherwise the page id.
    #[must_use]
    pub fn label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.page,
        }
    }

    /// Parse a property into `T`. Missing or unparseable values give `None`.
    #[must_use]
    pub fn property<T: FromStr>(&self, key: &str) -> Option<T> {
        self.properties.get(key).and_then(|v| v.parse().ok())
    }

    /// Parse a property into `T`, falling back to `default`.
    #[must_use]
    pub fn property_or<T: FromStr>(&self, key: &str, default: T) -> T {
        self.property(key).unwrap_or(default)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
