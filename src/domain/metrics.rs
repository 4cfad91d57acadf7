//! Ordered snapshot of per-epoch training metrics.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Named scalar measurements reported after an epoch.
///
/// Keys keep the order in which they were first inserted, which is the
/// order the lines appear in a formatted message. Inserting an existing key
/// overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    entries: Vec<(String, f64)>,
}

impl Metrics {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a metric, keeping the original position of an existing key.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Metrics {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut metrics = Self::new();
        for (name, value) in iter {
            metrics.insert(name, value);
        }
        metrics
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Metrics {
    fn from(entries: [(K, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl Serialize for Metrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Metrics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MetricsVisitor;

        impl<'de> Visitor<'de> for MetricsVisitor {
            type Value = Metrics;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of metric names to numbers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Metrics, A::Error> {
                let mut metrics = Metrics::new();
                while let Some((key, value)) = access.next_entry::<String, f64>()? {
                    metrics.insert(key, value);
                }
                Ok(metrics)
            }
        }

        deserializer.deserialize_map(MetricsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_position_on_overwrite() {
        let mut metrics = Metrics::new();
        metrics.insert("loss", 0.5);
        metrics.insert("lr", 0.001);
        metrics.insert("loss", 0.4);

        let keys: Vec<_> = metrics.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["loss", "lr"]);
        assert_eq!(metrics.get("loss"), Some(0.4));
        assert_eq!(metrics.len(), 2);
    }

    #[test]
    fn deserialize_preserves_document_order() {
        let metrics: Metrics =
            serde_json::from_str(r#"{"val_loss": 0.6, "loss": 0.5, "lr": 0.001}"#).unwrap();

        let keys: Vec<_> = metrics.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["val_loss", "loss", "lr"]);
    }

    #[test]
    fn deserialize_rejects_non_numeric_values() {
        let result: Result<Metrics, _> = serde_json::from_str(r#"{"loss": "low"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_by_default() {
        assert!(Metrics::default().is_empty());
        assert_eq!(Metrics::default().get("loss"), None);
    }
}
