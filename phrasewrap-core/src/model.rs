//! Weight table loading and lookup
//!
//! A weight table maps feature tokens such as `UW4:a` to signed numeric
//! weights. Two JSON layouts are accepted:
//!
//! - flat: `{"UW4:a": 10000, "BW2:ab": -12}`
//! - grouped by feature class: `{"UW4": {"a": 10000}, "BW2": {"ab": -12}}`
//!
//! Both load to the same table. Weights may be any JSON number.

use crate::error::{CoreError, Result};
use crate::feature::FeatureClass;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Signed weight of a single feature token
pub type Weight = f64;

/// Immutable mapping from feature token to weight
///
/// The sum of all weights is computed once, adding entries in key order, so
/// it does not depend on hash iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightTable {
    weights: HashMap<String, Weight>,
    total: Weight,
}

impl WeightTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a model from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Parse a model from a JSON reader
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_json_value(value)
    }

    /// Load a model from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading model from {}", path.display());
        let file = File::open(path)?;
        let table = Self::from_json_reader(BufReader::new(file))?;
        log::info!(
            "Loaded model {} with {} entries",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    fn from_json_value(value: Value) -> Result<Self> {
        let Value::Object(root) = value else {
            return Err(CoreError::invalid_model("top level must be a JSON object"));
        };

        let mut weights = HashMap::with_capacity(root.len());
        for (key, value) in root {
            match value {
                Value::Object(group) => insert_group(&mut weights, &key, group)?,
                other => {
                    let weight = to_weight(&key, &other)?;
                    weights.insert(key, weight);
                }
            }
        }

        Ok(Self::from(weights))
    }

    /// Weight of `token`, zero when absent
    pub fn get(&self, token: &str) -> Weight {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    /// True if `token` has an explicit entry
    pub fn contains(&self, token: &str) -> bool {
        self.weights.contains_key(token)
    }

    /// Sum of every weight in the table
    pub fn total_weight(&self) -> Weight {
        self.total
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over `(token, weight)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Weight)> + '_ {
        self.weights.iter().map(|(k, &w)| (k.as_str(), w))
    }

    /// Entry counts per feature class tag
    ///
    /// Keys without a recognised `<tag>:` prefix are counted under `"?"`.
    pub fn class_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for key in self.weights.keys() {
            let tag = key
                .split_once(':')
                .and_then(|(tag, _)| FeatureClass::from_tag(tag))
                .map_or("?", FeatureClass::tag);
            *counts.entry(tag.to_string()).or_insert(0) += 1;
        }
        counts
    }
}

fn insert_group(
    weights: &mut HashMap<String, Weight>,
    tag: &str,
    group: Map<String, Value>,
) -> Result<()> {
    for (chars, value) in group {
        let key = format!("{tag}:{chars}");
        let weight = to_weight(&key, &value)?;
        weights.insert(key, weight);
    }
    Ok(())
}

fn to_weight(key: &str, value: &Value) -> Result<Weight> {
    value.as_f64().ok_or_else(|| {
        CoreError::invalid_model(format!("weight for {key:?} is not a number: {value}"))
    })
}

fn sum_in_key_order(weights: &HashMap<String, Weight>) -> Weight {
    let mut entries: Vec<(&String, &Weight)> = weights.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries.into_iter().map(|(_, &w)| w).sum()
}

impl FromIterator<(String, Weight)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (String, Weight)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<HashMap<_, _>>())
    }
}

impl<'a> FromIterator<(&'a str, Weight)> for WeightTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, Weight)>>(iter: I) -> Self {
        iter.into_iter().map(|(k, w)| (k.to_string(), w)).collect()
    }
}

impl From<HashMap<String, Weight>> for WeightTable {
    fn from(weights: HashMap<String, Weight>) -> Self {
        let total = sum_in_key_order(&weights);
        Self { weights, total }
    }
}
