//! Locale bundles and their assembly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::path;

/// Where partitioned article content is mounted inside a bundle.
pub const DEFAULT_NAMESPACE: &str = "insights.articles";

/// Right-biased recursive merge of `source` into `target`.
///
/// Maps merge key by key; any other value in `source` (list, string,
/// number, bool, null) replaces what `target` had.
pub fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Wraps `value` in one map per segment of the dotted `path`.
fn nest(path: &str, value: Value) -> Value {
    path.rsplit('.').fold(value, |inner, key| {
        let mut map = Map::new();
        map.insert(key.to_string(), inner);
        Value::Object(map)
    })
}

/// One locale's translated content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle(Value);

impl Default for Bundle {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl From<Value> for Bundle {
    fn from(root: Value) -> Self {
        Self(root)
    }
}

impl Bundle {
    pub fn new(root: Value) -> Self {
        Self(root)
    }

    /// Assembles a bundle from a base tree and content partitions.
    ///
    /// Each partition maps article ids to article trees. Partitions are
    /// combined flat (a later partition replaces an earlier article with the
    /// same id) and deep-merged into `base` under `namespace`. Partitions that
    /// are not maps are skipped.
    pub fn build<I>(base: Value, partitions: I, namespace: &str) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut articles = Map::new();
        for (index, partition) in partitions.into_iter().enumerate() {
            match partition {
                Value::Object(entries) => articles.extend(entries),
                other => tracing::warn!(
                    index,
                    kind = value_kind(&other),
                    "skipping content partition that is not a map"
                ),
            }
        }

        let mut bundle = Self(base);
        if namespace.is_empty() {
            bundle.merge(Value::Object(articles));
        } else {
            bundle.merge(nest(namespace, Value::Object(articles)));
        }
        bundle
    }

    /// Deep-merges `overlay` into this bundle, overlay winning.
    pub fn merge(&mut self, overlay: Value) {
        deep_merge(&mut self.0, overlay);
    }

    pub fn root(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    /// The string at `key`, or `key` itself when the path is missing, dead
    /// ends partway, or ends on something other than a string.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        match path::lookup(&self.0, key) {
            Some(Value::String(text)) => text.as_str(),
            _ => key,
        }
    }

    /// The value at `key` of any type.
    pub fn resolve_raw(&self, key: &str) -> Option<&Value> {
        path::lookup(&self.0, key)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}
