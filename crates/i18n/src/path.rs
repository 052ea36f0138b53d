//! Key paths into a bundle tree.
//!
//! A path is a `.`-separated list of segments. `name[N]` is sugar for
//! `name.N`, so `"cases[2].title"` and `"cases.2.title"` address the same node.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use serde_json::Value;

static INDEX_SUGAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d+)\]").expect("index pattern is valid"));

/// Rewrites every `[N]` into `.N`.
pub fn normalize(path: &str) -> Cow<'_, str> {
    INDEX_SUGAR.replace_all(path, ".${1}")
}

/// Walks `root` along `path`.
///
/// Returns `None` as soon as a segment is missing or the walk reaches a
/// value that is neither a map nor a list while segments remain.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    normalize(path)
        .split('.')
        .try_fold(root, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => parse_index(segment).and_then(|i| items.get(i)),
            _ => None,
        })
}

/// Canonical decimal indices only: `"0"`, `"12"`, but not `"01"` or `"+1"`.
fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}
