// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Collection and record helpers.
//!
//! Typed collections go through closures and generics. Loosely shaped data
//! is modelled as a [`Record`]: an insertion-ordered JSON object.

use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Insertion-ordered JSON object used for field projections.
pub type Record = Map<String, Value>;

/// Group items by the key returned from `key_fn`.
///
/// Groups appear in the order their key was first seen; items inside a
/// group keep their source order.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key_fn: F) -> IndexMap<K, Vec<T>>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}

/// Group records by the stringified value of `field`.
///
/// Strings are used verbatim, other values as their JSON text. An explicit
/// `null` lands in the `"null"` group and a missing field in `"undefined"`.
pub fn group_by_field(records: &[Record], field: &str) -> IndexMap<String, Vec<Record>> {
    group_by(records.iter().cloned(), |record| match record.get(field) {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    })
}

/// Remove duplicates while keeping the first occurrence of each value.
pub fn unique<T: Hash + Eq + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Split `items` into consecutive chunks of `size`; the last may be shorter.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `size` is zero.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(Error::invalid_argument(
            "chunk",
            "chunk size must be greater than zero",
        ));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Structural copy through a JSON round trip.
///
/// The copy only carries what JSON can express:
/// - non-finite floats serialize as `null` and then fail to deserialize
///   back into a float field;
/// - map keys must be strings, integers or bools; tuple or struct keys
///   fail to serialize;
/// - fields marked `#[serde(skip)]` come back as their defaults.
///
/// Use `Clone` when the type has it; this exists for data that must
/// survive the same boundary it would cross on the wire.
pub fn deep_clone<T: Serialize + DeserializeOwned>(value: &T) -> Result<T> {
    let json = serde_json::to_value(value)?;
    Ok(serde_json::from_value(json)?)
}

/// Convert a serializable value into a [`Record`].
///
/// # Errors
///
/// Fails with [`Error::NotAnObject`] when the value does not serialize to
/// a JSON object.
pub fn to_record<T: Serialize>(value: &T) -> Result<Record> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::NotAnObject(json_kind(&other))),
    }
}

/// Shallow copy of `record` without the listed keys.
pub fn omit(record: &Record, keys: &[&str]) -> Record {
    record
        .iter()
        .filter(|(key, _)| !keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Shallow copy holding only the listed keys that exist in `record`.
///
/// Output order follows `keys`.
pub fn pick(record: &Record, keys: &[&str]) -> Record {
    keys.iter()
        .filter_map(|key| {
            record
                .get(*key)
                .map(|value| ((*key).to_string(), value.clone()))
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
