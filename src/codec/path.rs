// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Path lookups into untyped object data.
//!
//! Every lookup distinguishes three outcomes: the value was found (`Ok(Some)`),
//! the path does not exist (`Ok(None)`), or something sits at the path that is
//! not what the caller asked for (`Err`). An explicit JSON `null` is reported
//! as a type mismatch rather than as absence.

use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("{path}: expected an object at '{segment}', found {found}")]
    NotAnObject {
        path: String,
        segment: String,
        found: &'static str,
    },

    #[error("{path}: expected {expected}, found {found}")]
    WrongType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn wrong_type(path: &[&str], expected: &'static str, value: &Value) -> PathError {
    PathError::WrongType {
        path: path.join("."),
        expected,
        found: type_name(value),
    }
}

/// Walk `path` through nested objects
pub fn nested<'a>(root: &'a Value, path: &[&str]) -> Result<Option<&'a Value>, PathError> {
    let mut current = root;
    for (i, segment) in path.iter().enumerate() {
        let Value::Object(map) = current else {
            let parent = if i == 0 { "<root>" } else { path[i - 1] };
            return Err(PathError::NotAnObject {
                path: path.join("."),
                segment: parent.to_string(),
                found: type_name(current),
            });
        };
        match map.get(*segment) {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

pub fn nested_str(root: &Value, path: &[&str]) -> Result<Option<String>, PathError> {
    match nested(root, path)? {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(wrong_type(path, "string", other)),
    }
}

pub fn nested_bool(root: &Value, path: &[&str]) -> Result<Option<bool>, PathError> {
    match nested(root, path)? {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(wrong_type(path, "bool", other)),
    }
}

/// Integers are widened to `i64` whatever width the source used. Floats are
/// accepted when they carry no fraction and fit.
pub fn nested_i64(root: &Value, path: &[&str]) -> Result<Option<i64>, PathError> {
    let Some(value) = nested(root, path)? else {
        return Ok(None);
    };
    let Value::Number(n) = value else {
        return Err(wrong_type(path, "integer", value));
    };

    if let Some(i) = n.as_i64() {
        return Ok(Some(i));
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(Some(f as i64))
        }
        _ => Err(wrong_type(path, "integer", value)),
    }
}

pub fn nested_string_map(
    root: &Value,
    path: &[&str],
) -> Result<Option<BTreeMap<String, String>>, PathError> {
    let Some(value) = nested(root, path)? else {
        return Ok(None);
    };
    let Value::Object(map) = value else {
        return Err(wrong_type(path, "object", value));
    };

    map.iter()
        .map(|(k, v)| match v {
            Value::String(s) => Ok((k.clone(), s.clone())),
            other => Err(wrong_type(path, "string values", other)),
        })
        .collect::<Result<BTreeMap<_, _>, _>>()
        .map(Some)
}
