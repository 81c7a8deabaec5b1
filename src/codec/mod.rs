// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Conversion between dynamic objects and typed records.
//!
//! Decoding is best effort: metadata is always copied, every status or spec
//! field is read on its own and skipped when it is missing or holds an
//! unexpected type. Only input that cannot be read as an object at all is
//! rejected. Encoding emits the apiVersion/kind from the resource table and
//! re-derives the display name and description annotations from the record.

pub mod path;

use crate::constants::annotations;
use crate::error::{Result, RhoaiError};
use crate::resources::{resolve, ResourceKind};
use crate::types::{RecordMeta, StatusBase, UNKNOWN_PHASE};
use kube::api::{DynamicObject, ObjectMeta, TypeMeta};
use path::PathError;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// A record kind the generic client can list, get, create and delete
pub trait Entity: Sized {
    const KIND: ResourceKind;

    fn meta(&self) -> &RecordMeta;

    fn decode(object: &DynamicObject) -> Result<Self>;

    fn encode(&self) -> Result<DynamicObject>;

    /// Decode from raw JSON, rejecting values that are not shaped like an object
    fn decode_value(value: Value) -> Result<Self> {
        let object: DynamicObject = serde_json::from_value(value).map_err(|e| {
            RhoaiError::InvalidArgument(format!("malformed {} object: {}", Self::KIND, e))
        })?;
        Self::decode(&object)
    }
}

fn without_reserved(map: Option<&BTreeMap<String, String>>) -> BTreeMap<String, String> {
    map.map(|m| {
        m.iter()
            .filter(|(k, _)| !annotations::RESERVED.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    })
    .unwrap_or_default()
}

pub(crate) fn decode_meta(object: &DynamicObject) -> RecordMeta {
    let meta = &object.metadata;
    let annotations = meta.annotations.clone().unwrap_or_default();

    RecordMeta {
        name: meta.name.clone().unwrap_or_default(),
        namespace: meta.namespace.clone().unwrap_or_default(),
        display_name: annotations.get(annotations::DISPLAY_NAME).cloned(),
        description: annotations.get(annotations::DESCRIPTION).cloned(),
        labels: without_reserved(meta.labels.as_ref()),
        annotations,
    }
}

/// Field reader that logs and skips values it cannot interpret
pub(crate) struct Fields<'a> {
    data: &'a Value,
    kind: ResourceKind,
    name: &'a str,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(object: &'a DynamicObject, kind: ResourceKind) -> Self {
        Self {
            data: &object.data,
            kind,
            name: object.metadata.name.as_deref().unwrap_or_default(),
        }
    }

    fn skip<T>(&self, result: std::result::Result<Option<T>, PathError>) -> Option<T> {
        match result {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring field of {} {}: {}", self.kind, self.name, e);
                None
            }
        }
    }

    pub(crate) fn str(&self, path: &[&str]) -> Option<String> {
        self.skip(path::nested_str(self.data, path))
    }

    pub(crate) fn bool(&self, path: &[&str]) -> Option<bool> {
        self.skip(path::nested_bool(self.data, path))
    }

    pub(crate) fn i64(&self, path: &[&str]) -> Option<i64> {
        self.skip(path::nested_i64(self.data, path))
    }

    pub(crate) fn string_map(&self, path: &[&str]) -> Option<BTreeMap<String, String>> {
        self.skip(path::nested_string_map(self.data, path))
    }

    pub(crate) fn status_base(&self) -> StatusBase {
        StatusBase {
            phase: self
                .str(&["status", "phase"])
                .unwrap_or_else(|| UNKNOWN_PHASE.to_string()),
            message: self.str(&["status", "message"]),
            ready: self.bool(&["status", "ready"]).unwrap_or(false),
        }
    }
}

pub(crate) fn encode_object(
    kind: ResourceKind,
    meta: &RecordMeta,
    spec: Option<Value>,
) -> Result<DynamicObject> {
    if meta.name.is_empty() {
        return Err(RhoaiError::InvalidArgument(format!(
            "{} in namespace '{}' has no name",
            kind, meta.namespace
        )));
    }

    let gvr = resolve(kind)?;
    let labels = without_reserved(Some(&meta.labels));

    let mut annotations = without_reserved(Some(&meta.annotations));
    if let Some(display_name) = &meta.display_name {
        annotations.insert(annotations::DISPLAY_NAME.to_string(), display_name.clone());
    }
    if let Some(description) = &meta.description {
        annotations.insert(annotations::DESCRIPTION.to_string(), description.clone());
    }

    let data = match spec {
        Some(spec) => serde_json::json!({ "spec": spec }),
        None => serde_json::json!({}),
    };

    Ok(DynamicObject {
        types: Some(TypeMeta {
            api_version: gvr.api_version(),
            kind: kind.wire_kind().to_string(),
        }),
        metadata: ObjectMeta {
            name: Some(meta.name.clone()),
            namespace: (kind.namespaced() && !meta.namespace.is_empty())
                .then(|| meta.namespace.clone()),
            labels: (!labels.is_empty()).then_some(labels),
            annotations: (!annotations.is_empty()).then_some(annotations),
            ..Default::default()
        },
        data,
    })
}
