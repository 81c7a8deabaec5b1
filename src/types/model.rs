// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::codec::{decode_meta, encode_object, Entity, Fields};
use crate::error::Result;
use crate::resources::ResourceKind;
use crate::types::{RecordMeta, StatusBase};
use kube::api::DynamicObject;
use serde::Serialize;
use serde_json::json;

/// Serving runtime every model is deployed with
pub const DEFAULT_RUNTIME: &str = "kserve";

/// A trained model registered for serving
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_uri: Option<String>,
    pub status: ModelStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelStatus {
    #[serde(flatten)]
    pub base: StatusBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_deployed_time: Option<String>,
}

impl Entity for Model {
    const KIND: ResourceKind = ResourceKind::Model;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn decode(object: &DynamicObject) -> Result<Self> {
        let fields = Fields::new(object, Self::KIND);
        Ok(Model {
            meta: decode_meta(object),
            model_format: fields.str(&["spec", "modelFormat"]),
            storage_uri: fields.str(&["spec", "storageUri"]),
            status: ModelStatus {
                base: fields.status_base(),
                url: fields.str(&["status", "url"]),
                last_deployed_time: fields.str(&["status", "lastDeployedTime"]),
            },
        })
    }

    fn encode(&self) -> Result<DynamicObject> {
        let mut spec = json!({ "runtime": DEFAULT_RUNTIME });
        if let Some(format) = &self.model_format {
            spec["modelFormat"] = json!(format);
        }
        if let Some(uri) = &self.storage_uri {
            spec["storageUri"] = json!(uri);
        }
        encode_object(Self::KIND, &self.meta, Some(spec))
    }
}
