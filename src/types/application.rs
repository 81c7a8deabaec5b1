// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::codec::{decode_meta, encode_object, Entity, Fields};
use crate::error::Result;
use crate::resources::ResourceKind;
use crate::types::{RecordMeta, StatusBase};
use kube::api::DynamicObject;
use serde::Serialize;
use serde_json::json;

pub const DEFAULT_REPLICAS: i64 = 1;
pub const DEFAULT_PORT: i64 = 8080;

/// A user-facing application served from a project
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub replicas: i64,
    pub port: i64,
    pub status: ApplicationStatus,
}

impl Default for Application {
    fn default() -> Self {
        Self {
            meta: RecordMeta::default(),
            image: None,
            replicas: DEFAULT_REPLICAS,
            port: DEFAULT_PORT,
            status: ApplicationStatus::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStatus {
    #[serde(flatten)]
    pub base: StatusBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_replicas: Option<i64>,
}

impl Entity for Application {
    const KIND: ResourceKind = ResourceKind::Application;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn decode(object: &DynamicObject) -> Result<Self> {
        let fields = Fields::new(object, Self::KIND);
        Ok(Application {
            meta: decode_meta(object),
            image: fields.str(&["spec", "image"]),
            replicas: fields.i64(&["spec", "replicas"]).unwrap_or(DEFAULT_REPLICAS),
            port: fields.i64(&["spec", "port"]).unwrap_or(DEFAULT_PORT),
            status: ApplicationStatus {
                base: fields.status_base(),
                url: fields.str(&["status", "url"]),
                available_replicas: fields.i64(&["status", "availableReplicas"]),
            },
        })
    }

    fn encode(&self) -> Result<DynamicObject> {
        let mut spec = json!({
            "replicas": self.replicas,
            "port": self.port,
        });
        if let Some(image) = &self.image {
            spec["image"] = json!(image);
        }
        encode_object(Self::KIND, &self.meta, Some(spec))
    }
}
