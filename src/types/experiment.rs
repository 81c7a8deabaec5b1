// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::codec::{decode_meta, encode_object, Entity, Fields};
use crate::error::Result;
use crate::resources::ResourceKind;
use crate::types::{RecordMeta, StatusBase};
use kube::api::DynamicObject;
use serde::Serialize;
use serde_json::json;

/// A named group of pipeline runs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Experiment {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub status: ExperimentStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentStatus {
    #[serde(flatten)]
    pub base: StatusBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_run_time: Option<String>,
}

impl Entity for Experiment {
    const KIND: ResourceKind = ResourceKind::Experiment;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn decode(object: &DynamicObject) -> Result<Self> {
        let fields = Fields::new(object, Self::KIND);
        Ok(Experiment {
            meta: decode_meta(object),
            status: ExperimentStatus {
                base: fields.status_base(),
                run_count: fields.i64(&["status", "runCount"]),
                last_run_time: fields.str(&["status", "lastRunTime"]),
            },
        })
    }

    fn encode(&self) -> Result<DynamicObject> {
        encode_object(Self::KIND, &self.meta, Some(json!({})))
    }
}
