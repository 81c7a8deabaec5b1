// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::codec::{decode_meta, encode_object, Entity, Fields};
use crate::error::Result;
use crate::resources::ResourceKind;
use crate::types::{RecordMeta, StatusBase};
use kube::api::DynamicObject;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

/// Service account pipeline runs execute as
pub const DEFAULT_SERVICE_ACCOUNT: &str = "pipeline-runner";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Pipeline {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub status: PipelineStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStatus {
    #[serde(flatten)]
    pub base: StatusBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_run_time: Option<String>,
}

impl Entity for Pipeline {
    const KIND: ResourceKind = ResourceKind::Pipeline;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn decode(object: &DynamicObject) -> Result<Self> {
        let fields = Fields::new(object, Self::KIND);
        Ok(Pipeline {
            meta: decode_meta(object),
            status: PipelineStatus {
                base: fields.status_base(),
                run_count: fields.i64(&["status", "runCount"]),
                last_run_time: fields.str(&["status", "lastRunTime"]),
            },
        })
    }

    fn encode(&self) -> Result<DynamicObject> {
        let spec = json!({ "pipelineSpec": { "tasks": [] } });
        encode_object(Self::KIND, &self.meta, Some(spec))
    }
}

/// One execution of a pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRun {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_name: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,
    pub status: PipelineRunStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunStatus {
    #[serde(flatten)]
    pub base: StatusBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
}

impl Entity for PipelineRun {
    const KIND: ResourceKind = ResourceKind::PipelineRun;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn decode(object: &DynamicObject) -> Result<Self> {
        let fields = Fields::new(object, Self::KIND);
        Ok(PipelineRun {
            meta: decode_meta(object),
            pipeline_name: fields.str(&["spec", "pipelineRef", "name"]),
            parameters: fields.string_map(&["spec", "parameters"]).unwrap_or_default(),
            status: PipelineRunStatus {
                base: fields.status_base(),
                start_time: fields.str(&["status", "startTime"]),
                completion_time: fields.str(&["status", "completionTime"]),
                duration_seconds: fields.i64(&["status", "durationSeconds"]),
            },
        })
    }

    fn encode(&self) -> Result<DynamicObject> {
        let mut spec = json!({ "serviceAccountName": DEFAULT_SERVICE_ACCOUNT });
        if let Some(pipeline) = &self.pipeline_name {
            spec["pipelineRef"] = json!({ "name": pipeline });
        }
        if !self.parameters.is_empty() {
            spec["parameters"] = json!(self.parameters);
        }
        encode_object(Self::KIND, &self.meta, Some(spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pipeline_run_counts() {
        let pipeline = Pipeline::decode_value(json!({
            "metadata": { "name": "train", "namespace": "fraud" },
            "status": { "phase": "Ready", "ready": true, "runCount": 4 }
        }))
        .unwrap();

        assert_eq!(pipeline.status.run_count, Some(4));
        assert!(pipeline.status.base.ready);
        assert!(pipeline.status.last_run_time.is_none());
    }

    #[test]
    fn test_encode_pipeline_scaffolding() {
        let pipeline = Pipeline {
            meta: RecordMeta::new("fraud", "train"),
            ..Default::default()
        };

        let object = pipeline.encode().unwrap();
        assert_eq!(object.types.unwrap().kind, "Pipeline");
        assert_eq!(object.data["spec"]["pipelineSpec"]["tasks"], json!([]));
    }

    #[test]
    fn test_decode_finished_run() {
        let run = PipelineRun::decode_value(json!({
            "metadata": { "name": "train-7", "namespace": "fraud" },
            "spec": {
                "pipelineRef": { "name": "train" },
                "parameters": { "epochs": "10" }
            },
            "status": {
                "phase": "Succeeded",
                "message": "All tasks completed",
                "startTime": "2026-10-01T08:00:00Z",
                "completionTime": "2026-10-01T08:42:00Z",
                "durationSeconds": 2520.0
            }
        }))
        .unwrap();

        assert_eq!(run.pipeline_name.as_deref(), Some("train"));
        assert_eq!(run.parameters.get("epochs").unwrap(), "10");
        assert_eq!(run.status.base.message.as_deref(), Some("All tasks completed"));
        assert_eq!(run.status.duration_seconds, Some(2520));
    }

    #[test]
    fn test_encode_pipeline_run_defaults() {
        let run = PipelineRun {
            meta: RecordMeta::new("fraud", "train-8"),
            pipeline_name: Some("train".to_string()),
            ..Default::default()
        };

        let object = run.encode().unwrap();
        assert_eq!(
            object.data["spec"],
            json!({ "serviceAccountName": "pipeline-runner", "pipelineRef": { "name": "train" } })
        );
    }

    #[test]
    fn test_run_decode_ignores_malformed_status() {
        let run = PipelineRun::decode_value(json!({
            "metadata": { "name": "train-9", "namespace": "fraud" },
            "status": "garbage"
        }))
        .unwrap();

        assert_eq!(run.status, PipelineRunStatus::default());
    }
}
