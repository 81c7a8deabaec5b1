// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed records for OpenShift AI resources.

pub mod application;
pub mod experiment;
pub mod model;
pub mod pipeline;
pub mod project;

pub use application::{Application, ApplicationStatus};
pub use experiment::{Experiment, ExperimentStatus};
pub use model::{Model, ModelStatus};
pub use pipeline::{Pipeline, PipelineRun, PipelineRunStatus, PipelineStatus};
pub use project::Project;

use serde::Serialize;
use std::collections::BTreeMap;

/// Phase reported when the resource has no `status.phase`
pub const UNKNOWN_PHASE: &str = "Unknown";

/// Metadata shared by every record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMeta {
    pub name: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl RecordMeta {
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            ..Default::default()
        }
    }
}

/// Status fields every kind reports
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBase {
    pub phase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub ready: bool,
}

impl Default for StatusBase {
    fn default() -> Self {
        Self {
            phase: UNKNOWN_PHASE.to_string(),
            message: None,
            ready: false,
        }
    }
}
