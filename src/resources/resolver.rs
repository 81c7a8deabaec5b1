// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Static kind → group/version/resource table

use crate::error::{Result, RhoaiError};
use kube::api::{ApiResource, GroupVersionKind};
use std::fmt;
use std::str::FromStr;

/// Logical resource names understood by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Project,
    Application,
    Experiment,
    Model,
    Pipeline,
    PipelineRun,
}

/// Group/version/resource triple of a served API resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupVersionResource {
    group: &'static str,
    version: &'static str,
    resource: &'static str,
}

impl GroupVersionResource {
    pub fn group(&self) -> &str {
        self.group
    }

    pub fn version(&self) -> &str {
        self.version
    }

    pub fn resource(&self) -> &str {
        self.resource
    }

    /// `group/version` as used in `apiVersion` and discovery paths
    pub fn api_version(&self) -> String {
        format!("{}/{}", self.group, self.version)
    }
}

impl fmt::Display for GroupVersionResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.group, self.version, self.resource)
    }
}

struct Row {
    kind: ResourceKind,
    name: &'static str,
    gvr: GroupVersionResource,
    wire_kind: &'static str,
    namespaced: bool,
}

const fn row(
    kind: ResourceKind,
    name: &'static str,
    group: &'static str,
    version: &'static str,
    resource: &'static str,
    wire_kind: &'static str,
    namespaced: bool,
) -> Row {
    Row {
        kind,
        name,
        gvr: GroupVersionResource {
            group,
            version,
            resource,
        },
        wire_kind,
        namespaced,
    }
}

static TABLE: [Row; 6] = [
    row(ResourceKind::Project, "project", "project.openshift.io", "v1", "projects", "Project", false),
    row(ResourceKind::Application, "application", "app.opendatahub.io", "v1", "applications", "Application", true),
    row(ResourceKind::Experiment, "experiment", "experiment.opendatahub.io", "v1", "experiments", "Experiment", true),
    row(ResourceKind::Model, "model", "model.opendatahub.io", "v1", "models", "Model", true),
    row(ResourceKind::Pipeline, "pipeline", "pipelines.opendatahub.io", "v1", "pipelines", "Pipeline", true),
    row(ResourceKind::PipelineRun, "pipeline-run", "pipelines.opendatahub.io", "v1", "pipelineruns", "PipelineRun", true),
];

// Every variant has exactly one row, in declaration order
fn lookup(kind: ResourceKind) -> &'static Row {
    let index = match kind {
        ResourceKind::Project => 0,
        ResourceKind::Application => 1,
        ResourceKind::Experiment => 2,
        ResourceKind::Model => 3,
        ResourceKind::Pipeline => 4,
        ResourceKind::PipelineRun => 5,
    };
    &TABLE[index]
}

/// Resolve a kind to the group/version/resource it is served under
pub fn resolve(kind: ResourceKind) -> Result<GroupVersionResource> {
    Ok(lookup(kind).gvr)
}

/// Resolve a logical name such as `pipeline-run`
pub fn resolve_name(name: &str) -> Result<GroupVersionResource> {
    resolve(name.parse()?)
}

impl ResourceKind {
    pub fn all() -> impl Iterator<Item = ResourceKind> {
        TABLE.iter().map(|r| r.kind)
    }

    /// Logical name, e.g. `pipeline-run`
    pub fn name(self) -> &'static str {
        lookup(self).name
    }

    /// The `kind` field emitted on the wire
    pub fn wire_kind(self) -> &'static str {
        lookup(self).wire_kind
    }

    /// False for cluster scoped kinds such as projects
    pub fn namespaced(self) -> bool {
        lookup(self).namespaced
    }

    /// Dynamic API descriptor for generic requests against this kind
    pub fn api_resource(self) -> ApiResource {
        let row = lookup(self);
        let gvk = GroupVersionKind::gvk(row.gvr.group, row.gvr.version, row.wire_kind);
        ApiResource::from_gvk_with_plural(&gvk, row.gvr.resource)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = RhoaiError;

    fn from_str(s: &str) -> Result<Self> {
        TABLE
            .iter()
            .find(|r| r.name == s)
            .map(|r| r.kind)
            .ok_or_else(|| RhoaiError::NotFound(format!("unknown resource kind '{}'", s)))
    }
}
