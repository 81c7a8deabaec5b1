// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Detection results and the policy deciding overall availability

use crate::error::{Result, RhoaiError};
use serde::Serialize;
use std::str::FromStr;

/// Outcome of a single detection run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityStatus {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub components: Vec<String>,
    pub missing_components: Vec<String>,
    pub warnings: Vec<String>,
}

impl AvailabilityStatus {
    /// Turn an unavailable status into an error for callers that require OpenShift AI
    pub fn ensure_available(&self) -> Result<()> {
        if self.available {
            return Ok(());
        }
        let detail = if self.warnings.is_empty() {
            "OpenShift AI is not installed".to_string()
        } else {
            self.warnings.join("; ")
        };
        Err(RhoaiError::Unavailable(detail))
    }
}

/// Which probe results gate `available`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvailabilityPolicy {
    /// The core group answering at any candidate version is enough.
    /// Missing optional components only produce warnings.
    #[default]
    CoreGroup,
    /// The core group and every detected component must be served at the
    /// first candidate version of their probe row.
    PreferredVersions,
}

impl FromStr for AvailabilityPolicy {
    type Err = RhoaiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "core-group" => Ok(AvailabilityPolicy::CoreGroup),
            "preferred-versions" => Ok(AvailabilityPolicy::PreferredVersions),
            other => Err(RhoaiError::InvalidArgument(format!(
                "unknown availability policy '{}', expected core-group or preferred-versions",
                other
            ))),
        }
    }
}
