// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::capability::AvailabilityPolicy;
use crate::resources::ResourceKind;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Command line configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace used when listing records
    pub namespace: String,
    /// How long to wait for OpenShift AI before reporting, zero skips the wait
    pub wait_timeout: Duration,
    pub policy: AvailabilityPolicy,
    /// Kind to list once detection has finished
    pub list_kind: Option<ResourceKind>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let namespace = lookup("RHOAI_NAMESPACE").unwrap_or_else(|| "default".to_string());

        let wait_timeout = match lookup("RHOAI_WAIT_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.parse::<u64>()
                    .with_context(|| format!("RHOAI_WAIT_TIMEOUT_SECS is not a number: {}", v))?,
            ),
            None => Duration::ZERO,
        };

        let policy = match lookup("RHOAI_AVAILABILITY_POLICY") {
            Some(v) => v
                .parse::<AvailabilityPolicy>()
                .with_context(|| format!("Invalid RHOAI_AVAILABILITY_POLICY: {}", v))?,
            None => AvailabilityPolicy::default(),
        };

        let list_kind = lookup("RHOAI_LIST_KIND")
            .map(|v| v.parse::<ResourceKind>())
            .transpose()
            .context("Invalid RHOAI_LIST_KIND")?;

        Ok(Config {
            namespace,
            wait_timeout,
            policy,
            list_kind,
        })
    }
}
