// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Probing discovery for OpenShift AI API groups

use crate::capability::status::{AvailabilityPolicy, AvailabilityStatus};
use crate::constants::detection::{
    COMPONENTS, CORE_GROUP, GPU_COMPONENT, GPU_RESOURCE_KEYS, POLL_INTERVAL_SECS,
    VERSION_CANDIDATES,
};
use crate::error::{Result, RhoaiError};
use crate::kubernetes::ClusterDiscovery;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::{interval, sleep_until, Instant, MissedTickBehavior};
use tracing::{debug, info, instrument, warn};

/// Ordered version candidates per API group. Groups without a row use the default list.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionProbeTable {
    default: Vec<String>,
    groups: BTreeMap<String, Vec<String>>,
}

impl VersionProbeTable {
    pub fn new(default: &[&str]) -> Self {
        Self {
            default: default.iter().map(|v| v.to_string()).collect(),
            groups: BTreeMap::new(),
        }
    }

    /// Override the candidates for one group
    pub fn with_group(mut self, group: &str, candidates: &[&str]) -> Self {
        self.groups.insert(
            group.to_string(),
            candidates.iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    pub fn candidates(&self, group: &str) -> &[String] {
        self.groups.get(group).unwrap_or(&self.default)
    }

    /// The first, most mature candidate for a group
    pub fn preferred(&self, group: &str) -> Option<&str> {
        self.candidates(group).first().map(String::as_str)
    }
}

impl Default for VersionProbeTable {
    fn default() -> Self {
        Self::new(&VERSION_CANDIDATES)
    }
}

/// An optional API group and the name it is reported under
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub group: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct DetectorConfig {
    pub core_group: String,
    pub components: Vec<Component>,
    pub versions: VersionProbeTable,
    pub gpu_resource_keys: Vec<String>,
    pub poll_interval: Duration,
    pub policy: AvailabilityPolicy,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            core_group: CORE_GROUP.to_string(),
            components: COMPONENTS
                .iter()
                .map(|(group, name)| Component {
                    group: group.to_string(),
                    name: name.to_string(),
                })
                .collect(),
            versions: VersionProbeTable::default(),
            gpu_resource_keys: GPU_RESOURCE_KEYS.iter().map(|k| k.to_string()).collect(),
            poll_interval: Duration::from_secs(POLL_INTERVAL_SECS),
            policy: AvailabilityPolicy::default(),
        }
    }
}

/// Result of probing one group. `version` is empty when nothing answered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupProbe {
    pub available: bool,
    pub version: String,
}

pub struct CapabilityDetector<D> {
    discovery: D,
    config: DetectorConfig,
}

impl<D: ClusterDiscovery> CapabilityDetector<D> {
    pub fn new(discovery: D) -> Self {
        Self::with_config(discovery, DetectorConfig::default())
    }

    pub fn with_config(discovery: D, config: DetectorConfig) -> Self {
        Self { discovery, config }
    }

    /// Try each candidate version of `group` in order and stop on the first one served
    pub async fn probe_group(&self, group: &str) -> GroupProbe {
        self.probe_group_with_error(group).await.0
    }

    async fn probe_group_with_error(&self, group: &str) -> (GroupProbe, Option<RhoaiError>) {
        let mut last_error = None;

        for version in self.config.versions.candidates(group) {
            let group_version = format!("{}/{}", group, version);
            match self.discovery.probe(&group_version).await {
                Ok(true) => {
                    debug!("{} is served", group_version);
                    return (
                        GroupProbe {
                            available: true,
                            version: version.clone(),
                        },
                        None,
                    );
                }
                Ok(false) => debug!("{} is not served", group_version),
                Err(e) => {
                    warn!("Probing {} failed: {}", group_version, e);
                    last_error = Some(e);
                }
            }
        }

        (GroupProbe::default(), last_error)
    }

    /// Probe every configured component and report what is installed.
    /// Probe failures end up in `warnings`, never as an error.
    #[instrument(skip(self))]
    pub async fn check_availability(&self) -> AvailabilityStatus {
        let mut status = AvailabilityStatus::default();
        let mut core: Option<GroupProbe> = None;
        let mut detected: Vec<(&str, String)> = Vec::new();

        for component in &self.config.components {
            let (probe, error) = self.probe_group_with_error(&component.group).await;

            if probe.available {
                status.components.push(component.name.clone());
                detected.push((component.group.as_str(), probe.version.clone()));
            } else {
                status.missing_components.push(component.name.clone());
                status.warnings.push(format!(
                    "{} ({}) is not available",
                    component.name, component.group
                ));
                if let Some(e) = error {
                    status
                        .warnings
                        .push(format!("Probing {} failed: {}", component.group, e));
                }
            }

            if component.group == self.config.core_group {
                core = Some(probe);
            }
        }

        let core = match core {
            Some(probe) => probe,
            None => self.probe_group(&self.config.core_group).await,
        };
        if core.available && !detected.iter().any(|(g, _)| *g == self.config.core_group) {
            detected.push((self.config.core_group.as_str(), core.version.clone()));
        }

        match self.gpu_support().await {
            Ok(true) => status.components.push(GPU_COMPONENT.to_string()),
            Ok(false) => debug!("No GPU capacity found on any node"),
            Err(e) => status
                .warnings
                .push(format!("Unable to check GPU support: {}", e)),
        }

        status.available = core.available && self.policy_allows(&detected, &mut status.warnings);
        if core.available {
            status.version = Some(core.version);
        }

        info!(
            "OpenShift AI available={}, {} components found, {} missing",
            status.available,
            status.components.len(),
            status.missing_components.len()
        );
        status
    }

    fn policy_allows(&self, detected: &[(&str, String)], warnings: &mut Vec<String>) -> bool {
        match self.config.policy {
            AvailabilityPolicy::CoreGroup => true,
            AvailabilityPolicy::PreferredVersions => {
                let mut allowed = true;
                for (group, version) in detected {
                    let preferred = self.config.versions.preferred(group).unwrap_or_default();
                    if version != preferred {
                        warnings.push(format!(
                            "{} is served at {} instead of {}",
                            group, version, preferred
                        ));
                        allowed = false;
                    }
                }
                allowed
            }
        }
    }

    /// True when any node advertises capacity for one of the GPU vendor keys
    pub async fn check_gpu_support(&self) -> bool {
        match self.gpu_support().await {
            Ok(found) => found,
            Err(e) => {
                warn!("Unable to check GPU support: {}", e);
                false
            }
        }
    }

    async fn gpu_support(&self) -> Result<bool> {
        let nodes = self.discovery.list_nodes().await?;

        for node in &nodes {
            if let Some(key) = self
                .config
                .gpu_resource_keys
                .iter()
                .find(|k| node.capacity.contains_key(k.as_str()))
            {
                debug!("Node {} advertises {}", node.name, key);
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Only probes the core group
    pub async fn is_openshift_ai_cluster(&self) -> bool {
        self.probe_group(&self.config.core_group).await.available
    }

    /// Poll `is_openshift_ai_cluster` at a fixed interval until it answers true.
    /// The deadline is only checked between polls, a probe in flight runs to completion.
    #[instrument(skip(self))]
    pub async fn wait_for_availability(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        // interval panics on a zero period
        let mut ticker = interval(self.config.poll_interval.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = ticker.tick() => {
                    if self.is_openshift_ai_cluster().await {
                        info!("OpenShift AI ({}) is available", self.config.core_group);
                        return Ok(());
                    }
                    debug!(
                        "OpenShift AI not yet available, checking again in {:?}",
                        self.config.poll_interval
                    );
                }
                _ = sleep_until(deadline) => {
                    warn!("OpenShift AI did not become available within {:?}", timeout);
                    return Err(RhoaiError::Timeout(timeout));
                }
            }
        }
    }
}
