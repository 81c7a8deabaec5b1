// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Detection of installed OpenShift AI components and GPU capacity.

pub mod detector;
pub mod status;

pub use detector::{CapabilityDetector, Component, DetectorConfig, GroupProbe, VersionProbeTable};
pub use status::{AvailabilityPolicy, AvailabilityStatus};
