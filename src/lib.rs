// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod capability;
pub mod client;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod resources;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use capability::{AvailabilityPolicy, AvailabilityStatus, CapabilityDetector};
pub use client::ResourceClient;
pub use codec::Entity;
pub use error::{Result, RhoaiError};
pub use resources::{resolve, resolve_name, GroupVersionResource, ResourceKind};
