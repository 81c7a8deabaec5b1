// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes collaborators: discovery probes, node listing and dynamic resource access.

pub mod access;
pub mod discovery;

pub use access::ResourceAccess;
pub use discovery::{ClusterDiscovery, NodeCapacity};
