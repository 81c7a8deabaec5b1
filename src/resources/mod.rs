// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Logical resource kinds and the table resolving them to served API resources.

pub mod resolver;

pub use resolver::{resolve, resolve_name, GroupVersionResource, ResourceKind};
