// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Discovery and node capacity queries used by capability detection

use crate::error::{Result, RhoaiError};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Node;
use kube::{api::ListParams, Api, Client, ResourceExt};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Capacity reported by a single node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeCapacity {
    pub name: String,
    pub capacity: BTreeMap<String, String>,
}

/// Cluster queries needed to detect installed capabilities
#[async_trait]
pub trait ClusterDiscovery: Send + Sync {
    /// Returns `Ok(true)` when `group_version` is served and `Ok(false)` when
    /// the discovery endpoint reports it as not found.
    async fn probe(&self, group_version: &str) -> Result<bool>;

    /// Lists every node in a single page.
    async fn list_nodes(&self) -> Result<Vec<NodeCapacity>>;
}

#[async_trait]
impl ClusterDiscovery for Client {
    #[instrument(skip(self))]
    async fn probe(&self, group_version: &str) -> Result<bool> {
        match self.list_api_group_resources(group_version).await {
            Ok(list) => {
                debug!(
                    "{} is served with {} resources",
                    group_version,
                    list.resources.len()
                );
                Ok(true)
            }
            Err(kube::Error::Api(err)) if err.code == 404 => Ok(false),
            Err(e) => Err(RhoaiError::from_kube(
                e,
                format!("discovery of {}", group_version),
            )),
        }
    }

    #[instrument(skip(self))]
    async fn list_nodes(&self) -> Result<Vec<NodeCapacity>> {
        let nodes: Api<Node> = Api::all(self.clone());
        let list = nodes
            .list(&ListParams::default())
            .await
            .map_err(|e| RhoaiError::from_kube(e, "list nodes"))?;

        Ok(list.items.iter().map(node_capacity).collect())
    }
}

fn node_capacity(node: &Node) -> NodeCapacity {
    let capacity = node
        .status
        .as_ref()
        .and_then(|s| s.capacity.as_ref())
        .map(|c| c.iter().map(|(k, q)| (k.clone(), q.0.clone())).collect())
        .unwrap_or_default();

    NodeCapacity {
        name: node.name_any(),
        capacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{api_resource_list_json, node_list_json, MockService};

    #[tokio::test]
    async fn test_probe_served_group_version() {
        let client = MockService::new()
            .on_get(
                "/apis/datasciencecluster.opendatahub.io/v1",
                200,
                &api_resource_list_json("datasciencecluster.opendatahub.io/v1"),
            )
            .into_client();

        assert!(client.probe("datasciencecluster.opendatahub.io/v1").await.unwrap());
    }

    #[tokio::test]
    async fn test_probe_missing_group_version() {
        let client = MockService::new().into_client();

        assert!(!client.probe("kubeflow.org/v1").await.unwrap());
    }

    #[tokio::test]
    async fn test_probe_forbidden_is_an_error() {
        let client = MockService::new()
            .on_get(
                "/apis/kubeflow.org/v1",
                403,
                r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"forbidden","reason":"Forbidden","code":403}"#,
            )
            .into_client();

        let err = client.probe("kubeflow.org/v1").await.unwrap_err();
        assert!(matches!(err, RhoaiError::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_list_nodes_reads_capacity() {
        let client = MockService::new()
            .on_get(
                "/api/v1/nodes",
                200,
                &node_list_json(&[
                    ("worker-0", &[("cpu", "8"), ("memory", "32Gi")]),
                    ("gpu-0", &[("cpu", "16"), ("nvidia.com/gpu", "2")]),
                ]),
            )
            .into_client();

        let nodes = client.list_nodes().await.unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].name, "worker-0");
        assert_eq!(nodes[1].capacity.get("nvidia.com/gpu").unwrap(), "2");
    }

    #[test]
    fn test_node_capacity_without_status() {
        let node = Node::default();
        assert!(node_capacity(&node).capacity.is_empty());
    }
}
