// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic resource access over dynamic objects

use crate::error::{Result, RhoaiError};
use crate::resources::ResourceKind;
use async_trait::async_trait;
use kube::{
    api::{DeleteParams, DynamicObject, ListParams, PostParams},
    Api, Client,
};
use tracing::{debug, info, instrument};

/// List/get/create/delete of untyped objects of a resolved kind.
/// Each call is attempted once.
#[async_trait]
pub trait ResourceAccess: Send + Sync {
    async fn list(&self, kind: ResourceKind, namespace: Option<&str>) -> Result<Vec<DynamicObject>>;

    async fn get(&self, kind: ResourceKind, namespace: &str, name: &str) -> Result<DynamicObject>;

    async fn create(
        &self,
        kind: ResourceKind,
        namespace: &str,
        object: &DynamicObject,
    ) -> Result<DynamicObject>;

    async fn delete(&self, kind: ResourceKind, namespace: &str, name: &str) -> Result<()>;
}

/// Namespaced kinds are addressed under `namespace`; cluster scoped kinds ignore it
fn object_api(client: &Client, kind: ResourceKind, namespace: &str) -> Api<DynamicObject> {
    let ar = kind.api_resource();
    if kind.namespaced() {
        Api::namespaced_with(client.clone(), namespace, &ar)
    } else {
        Api::all_with(client.clone(), &ar)
    }
}

fn object_context(kind: ResourceKind, namespace: &str, name: &str) -> String {
    if kind.namespaced() {
        format!("{} {}/{}", kind, namespace, name)
    } else {
        format!("{} {}", kind, name)
    }
}

#[async_trait]
impl ResourceAccess for Client {
    #[instrument(skip(self))]
    async fn list(&self, kind: ResourceKind, namespace: Option<&str>) -> Result<Vec<DynamicObject>> {
        let ar = kind.api_resource();
        let api: Api<DynamicObject> = match namespace {
            Some(ns) if kind.namespaced() => Api::namespaced_with(self.clone(), ns, &ar),
            _ => Api::all_with(self.clone(), &ar),
        };

        let list = api.list(&ListParams::default()).await.map_err(|e| {
            RhoaiError::from_kube(
                e,
                format!("list {} in {}", kind, namespace.unwrap_or("all namespaces")),
            )
        })?;

        debug!("Listed {} {} objects", list.items.len(), kind);
        Ok(list.items)
    }

    #[instrument(skip(self))]
    async fn get(&self, kind: ResourceKind, namespace: &str, name: &str) -> Result<DynamicObject> {
        let api = object_api(self, kind, namespace);

        api.get(name)
            .await
            .map_err(|e| RhoaiError::from_kube(e, object_context(kind, namespace, name)))
    }

    #[instrument(skip(self, object))]
    async fn create(
        &self,
        kind: ResourceKind,
        namespace: &str,
        object: &DynamicObject,
    ) -> Result<DynamicObject> {
        let api = object_api(self, kind, namespace);
        let name = object.metadata.name.clone().unwrap_or_default();

        let created = api
            .create(&PostParams::default(), object)
            .await
            .map_err(|e| RhoaiError::from_kube(e, object_context(kind, namespace, &name)))?;

        info!("Created {}", object_context(kind, namespace, &name));
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn delete(&self, kind: ResourceKind, namespace: &str, name: &str) -> Result<()> {
        let api = object_api(self, kind, namespace);

        api.delete(name, &DeleteParams::default())
            .await
            .map_err(|e| RhoaiError::from_kube(e, object_context(kind, namespace, name)))?;

        info!("Deleted {}", object_context(kind, namespace, name));
        Ok(())
    }
}
