// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One client for every record kind, driven by the kind's `Entity` impl.

use crate::codec::Entity;
use crate::error::{Result, RhoaiError};
use crate::kubernetes::ResourceAccess;
use tracing::{debug, instrument};

pub struct ResourceClient<A> {
    access: A,
}

impl<A: ResourceAccess> ResourceClient<A> {
    pub fn new(access: A) -> Self {
        Self { access }
    }

    /// List records in `namespace`, or across all namespaces when `None`
    #[instrument(skip(self), fields(kind = %T::KIND))]
    pub async fn list<T: Entity>(&self, namespace: Option<&str>) -> Result<Vec<T>> {
        let objects = self.access.list(T::KIND, namespace).await?;
        debug!("Decoding {} objects", objects.len());
        objects.iter().map(T::decode).collect()
    }

    #[instrument(skip(self), fields(kind = %T::KIND))]
    pub async fn get<T: Entity>(&self, namespace: &str, name: &str) -> Result<T> {
        let object = self.access.get(T::KIND, namespace, name).await?;
        T::decode(&object)
    }

    /// Create `record` in its own namespace and return what the cluster stored.
    /// Cluster scoped kinds need no namespace.
    #[instrument(skip(self, record), fields(kind = %T::KIND, name = %record.meta().name))]
    pub async fn create<T: Entity>(&self, record: &T) -> Result<T> {
        let meta = record.meta();
        if T::KIND.namespaced() && meta.namespace.is_empty() {
            return Err(RhoaiError::InvalidArgument(format!(
                "{} {} has no namespace",
                T::KIND,
                meta.name
            )));
        }

        let object = record.encode()?;
        let created = self.access.create(T::KIND, &meta.namespace, &object).await?;
        T::decode(&created)
    }

    #[instrument(skip(self), fields(kind = %T::KIND))]
    pub async fn delete<T: Entity>(&self, namespace: &str, name: &str) -> Result<()> {
        self.access.delete(T::KIND, namespace, name).await
    }
}
