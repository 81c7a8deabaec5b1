// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::codec::{decode_meta, encode_object, Entity, Fields};
use crate::error::Result;
use crate::resources::ResourceKind;
use crate::types::{RecordMeta, StatusBase};
use kube::api::DynamicObject;
use serde::Serialize;

/// A data science project. Projects carry no spec.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Project {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub status: StatusBase,
}

impl Entity for Project {
    const KIND: ResourceKind = ResourceKind::Project;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn decode(object: &DynamicObject) -> Result<Self> {
        let fields = Fields::new(object, Self::KIND);
        Ok(Project {
            meta: decode_meta(object),
            status: fields.status_base(),
        })
    }

    fn encode(&self) -> Result<DynamicObject> {
        encode_object(Self::KIND, &self.meta, None)
    }
}
