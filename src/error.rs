// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RhoaiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Timed out after {0:?} waiting for OpenShift AI")]
    Timeout(Duration),

    #[error("Kubernetes API error ({context}): {source}")]
    Internal {
        context: String,
        #[source]
        source: kube::Error,
    },
}

impl RhoaiError {
    /// Classify a transport error by its HTTP status, keeping the original
    /// error as source when it does not map onto a specific variant.
    pub fn from_kube(err: kube::Error, context: impl Into<String>) -> Self {
        let context = context.into();
        match &err {
            kube::Error::Api(resp) => match resp.code {
                404 => RhoaiError::NotFound(context),
                409 => RhoaiError::AlreadyExists(context),
                401 | 403 => RhoaiError::PermissionDenied(format!("{}: {}", context, resp.message)),
                400 | 422 => RhoaiError::InvalidArgument(format!("{}: {}", context, resp.message)),
                _ => RhoaiError::Internal { context, source: err },
            },
            _ => RhoaiError::Internal { context, source: err },
        }
    }
}

pub type Result<T> = std::result::Result<T, RhoaiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use kube::error::ErrorResponse;

    fn api_error(code: u16) -> kube::Error {
        let resp: ErrorResponse = serde_json::from_value(serde_json::json!({
            "status": "Failure",
            "message": "boom",
            "reason": "Test",
            "code": code
        }))
        .unwrap();
        kube::Error::Api(resp)
    }

    #[test]
    fn test_from_kube_maps_status_codes() {
        assert!(matches!(
            RhoaiError::from_kube(api_error(404), "model ns/a"),
            RhoaiError::NotFound(ctx) if ctx == "model ns/a"
        ));
        assert!(matches!(
            RhoaiError::from_kube(api_error(409), "x"),
            RhoaiError::AlreadyExists(_)
        ));
        assert!(matches!(
            RhoaiError::from_kube(api_error(403), "x"),
            RhoaiError::PermissionDenied(_)
        ));
        assert!(matches!(
            RhoaiError::from_kube(api_error(401), "x"),
            RhoaiError::PermissionDenied(_)
        ));
        assert!(matches!(
            RhoaiError::from_kube(api_error(422), "x"),
            RhoaiError::InvalidArgument(_)
        ));
    }

    #[test]
    fn test_from_kube_keeps_source_for_server_errors() {
        let err = RhoaiError::from_kube(api_error(500), "list models");
        match err {
            RhoaiError::Internal { context, source } => {
                assert_eq!(context, "list models");
                assert!(matches!(source, kube::Error::Api(ref r) if r.code == 500));
            }
            other => panic!("expected Internal, got {:?}", other),
        }
    }
}
