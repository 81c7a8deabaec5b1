// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Annotation keys reserved for fields that have no place in the native schema
pub mod annotations {
    /// Human readable name shown in the dashboard
    pub const DISPLAY_NAME: &str = "openshift.io/display-name";
    /// Free-form description shown in the dashboard
    pub const DESCRIPTION: &str = "openshift.io/description";

    /// Keys that only ever travel as annotations, never as labels
    pub const RESERVED: [&str; 2] = [DISPLAY_NAME, DESCRIPTION];
}

/// Capability detection defaults
pub mod detection {
    /// The group whose presence decides whether OpenShift AI is installed
    pub const CORE_GROUP: &str = "datasciencecluster.opendatahub.io";

    /// Version candidates in expected maturity order, first match wins
    pub const VERSION_CANDIDATES: [&str; 3] = ["v1", "v1beta1", "v1alpha1"];

    /// API groups and the component name reported for each
    pub const COMPONENTS: [(&str, &str); 6] = [
        (CORE_GROUP, "Data Science Cluster"),
        ("dscinitialization.opendatahub.io", "DSC Initialization"),
        ("kubeflow.org", "Notebooks"),
        ("serving.kserve.io", "Model Serving"),
        ("datasciencepipelinesapplications.opendatahub.io", "Data Science Pipelines"),
        ("modelregistry.opendatahub.io", "Model Registry"),
    ];

    /// Node capacity keys advertised by the GPU vendor device plugins
    pub const GPU_RESOURCE_KEYS: [&str; 3] = ["nvidia.com/gpu", "amd.com/gpu", "gpu.intel.com/i915"];

    /// Component name appended when GPU capacity is found
    pub const GPU_COMPONENT: &str = "GPU Monitoring";

    /// Fixed interval between availability polls in seconds
    pub const POLL_INTERVAL_SECS: u64 = 2;
}
