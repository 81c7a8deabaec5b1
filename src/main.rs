// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rhoai::capability::{CapabilityDetector, DetectorConfig};
use rhoai::config::Config;
use rhoai::types::{Application, Experiment, Model, Pipeline, PipelineRun, Project};
use rhoai::{Entity, ResourceClient, ResourceKind};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace={}, wait_timeout={:?}, policy={:?}",
        config.namespace, config.wait_timeout, config.policy
    );

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let detector = CapabilityDetector::with_config(
        client.clone(),
        DetectorConfig {
            policy: config.policy,
            ..Default::default()
        },
    );

    if !config.wait_timeout.is_zero() {
        info!("Waiting up to {:?} for OpenShift AI...", config.wait_timeout);
        detector.wait_for_availability(config.wait_timeout).await?;
    }

    let status = detector.check_availability().await;
    print!("{}", serde_yaml::to_string(&status)?);

    if let Some(kind) = config.list_kind {
        status.ensure_available()?;
        let resources = ResourceClient::new(client);
        let namespace = kind.namespaced().then_some(config.namespace.as_str());

        match kind {
            ResourceKind::Project => print_records::<Project>(&resources, namespace).await?,
            ResourceKind::Application => print_records::<Application>(&resources, namespace).await?,
            ResourceKind::Experiment => print_records::<Experiment>(&resources, namespace).await?,
            ResourceKind::Model => print_records::<Model>(&resources, namespace).await?,
            ResourceKind::Pipeline => print_records::<Pipeline>(&resources, namespace).await?,
            ResourceKind::PipelineRun => print_records::<PipelineRun>(&resources, namespace).await?,
        }
    }

    Ok(())
}

async fn print_records<T: Entity + Serialize>(
    resources: &ResourceClient<Client>,
    namespace: Option<&str>,
) -> Result<()> {
    let records: Vec<T> = resources.list(namespace).await?;
    info!("Found {} {} records", records.len(), T::KIND);

    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }
    Ok(())
}
