// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from in-cluster credentials or a kubeconfig file

use crate::config::ClientMode;
use crate::error::{ProvisionError, Result};
use crate::types::DedicatedGameServer;
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Api, Client, Config as KConfig,
};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Typed handles for built-in resources and game server custom resources.
///
/// Both share the connection and credentials of one [`Client`]; clone it
/// freely instead of building a new one.
#[derive(Clone)]
pub struct ClusterClients {
    pub kube: Client,
    /// Game server custom resources in the configured namespace
    pub game_servers: Api<DedicatedGameServer>,
}

impl ClusterClients {
    pub fn new(client: Client, namespace: &str) -> Self {
        let game_servers = Api::namespaced(client.clone(), namespace);
        Self {
            kube: client,
            game_servers,
        }
    }
}

/// Build the cluster clients for the resolved credential source.
///
/// Every failure is returned to the caller; nothing here exits the process.
#[instrument]
pub async fn acquire_cluster_clients(mode: &ClientMode, namespace: &str) -> Result<ClusterClients> {
    let config = match mode {
        ClientMode::InCluster => load_in_cluster_config()?,
        ClientMode::OutOfCluster { kubeconfig } => load_out_of_cluster_config(kubeconfig).await?,
    };

    let client = Client::try_from(config)
        .map_err(|e| ProvisionError::KubeconfigError(format!("Failed to create client: {}", e)))?;

    info!("Cluster clients ready");
    Ok(ClusterClients::new(client, namespace))
}

fn load_in_cluster_config() -> Result<KConfig> {
    debug!("Loading in-cluster service account credentials");
    KConfig::incluster().map_err(|e| ProvisionError::InClusterError(e.to_string()))
}

/// Load the client configuration from the kubeconfig file at `path`
pub async fn load_out_of_cluster_config(path: &Path) -> Result<KConfig> {
    info!("Loading kubeconfig from {}", path.display());

    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        ProvisionError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| ProvisionError::KubeconfigError(format!("Failed to create config: {}", e)))
}
