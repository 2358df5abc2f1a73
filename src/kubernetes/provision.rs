// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Creating and removing the Pod and Service of a game server

use crate::error::Result;
use crate::kubernetes::client::ClusterClients;
use crate::resources::ServerDescriptor;
use k8s_openapi::api::core::v1::{Pod, Service};
use kube::{
    api::{DeleteParams, PostParams},
    Api,
};
use tracing::{debug, info, instrument, warn};

/// Create the Pod and its LoadBalancer Service for `descriptor`.
///
/// The Pod is created first. If the Service fails the Pod is left in
/// place and the error returned.
#[instrument(skip(clients, descriptor), fields(server = %descriptor.name))]
pub async fn create_game_server(
    clients: &ClusterClients,
    namespace: &str,
    descriptor: &ServerDescriptor,
) -> Result<(Pod, Service)> {
    let pods: Api<Pod> = Api::namespaced(clients.kube.clone(), namespace);
    let services: Api<Service> = Api::namespaced(clients.kube.clone(), namespace);
    let pp = PostParams::default();

    info!(
        "Creating game server {}/{} on UDP port {}",
        namespace, descriptor.name, descriptor.udp_port
    );

    let pod = pods.create(&pp, &descriptor.pod()).await?;
    debug!("Pod {}/{} created", namespace, descriptor.name);

    let service = services.create(&pp, &descriptor.service()).await?;
    debug!("Service {}/{} created", namespace, descriptor.name);

    Ok((pod, service))
}

/// Delete the Service and Pod of game server `name`. Objects already gone are skipped.
#[instrument(skip(clients))]
pub async fn delete_game_server(clients: &ClusterClients, namespace: &str, name: &str) -> Result<()> {
    let pods: Api<Pod> = Api::namespaced(clients.kube.clone(), namespace);
    let services: Api<Service> = Api::namespaced(clients.kube.clone(), namespace);
    let dp = DeleteParams::default();

    match services.delete(name, &dp).await {
        Ok(_) => debug!("Service {}/{} deleted", namespace, name),
        Err(kube::Error::Api(err)) if err.code == 404 => {
            warn!("Service {}/{} not found, skipping", namespace, name)
        }
        Err(e) => return Err(e.into()),
    }

    match pods.delete(name, &dp).await {
        Ok(_) => debug!("Pod {}/{} deleted", namespace, name),
        Err(kube::Error::Api(err)) if err.code == 404 => {
            warn!("Pod {}/{} not found, skipping", namespace, name)
        }
        Err(e) => return Err(e.into()),
    }

    info!("Game server {}/{} removed", namespace, name);
    Ok(())
}
