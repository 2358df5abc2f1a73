// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};

use crate::resources::ServerDescriptor;

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[kube(
    group = "azuregaming.com",
    version = "v1alpha1",
    kind = "DedicatedGameServer",
    shortname = "dgs"
)]
#[kube(namespaced)]
#[kube(status = "DedicatedGameServerStatus")]
#[serde(rename_all = "camelCase")]
pub struct DedicatedGameServerSpec {
    pub port: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions_url: Option<String>,
}

impl DedicatedGameServer {
    /// Check if the game server reports itself as running
    pub fn is_running(&self) -> bool {
        self.status
            .as_ref()
            .and_then(|s| s.state.as_deref())
            .is_some_and(|state| state == "Running")
    }

    /// Externally reachable address, once the load balancer assigned one
    pub fn endpoint(&self) -> Option<String> {
        self.status
            .as_ref()
            .and_then(|s| s.public_ip.as_ref())
            .map(|ip| format!("{}:{}", ip, self.spec.port))
    }

    /// One line summary of the reported state, for operators
    pub fn status_line(&self) -> String {
        let status = self.status.clone().unwrap_or_default();
        format!(
            "{} state={} running={} endpoint={} node={} players={}",
            self.name_any(),
            status.state.as_deref().unwrap_or("Unknown"),
            self.is_running(),
            self.endpoint().as_deref().unwrap_or("<pending>"),
            status.node_name.as_deref().unwrap_or("<none>"),
            status.active_players.unwrap_or(0),
        )
    }

    /// Describe the Pod and Service backing this game server
    pub fn descriptor(&self) -> ServerDescriptor {
        ServerDescriptor::new(
            self.name_any(),
            self.spec.port,
            self.spec.sessions_url.clone().unwrap_or_default(),
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DedicatedGameServerStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_players: Option<i32>,
}
