// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Manifests for a single game server: a host-networked Pod and the
//! LoadBalancer Service in front of it.

pub mod pod;
pub mod service;

pub use pod::server_pod;
pub use service::server_service;

use k8s_openapi::api::core::v1::{Pod, Service};
use std::collections::BTreeMap;

use crate::constants::SERVER_LABEL;
use crate::error::Result;

/// Identity of one game server instance.
///
/// Pod name, Service name and the `server` label are all derived from
/// `name`, so the Service always selects the Pod built from the same
/// descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDescriptor {
    pub name: String,
    pub udp_port: i32,
    pub sessions_url: String,
}

impl ServerDescriptor {
    pub fn new(name: impl Into<String>, udp_port: i32, sessions_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            udp_port,
            sessions_url: sessions_url.into(),
        }
    }

    pub fn pod(&self) -> Pod {
        server_pod(&self.name, self.udp_port, &self.sessions_url)
    }

    pub fn service(&self) -> Service {
        server_service(&self.name, self.udp_port)
    }

    /// Pod and Service as a multi-document YAML stream
    pub fn to_yaml(&self) -> Result<String> {
        let pod = serde_yaml::to_string(&self.pod())?;
        let service = serde_yaml::to_string(&self.service())?;
        Ok(format!("{}---\n{}", pod, service))
    }
}

/// Label set selecting the Pod of game server `name`
pub fn server_labels(name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(SERVER_LABEL.to_string(), name.to_string())])
}
