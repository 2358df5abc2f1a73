// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use kube::api::ObjectMeta;

use super::server_labels;
use crate::constants::{container, policy};

/// Build the LoadBalancer Service exposing game server `name` on `udp_port`.
pub fn server_service(name: &str, udp_port: i32) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            ports: Some(vec![ServicePort {
                name: Some(container::PORT_NAME.to_string()),
                protocol: Some(container::PROTOCOL.to_string()),
                port: udp_port,
                ..Default::default()
            }]),
            selector: Some(server_labels(name)),
            type_: Some(policy::SERVICE_TYPE.to_string()),
            ..Default::default()
        }),
        status: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_service() {
        let service = server_service("arena-1", 27960);
        let spec = service.spec.unwrap();

        assert_eq!(service.metadata.name.as_deref(), Some("arena-1"));
        assert_eq!(spec.type_.as_deref(), Some("LoadBalancer"));
        assert_eq!(spec.selector.unwrap().get("server").unwrap(), "arena-1");

        let ports = spec.ports.unwrap();
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].port, 27960);
        assert_eq!(ports[0].protocol.as_deref(), Some("UDP"));
        assert_eq!(ports[0].name.as_deref(), Some("port1"));
    }

    #[test]
    fn test_server_service_has_no_labels_of_its_own() {
        let service = server_service("arena-1", 27960);
        assert!(service.metadata.labels.is_none());
    }
}
