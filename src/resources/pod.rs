// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::api::core::v1::{
    AzureFileVolumeSource, Container, ContainerPort, EnvVar, EnvVarSource, Pod, PodSpec,
    SecretKeySelector, Volume, VolumeMount,
};
use kube::api::ObjectMeta;

use super::server_labels;
use crate::constants::{container, env, policy, storage};

/// Build the Pod running game server `name` on host UDP port `udp_port`.
///
/// The Pod uses the host network so clients reach the server without NAT,
/// and never restarts in place: a failed server is left for a controller
/// to replace with a fresh Pod. No validation happens here.
pub fn server_pod(name: &str, udp_port: i32, sessions_url: &str) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            labels: Some(server_labels(name)),
            ..Default::default()
        },
        spec: Some(PodSpec {
            containers: vec![Container {
                name: container::NAME.to_string(),
                image: Some(container::IMAGE.to_string()),
                ports: Some(vec![ContainerPort {
                    name: Some(container::PORT_NAME.to_string()),
                    protocol: Some(container::PROTOCOL.to_string()),
                    container_port: udp_port,
                    ..Default::default()
                }]),
                env: Some(server_env(name, udp_port, sessions_url)),
                volume_mounts: Some(vec![VolumeMount {
                    name: storage::VOLUME_NAME.to_string(),
                    mount_path: storage::MOUNT_PATH.to_string(),
                    ..Default::default()
                }]),
                ..Default::default()
            }],
            volumes: Some(vec![Volume {
                name: storage::VOLUME_NAME.to_string(),
                azure_file: Some(AzureFileVolumeSource {
                    secret_name: storage::SECRET_NAME.to_string(),
                    share_name: storage::SHARE_NAME.to_string(),
                    read_only: Some(false),
                }),
                ..Default::default()
            }]),
            host_network: Some(true),
            dns_policy: Some(policy::DNS.to_string()),
            restart_policy: Some(policy::RESTART.to_string()),
            ..Default::default()
        }),
        status: None,
    }
}

fn server_env(name: &str, udp_port: i32, sessions_url: &str) -> Vec<EnvVar> {
    vec![
        literal(env::START_MAP, container::START_MAP),
        literal(env::PORT, &udp_port.to_string()),
        from_storage_secret(env::STORAGE_ACCOUNT_NAME, storage::ACCOUNT_NAME_KEY),
        from_storage_secret(env::STORAGE_ACCOUNT_KEY, storage::ACCOUNT_KEY_KEY),
        literal(env::SERVER_NAME, name),
        literal(env::SET_SESSIONS_URL, sessions_url),
    ]
}

fn literal(name: &str, value: &str) -> EnvVar {
    EnvVar {
        name: name.to_string(),
        value: Some(value.to_string()),
        value_from: None,
    }
}

// Resolved by the kubelet; the manifest only carries the reference.
fn from_storage_secret(name: &str, key: &str) -> EnvVar {
    EnvVar {
        name: name.to_string(),
        value: None,
        value_from: Some(EnvVarSource {
            secret_key_ref: Some(SecretKeySelector {
                name: storage::SECRET_NAME.to_string(),
                key: key.to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }),
    }
}
