// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Label used to tie a game server Service to its Pod
pub const SERVER_LABEL: &str = "server";

/// Game server container settings
pub mod container {
    pub const NAME: &str = "gameserver";
    pub const IMAGE: &str = "docker.io/dgkanatsios/docker_openarena_k8s:latest";
    /// Name shared by the container port and the Service port
    pub const PORT_NAME: &str = "port1";
    pub const PROTOCOL: &str = "UDP";
    pub const START_MAP: &str = "dm4ish";
}

/// Environment variables read by the game server process at startup
pub mod env {
    pub const START_MAP: &str = "OA_STARTMAP";
    pub const PORT: &str = "OA_PORT";
    pub const STORAGE_ACCOUNT_NAME: &str = "STORAGE_ACCOUNT_NAME";
    pub const STORAGE_ACCOUNT_KEY: &str = "STORAGE_ACCOUNT_KEY";
    pub const SERVER_NAME: &str = "SERVER_NAME";
    pub const SET_SESSIONS_URL: &str = "SET_SESSIONS_URL";
}

/// Pre-existing secret holding the storage account credentials.
/// It must exist in the target namespace; nothing here creates it.
pub mod storage {
    pub const SECRET_NAME: &str = "openarena-storage-secret";
    pub const ACCOUNT_NAME_KEY: &str = "azurestorageaccountname";
    pub const ACCOUNT_KEY_KEY: &str = "azurestorageaccountkey";
    pub const SHARE_NAME: &str = "openarenadata";
    pub const VOLUME_NAME: &str = "openarenavolume";
    pub const MOUNT_PATH: &str = "/data";
}

/// Pod level policies
pub mod policy {
    pub const DNS: &str = "ClusterFirstWithHostNet";
    pub const RESTART: &str = "Never";
    pub const SERVICE_TYPE: &str = "LoadBalancer";
}

/// Process environment consulted when choosing how to reach the cluster
pub mod bootstrap {
    pub const RUN_IN_K8S: &str = "RUN_IN_K8S";
    pub const KUBECONFIG: &str = "KUBECONFIG";
}
