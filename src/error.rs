// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Failed to load in-cluster config: {0}")]
    InClusterError(String),

    #[error("Storage secret {secret} not found in namespace {namespace}")]
    MissingSecret { namespace: String, secret: String },

    #[error("Storage secret {namespace}/{secret} has no {key} key")]
    MissingSecretKey {
        namespace: String,
        secret: String,
        key: String,
    },

    #[error("Failed to serialize manifest: {0}")]
    SerializationError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
