// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::{Path, PathBuf};

use crate::cli::{default_kubeconfig, home_dir, Cli};
use crate::error::{ProvisionError, Result};

/// Where the cluster credentials come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientMode {
    /// Service account mounted into the Pod by the cluster runtime
    InCluster,
    /// Credentials read from a kubeconfig file
    OutOfCluster { kubeconfig: PathBuf },
}

impl ClientMode {
    /// Resolve the credential source once at startup.
    ///
    /// An unset or empty `run_in_k8s`, or `"true"`, selects the in-cluster
    /// credentials. Any other value reads `kubeconfig`, falling back to
    /// `~/.kube/config` under `home`.
    pub fn resolve(
        run_in_k8s: Option<&str>,
        kubeconfig: Option<PathBuf>,
        home: Option<&Path>,
    ) -> Result<Self> {
        match run_in_k8s {
            None | Some("") | Some("true") => Ok(ClientMode::InCluster),
            Some(_) => {
                let kubeconfig = kubeconfig
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| default_kubeconfig(home));
                if kubeconfig.as_os_str().is_empty() {
                    return Err(ProvisionError::KubeconfigError(
                        "no home directory found, pass --kubeconfig or set KUBECONFIG".to_string(),
                    ));
                }
                Ok(ClientMode::OutOfCluster { kubeconfig })
            }
        }
    }
}

/// Runtime configuration, resolved from the command line and environment
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: ClientMode,
    /// Namespace the game server Pods and Services are placed in
    pub namespace: String,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let home = home_dir();
        let mode = ClientMode::resolve(
            cli.run_in_k8s.as_deref(),
            cli.kubeconfig.clone(),
            home.as_deref(),
        )?;

        Ok(Config {
            mode,
            namespace: cli.namespace.clone(),
        })
    }
}
