// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line surface and kubeconfig path resolution.

use clap::{Args, Parser, Subcommand};
use std::env;
use std::path::{Path, PathBuf};

use crate::constants::bootstrap;
use crate::resources::ServerDescriptor;

#[derive(Debug, Parser)]
#[command(
    name = "arena-provisioner",
    version,
    about = "Provision dedicated game server Pods and Services on Kubernetes"
)]
pub struct Cli {
    /// (optional) absolute path to the kubeconfig file, defaults to ~/.kube/config
    #[arg(long, env = bootstrap::KUBECONFIG, global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Use in-cluster credentials when empty or "true"
    #[arg(long = "run-in-k8s", env = bootstrap::RUN_IN_K8S, global = true)]
    pub run_in_k8s: Option<String>,

    /// Namespace the game server objects live in
    #[arg(short = 'n', long, default_value = "default", global = true)]
    pub namespace: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the Pod and Service manifests without contacting the cluster
    Render(ServerArgs),
    /// Create the Pod and Service for a game server
    Create(ServerArgs),
    /// Delete the Pod and Service of a game server
    Delete {
        /// Game server name
        name: String,
    },
    /// Show the reported state of a DedicatedGameServer
    Status {
        /// Game server name
        name: String,
    },
    /// Print the DedicatedGameServer CustomResourceDefinition
    Crd,
}

#[derive(Debug, Clone, Args)]
pub struct ServerArgs {
    /// Game server name, also used for the Service and the `server` label
    pub name: String,

    /// UDP port the game server binds on the host
    #[arg(short, long, default_value_t = 27960)]
    pub port: i32,

    /// Endpoint the game server reports its sessions to
    #[arg(long = "sessions-url")]
    pub sessions_url: String,
}

impl From<ServerArgs> for ServerDescriptor {
    fn from(args: ServerArgs) -> Self {
        ServerDescriptor::new(args.name, args.port, args.sessions_url)
    }
}

/// Locate the current user's home directory.
pub fn home_dir() -> Option<PathBuf> {
    ["HOME", "USERPROFILE"]
        .iter()
        .filter_map(env::var_os)
        .find(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Default kubeconfig location under `home`.
///
/// Without a home directory the default is the empty path, and the
/// location then has to be supplied explicitly.
pub fn default_kubeconfig(home: Option<&Path>) -> PathBuf {
    match home {
        Some(home) => home.join(".kube").join("config"),
        None => PathBuf::new(),
    }
}
