// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, secret preflight, and game server provisioning.

pub mod client;
pub mod provision;
pub mod secrets;

pub use client::{acquire_cluster_clients, load_out_of_cluster_config, ClusterClients};
pub use provision::{create_game_server, delete_game_server};
pub use secrets::ensure_storage_secret;
