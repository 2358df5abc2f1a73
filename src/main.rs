// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use kube::CustomResourceExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use arena_provisioner::cli::{Cli, Command};
use arena_provisioner::config::Config;
use arena_provisioner::kubernetes::{
    acquire_cluster_clients, create_game_server, delete_game_server, ensure_storage_secret,
};
use arena_provisioner::resources::ServerDescriptor;
use arena_provisioner::types::DedicatedGameServer;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so rendered manifests can be piped
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Render(args) => {
            let descriptor = ServerDescriptor::from(args.clone());
            print!("{}", descriptor.to_yaml()?);
        }
        Command::Crd => {
            print!("{}", serde_yaml::to_string(&DedicatedGameServer::crd())?);
        }
        Command::Create(args) => {
            let config = Config::from_cli(&cli)?;
            info!("Credential source: {:?}", config.mode);

            let clients = acquire_cluster_clients(&config.mode, &config.namespace)
                .await
                .context("Can not get kubernetes config")?;
            ensure_storage_secret(&clients.kube, &config.namespace).await?;

            let descriptor = ServerDescriptor::from(args.clone());
            create_game_server(&clients, &config.namespace, &descriptor).await?;
            info!(
                "Game server {}/{} created",
                config.namespace, descriptor.name
            );
        }
        Command::Delete { name } => {
            let config = Config::from_cli(&cli)?;
            info!("Credential source: {:?}", config.mode);

            let clients = acquire_cluster_clients(&config.mode, &config.namespace)
                .await
                .context("Can not get kubernetes config")?;
            delete_game_server(&clients, &config.namespace, name).await?;
        }
        Command::Status { name } => {
            let config = Config::from_cli(&cli)?;
            info!("Credential source: {:?}", config.mode);

            let clients = acquire_cluster_clients(&config.mode, &config.namespace)
                .await
                .context("Can not get kubernetes config")?;
            let game_server = clients.game_servers.get(name).await?;
            println!("{}", game_server.status_line());
        }
    }

    Ok(())
}
