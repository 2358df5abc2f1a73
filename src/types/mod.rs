// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource types.

pub mod game_server;

pub use game_server::{DedicatedGameServer, DedicatedGameServerSpec, DedicatedGameServerStatus};
