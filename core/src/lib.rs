/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod ids;
pub mod input;
pub mod resource;
pub mod store;
pub mod types;

use anyhow::Result;
use clap::Parser;
use database::connect_db;
use entity::*;
use ids::UuidGenerator;
use std::sync::Arc;
use store::{DatabaseStore, MemoryStore};
use tracing_subscriber::EnvFilter;
use types::*;

pub async fn init_state() -> Result<Arc<ServerState>> {
    let cli = Cli::parse();

    init_tracing(&cli);

    tracing::info!("Starting Credit Server on {}:{}", cli.ip, cli.port);

    let state = match input::database_url(&cli)? {
        Some(db_url) => {
            let db = Arc::new(connect_db(&cli, db_url).await?);

            ServerState {
                actions: Arc::new(DatabaseStore::<action::Entity>::new(Arc::clone(&db))),
                demandes: Arc::new(DatabaseStore::<demande::Entity>::new(db)),
                ids: Arc::new(UuidGenerator),
                cli,
            }
        }
        None => {
            tracing::warn!("No database url provided, records are kept in memory");
            memory_state(cli)
        }
    };

    Ok(Arc::new(state))
}

pub fn memory_state(cli: Cli) -> ServerState {
    ServerState {
        cli,
        actions: Arc::new(MemoryStore::<MAction>::new()),
        demandes: Arc::new(MemoryStore::<MDemande>::new()),
        ids: Arc::new(UuidGenerator),
    }
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if cli.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
