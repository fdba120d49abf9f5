/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

use super::types::*;

pub async fn connect_db(cli: &Cli, db_url: String) -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    opt.sqlx_logging(cli.log_level == "debug");

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;

    Ok(db)
}
