/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::ids::IdGenerator;
use super::input::port_in_range;
use super::store::Store;
use clap::Parser;
use entity::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub type MAction = action::Model;
pub type MDemande = demande::Model;

#[derive(Parser, Debug, Clone)]
#[command(name = "Credit", display_name = "Credit", bin_name = "credit-server", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "CREDIT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "CREDIT_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    #[arg(long, env = "CREDIT_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "CREDIT_PORT", value_parser = port_in_range, default_value_t = 8080)]
    pub port: u16,
    #[arg(long, env = "CREDIT_BASE_URL", default_value = "")]
    pub base_url: String,
    #[arg(long, env = "CREDIT_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "CREDIT_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
}

pub struct ServerState {
    pub cli: Cli,
    pub actions: Arc<dyn Store<MAction>>,
    pub demandes: Arc<dyn Store<MDemande>>,
    pub ids: Arc<dyn IdGenerator>,
}

impl fmt::Debug for ServerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerState")
            .field("cli", &self.cli)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}
