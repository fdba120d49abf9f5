/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use credit_core::init_state;
use std::sync::Arc;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let state = init_state().await?;

    web::serve_web(Arc::clone(&state)).await?;

    tracing::info!("Credit server stopped");
    Ok(())
}
