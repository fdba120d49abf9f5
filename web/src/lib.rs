/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;
pub mod hypermedia;

use axum::Router;
use axum::routing::get;
use credit_core::types::ServerState;
use endpoints::resources::{self, ResourceState};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<ServerState>) -> Router {
    let base_url = state.cli.base_url.as_str();

    Router::new()
        .merge(resources::routes(ResourceState::new(
            Arc::clone(&state.actions),
            Arc::clone(&state.ids),
            base_url,
        )))
        .merge(resources::routes(ResourceState::new(
            Arc::clone(&state.demandes),
            Arc::clone(&state.ids),
            base_url,
        )))
        .route("/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);

    axum::serve(listener, app).await
}
