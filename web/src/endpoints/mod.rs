/*
* SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
*
* SPDX-License-Identifier: AGPL-3.0-only
*/

pub mod resources;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use credit_core::types::BaseResponse;

pub async fn handle_404() -> WebError {
    WebError::NotFound
}

pub async fn get_health() -> WebResult<Json<BaseResponse<String>>> {
    let res = BaseResponse {
        error: false,
        message: "200 ALIVE".to_string(),
    };

    Ok(Json(res))
}
