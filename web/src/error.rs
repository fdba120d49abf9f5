/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Error as AnyhowError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use credit_core::types::BaseResponse;
use sea_orm::DbErr;
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    BadRequest,
    NotFound,
    Database(DbErr),
    JsonParsing(JsonRejection),
    Internal(AnyhowError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest => write!(f, "Bad Request"),
            WebError::NotFound => write!(f, "Not Found"),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::Internal(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<AnyhowError> for WebError {
    fn from(err: AnyhowError) -> Self {
        WebError::Internal(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // resource lookups answer with a bare status
            WebError::BadRequest => return StatusCode::BAD_REQUEST.into_response(),
            WebError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            WebError::JsonParsing(err) => {
                (StatusCode::BAD_REQUEST, format!("Invalid JSON: {}", err))
            }
            WebError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(BaseResponse {
            error: true,
            message: error_message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;
