/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! CRUD endpoints shared by every resource collection.

use crate::error::{WebError, WebResult};
use crate::hypermedia::{CollectionRepresentation, LinkBuilder, Representation};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use credit_core::ids::IdGenerator;
use credit_core::resource::Resource;
use credit_core::store::Store;
use std::sync::Arc;

pub struct ResourceState<R> {
    pub store: Arc<dyn Store<R>>,
    pub ids: Arc<dyn IdGenerator>,
    pub links: LinkBuilder,
}

impl<R: Resource> ResourceState<R> {
    pub fn new(store: Arc<dyn Store<R>>, ids: Arc<dyn IdGenerator>, base_url: &str) -> Self {
        Self {
            store,
            ids,
            links: LinkBuilder::new(base_url, R::COLLECTION),
        }
    }
}

pub fn routes<R: Resource>(state: ResourceState<R>) -> Router {
    let collection = format!("/{}", R::COLLECTION);
    let item = format!("/{}/{{id}}", R::COLLECTION);

    Router::new()
        .route(&collection, routing::get(get::<R>).post(post::<R>))
        .route(
            &item,
            routing::get(get_one::<R>)
                .put(put::<R>)
                .delete(delete::<R>),
        )
        .with_state(Arc::new(state))
}

pub async fn get<R: Resource>(
    State(state): State<Arc<ResourceState<R>>>,
) -> WebResult<Json<CollectionRepresentation<R>>> {
    let records = state.store.find_all().await?;

    Ok(Json(state.links.collection(records)))
}

pub async fn get_one<R: Resource>(
    State(state): State<Arc<ResourceState<R>>>,
    Path(id): Path<String>,
) -> WebResult<Json<Representation<R>>> {
    let record = state
        .store
        .find_one(&id)
        .await?
        .ok_or(WebError::NotFound)?;

    Ok(Json(state.links.item(record, false)))
}

pub async fn post<R: Resource>(
    State(state): State<Arc<ResourceState<R>>>,
    body: Result<Json<R>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let Json(mut record) = body?;

    // client supplied ids are never kept
    record.set_id(state.ids.generate());
    record.normalize();

    let record = state.store.save(record).await?;
    let location = state.links.item_href(record.id());

    tracing::info!(collection = R::COLLECTION, id = record.id(), "Created record");

    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

pub async fn put<R: Resource>(
    State(state): State<Arc<ResourceState<R>>>,
    Path(id): Path<String>,
    body: Result<Json<Option<R>>, JsonRejection>,
) -> WebResult<StatusCode> {
    // Not atomic with the save below: a record deleted in between is written back.
    if !state.store.exists(&id).await? {
        return Err(WebError::NotFound);
    }

    let mut record = match body? {
        Json(Some(record)) => record,
        Json(None) => return Err(WebError::BadRequest),
    };

    record.set_id(id);
    record.normalize();

    let record = state.store.save(record).await?;

    tracing::info!(collection = R::COLLECTION, id = record.id(), "Replaced record");

    Ok(StatusCode::OK)
}

pub async fn delete<R: Resource>(
    State(state): State<Arc<ResourceState<R>>>,
    Path(id): Path<String>,
) -> WebResult<StatusCode> {
    state.store.delete(&id).await?;

    tracing::debug!(collection = R::COLLECTION, id = %id, "Deleted record");

    Ok(StatusCode::NO_CONTENT)
}
