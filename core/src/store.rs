/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Key-value persistence for resources, keyed by their string id.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait,
};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::resource::Resource;

#[async_trait]
pub trait Store<T>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<T>, DbErr>;

    async fn find_one(&self, id: &str) -> Result<Option<T>, DbErr>;

    async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        Ok(self.find_one(id).await?.is_some())
    }

    /// Inserts the record, replacing any record stored under the same id.
    async fn save(&self, record: T) -> Result<T, DbErr>;

    /// Removing an unknown id is not an error.
    async fn delete(&self, id: &str) -> Result<(), DbErr>;
}

/// Records kept in process memory. `find_all` lists them in id order, which
/// for generated UUIDs is unrelated to insertion order.
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: RwLock<BTreeMap<String, T>>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl<T: Resource> Store<T> for MemoryStore<T> {
    async fn find_all(&self) -> Result<Vec<T>, DbErr> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_one(&self, id: &str) -> Result<Option<T>, DbErr> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        Ok(self.records.read().await.contains_key(id))
    }

    async fn save(&self, record: T) -> Result<T, DbErr> {
        self.records
            .write()
            .await
            .insert(record.id().to_string(), record.clone());
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<(), DbErr> {
        self.records.write().await.remove(id);
        Ok(())
    }
}

/// Records of a sea-orm entity whose primary key is a single string column.
pub struct DatabaseStore<E> {
    db: Arc<DatabaseConnection>,
    entity: PhantomData<E>,
}

impl<E> DatabaseStore<E> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E> Store<E::Model> for DatabaseStore<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<String>,
{
    async fn find_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(self.db.as_ref()).await
    }

    async fn find_one(&self, id: &str) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id.to_string()).one(self.db.as_ref()).await
    }

    async fn save(&self, record: E::Model) -> Result<E::Model, DbErr> {
        let conflict = OnConflict::columns(E::PrimaryKey::iter().map(|key| key.into_column()))
            .update_columns(E::Column::iter())
            .to_owned();

        let active: E::ActiveModel = record.clone().into_active_model();

        E::insert(active)
            .on_conflict(conflict)
            .exec_without_returning(self.db.as_ref())
            .await?;

        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<(), DbErr> {
        E::delete_by_id(id.to_string()).exec(self.db.as_ref()).await?;
        Ok(())
    }
}
