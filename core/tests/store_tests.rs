/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the memory and database backed stores

use credit_core::resource::Resource;
use credit_core::store::*;
use credit_core::types::*;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use std::sync::Arc;

fn action(id: &str, nom: &str) -> MAction {
    MAction {
        id: id.to_owned(),
        nom: nom.to_owned(),
        personne_charge: "Alice".to_owned(),
        etat: "ouverte".to_owned(),
        date: "2024-01-01".to_owned(),
    }
}

#[tokio::test]
async fn test_memory_store_save_and_find() {
    let store = MemoryStore::<MAction>::new();

    store.save(action("b", "Relance")).await.unwrap();
    store.save(action("a", "Appel")).await.unwrap();

    assert_eq!(store.len().await, 2);
    assert_eq!(
        store.find_one("a").await.unwrap(),
        Some(action("a", "Appel"))
    );
    assert!(store.exists("b").await.unwrap());
    assert!(!store.exists("c").await.unwrap());

    let all = store.find_all().await.unwrap();
    let ids: Vec<&str> = all.iter().map(|a| a.id()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn test_memory_store_save_replaces() {
    let store = MemoryStore::<MAction>::new();

    store.save(action("a", "Appel")).await.unwrap();
    store.save(action("a", "Relance")).await.unwrap();

    assert_eq!(store.len().await, 1);
    assert_eq!(store.find_one("a").await.unwrap().unwrap().nom, "Relance");
}

#[tokio::test]
async fn test_memory_store_delete_is_idempotent() {
    let store = MemoryStore::<MAction>::new();
    store.save(action("a", "Appel")).await.unwrap();

    store.delete("a").await.unwrap();
    store.delete("a").await.unwrap();
    store.delete("unknown").await.unwrap();

    assert!(store.is_empty().await);
    assert_eq!(store.find_one("a").await.unwrap(), None);
}

#[tokio::test]
async fn test_database_store_find() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([
            vec![action("a", "Appel"), action("b", "Relance")],
            vec![action("a", "Appel")],
            vec![],
        ])
        .into_connection();
    let store = DatabaseStore::<action::Entity>::new(Arc::new(db));

    assert_eq!(store.find_all().await.unwrap().len(), 2);
    assert_eq!(
        store.find_one("a").await.unwrap(),
        Some(action("a", "Appel"))
    );
    assert!(!store.exists("missing").await.unwrap());
}

#[tokio::test]
async fn test_database_store_save_upserts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let db = Arc::new(db);
    let store = DatabaseStore::<action::Entity>::new(Arc::clone(&db));

    let saved = store.save(action("a", "Appel")).await.unwrap();
    assert_eq!(saved, action("a", "Appel"));

    drop(store);
    let Ok(db) = Arc::try_unwrap(db) else {
        panic!("connection still shared");
    };
    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
    let sql = format!("{:?}", log[0]);
    assert!(sql.contains("INSERT INTO"));
    assert!(sql.contains("ON CONFLICT"));
}

#[tokio::test]
async fn test_database_store_delete() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let store = DatabaseStore::<action::Entity>::new(Arc::new(db));

    store.delete("missing").await.unwrap();
}

#[test]
fn test_demande_normalize_collapses_actions() {
    let mut demande = MDemande {
        actions_id: vec!["b".to_owned(), "a".to_owned(), "b".to_owned()],
        ..Default::default()
    };

    demande.normalize();

    assert_eq!(demande.actions_id, vec!["a", "b"]);
}
