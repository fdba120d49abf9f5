/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::{ACTIONS_COLLECTION, DEMANDES_COLLECTION};
use super::types::{MAction, MDemande};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record served under `/{COLLECTION}` and addressed by a string id.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Brings the record into its stored form before it is saved.
    fn normalize(&mut self) {}
}

impl Resource for MAction {
    const COLLECTION: &'static str = ACTIONS_COLLECTION;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Resource for MDemande {
    const COLLECTION: &'static str = DEMANDES_COLLECTION;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    // actions_id is a set
    fn normalize(&mut self) {
        self.actions_id.sort();
        self.actions_id.dedup();
    }
}
