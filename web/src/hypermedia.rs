/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! HAL style envelopes for resources.
//!
//! A record fetched on its own carries `self` and `collection` links, a record
//! listed inside a collection carries only `self`, and the collection itself
//! links to the list endpoint.

use credit_core::input::normalize_base_url;
use credit_core::resource::Resource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Link,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<Link>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Representation<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionRepresentation<T> {
    #[serde(rename = "_embedded")]
    pub embedded: BTreeMap<&'static str, Vec<Representation<T>>>,
    #[serde(rename = "_links")]
    pub links: Links,
}

#[derive(Debug, Clone)]
pub struct LinkBuilder {
    collection_href: String,
}

impl LinkBuilder {
    pub fn new(base_url: &str, collection: &str) -> Self {
        Self {
            collection_href: format!("{}/{}", normalize_base_url(base_url), collection),
        }
    }

    pub fn collection_href(&self) -> &str {
        &self.collection_href
    }

    pub fn item_href(&self, id: &str) -> String {
        format!("{}/{}", self.collection_href, id)
    }

    pub fn links(&self, id: &str, collection_member: bool) -> Links {
        Links {
            self_link: Link {
                href: self.item_href(id),
            },
            collection: (!collection_member).then(|| Link {
                href: self.collection_href.clone(),
            }),
        }
    }

    pub fn item<T: Resource>(&self, record: T, collection_member: bool) -> Representation<T> {
        let links = self.links(record.id(), collection_member);

        Representation {
            content: record,
            links,
        }
    }

    pub fn collection<T: Resource>(&self, records: Vec<T>) -> CollectionRepresentation<T> {
        let items = records
            .into_iter()
            .map(|record| self.item(record, true))
            .collect();

        CollectionRepresentation {
            embedded: BTreeMap::from([(T::COLLECTION, items)]),
            links: Links {
                self_link: Link {
                    href: self.collection_href.clone(),
                },
                collection: None,
            },
        }
    }
}
