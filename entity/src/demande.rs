use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A loan request. `actions_id` holds identifiers of related actions; they are
/// plain references and are neither checked nor cascaded.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "demande")]
#[serde(default)]
pub struct Model {
    // assigned by the server, never read from a request body
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(skip_deserializing)]
    pub id: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub nom: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub prenom: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub adresse: String,
    #[serde(
        rename = "datenaiss",
        alias = "dateNaissance",
        deserialize_with = "crate::null_as_default",
    )]
    pub date_naissance: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub revenu: f64,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub credit: f64,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub duree: i32,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub etat: String,
    #[serde(
        rename = "actions-id",
        alias = "actionsId",
        deserialize_with = "crate::null_as_default",
    )]
    pub actions_id: Vec<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
