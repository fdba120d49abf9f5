use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A follow-up task attached to a credit request.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "action")]
#[serde(default)]
pub struct Model {
    // assigned by the server, never read from a request body
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(skip_deserializing)]
    pub id: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub nom: String,
    #[serde(
        rename = "personnecharge",
        alias = "personneEnCharge",
        deserialize_with = "crate::null_as_default",
    )]
    pub personne_charge: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub etat: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
