/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Demande::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Demande::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Demande::Nom).string().not_null())
                    .col(ColumnDef::new(Demande::Prenom).string().not_null())
                    .col(ColumnDef::new(Demande::Adresse).string().not_null())
                    .col(ColumnDef::new(Demande::DateNaissance).string().not_null())
                    .col(ColumnDef::new(Demande::Revenu).double().not_null())
                    .col(ColumnDef::new(Demande::Credit).double().not_null())
                    .col(ColumnDef::new(Demande::Duree).integer().not_null())
                    .col(ColumnDef::new(Demande::Etat).string().not_null())
                    // References to action ids are kept as plain strings, no foreign key.
                    .col(
                        ColumnDef::new(Demande::ActionsId)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Demande::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Demande {
    Table,
    Id,
    Nom,
    Prenom,
    Adresse,
    DateNaissance,
    Revenu,
    Credit,
    Duree,
    Etat,
    ActionsId,
}
