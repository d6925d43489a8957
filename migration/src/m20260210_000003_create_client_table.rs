use sea_orm_migration::{prelude::*, schema::*};

use super::m20260210_000002_create_user_profile_table::UserProfile;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(pk_auto(Client::Id))
                    .col(string(Client::Name))
                    .col(string(Client::Phone))
                    .col(string(Client::Address))
                    .col(string(Client::Email))
                    .col(
                        timestamp_with_time_zone(Client::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(integer(Client::OrganisationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_organisation_id")
                            .from(Client::Table, Client::OrganisationId)
                            .to(UserProfile::Table, UserProfile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Client {
    Table,
    Id,
    Name,
    Phone,
    Address,
    Email,
    CreatedAt,
    OrganisationId,
}
