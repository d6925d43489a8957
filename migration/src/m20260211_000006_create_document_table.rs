use sea_orm_migration::{prelude::*, schema::*};

use super::m20260210_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_auto(Document::Id))
                    .col(string(Document::Title))
                    .col(text(Document::Description).default(""))
                    .col(
                        timestamp_with_time_zone(Document::UploadedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(integer(Document::UploadedBy))
                    .col(string(Document::FilePath))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_uploaded_by")
                            .from(Document::Table, Document::UploadedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Document {
    Table,
    Id,
    Title,
    Description,
    UploadedAt,
    UploadedBy,
    FilePath,
}
