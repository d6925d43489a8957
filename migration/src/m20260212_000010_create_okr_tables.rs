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
                    .table(Objective::Table)
                    .if_not_exists()
                    .col(pk_auto(Objective::Id))
                    .col(string(Objective::Title))
                    .col(text(Objective::Description).default(""))
                    .col(integer(Objective::OwnerId))
                    .col(
                        timestamp_with_time_zone(Objective::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone(Objective::DueDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_objective_owner_id")
                            .from(Objective::Table, Objective::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OkrTask::Table)
                    .if_not_exists()
                    .col(pk_auto(OkrTask::Id))
                    .col(integer(OkrTask::ObjectiveId))
                    .col(string(OkrTask::Title))
                    .col(text(OkrTask::Description).default(""))
                    .col(timestamp_with_time_zone(OkrTask::DueDate))
                    .col(integer(OkrTask::AssignedTo))
                    .col(boolean(OkrTask::Completed).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_okr_task_objective_id")
                            .from(OkrTask::Table, OkrTask::ObjectiveId)
                            .to(Objective::Table, Objective::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_okr_task_assigned_to")
                            .from(OkrTask::Table, OkrTask::AssignedTo)
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
            .drop_table(Table::drop().table(OkrTask::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Objective::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Objective {
    Table,
    Id,
    Title,
    Description,
    OwnerId,
    CreatedAt,
    DueDate,
}

#[derive(DeriveIden)]
pub enum OkrTask {
    Table,
    Id,
    ObjectiveId,
    Title,
    Description,
    DueDate,
    AssignedTo,
    Completed,
}
