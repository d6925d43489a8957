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
                    .table(Meeting::Table)
                    .if_not_exists()
                    .col(pk_auto(Meeting::Id))
                    .col(string(Meeting::Title))
                    .col(text(Meeting::Description).default(""))
                    .col(timestamp_with_time_zone(Meeting::StartTime))
                    .col(timestamp_with_time_zone(Meeting::EndTime))
                    .col(integer(Meeting::CreatedBy))
                    .col(string(Meeting::MeetLink).default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meeting_created_by")
                            .from(Meeting::Table, Meeting::CreatedBy)
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
                    .table(MeetingAttendee::Table)
                    .if_not_exists()
                    .col(pk_auto(MeetingAttendee::Id))
                    .col(integer(MeetingAttendee::MeetingId))
                    .col(integer(MeetingAttendee::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meeting_attendee_meeting_id")
                            .from(MeetingAttendee::Table, MeetingAttendee::MeetingId)
                            .to(Meeting::Table, Meeting::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meeting_attendee_user_id")
                            .from(MeetingAttendee::Table, MeetingAttendee::UserId)
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
            .drop_table(Table::drop().table(MeetingAttendee::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Meeting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Meeting {
    Table,
    Id,
    Title,
    Description,
    StartTime,
    EndTime,
    CreatedBy,
    MeetLink,
}

#[derive(DeriveIden)]
pub enum MeetingAttendee {
    Table,
    Id,
    MeetingId,
    UserId,
}
