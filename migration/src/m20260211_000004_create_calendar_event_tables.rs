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
                    .table(CalendarEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(CalendarEvent::Id))
                    .col(string(CalendarEvent::Title))
                    .col(text(CalendarEvent::Description).default(""))
                    .col(timestamp_with_time_zone(CalendarEvent::StartTime))
                    .col(timestamp_with_time_zone(CalendarEvent::EndTime))
                    .col(integer(CalendarEvent::CreatedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_event_created_by")
                            .from(CalendarEvent::Table, CalendarEvent::CreatedBy)
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
                    .table(CalendarEventAttendee::Table)
                    .if_not_exists()
                    .col(pk_auto(CalendarEventAttendee::Id))
                    .col(integer(CalendarEventAttendee::EventId))
                    .col(integer(CalendarEventAttendee::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_event_attendee_event_id")
                            .from(CalendarEventAttendee::Table, CalendarEventAttendee::EventId)
                            .to(CalendarEvent::Table, CalendarEvent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_event_attendee_user_id")
                            .from(CalendarEventAttendee::Table, CalendarEventAttendee::UserId)
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
            .drop_table(
                Table::drop()
                    .table(CalendarEventAttendee::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(CalendarEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CalendarEvent {
    Table,
    Id,
    Title,
    Description,
    StartTime,
    EndTime,
    CreatedBy,
}

#[derive(DeriveIden)]
pub enum CalendarEventAttendee {
    Table,
    Id,
    EventId,
    UserId,
}
