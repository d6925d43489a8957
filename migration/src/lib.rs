pub use sea_orm_migration::prelude::*;

mod m20260210_000001_create_user_table;
mod m20260210_000002_create_user_profile_table;
mod m20260210_000003_create_client_table;
mod m20260211_000004_create_calendar_event_tables;
mod m20260211_000005_create_meeting_tables;
mod m20260211_000006_create_document_table;
mod m20260211_000007_create_task_table;
mod m20260212_000008_create_hr_record_tables;
mod m20260212_000009_create_policy_table;
mod m20260212_000010_create_okr_tables;
mod m20260212_000011_create_department_role_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260210_000001_create_user_table::Migration),
            Box::new(m20260210_000002_create_user_profile_table::Migration),
            Box::new(m20260210_000003_create_client_table::Migration),
            Box::new(m20260211_000004_create_calendar_event_tables::Migration),
            Box::new(m20260211_000005_create_meeting_tables::Migration),
            Box::new(m20260211_000006_create_document_table::Migration),
            Box::new(m20260211_000007_create_task_table::Migration),
            Box::new(m20260212_000008_create_hr_record_tables::Migration),
            Box::new(m20260212_000009_create_policy_table::Migration),
            Box::new(m20260212_000010_create_okr_tables::Migration),
            Box::new(m20260212_000011_create_department_role_tables::Migration),
        ]
    }
}
