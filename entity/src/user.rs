use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::user_profile::Entity")]
    UserProfile,
    #[sea_orm(has_many = "super::calendar_event::Entity")]
    CalendarEvents,
    #[sea_orm(has_many = "super::calendar_event_attendee::Entity")]
    CalendarEventAttendees,
    #[sea_orm(has_many = "super::meeting::Entity")]
    Meetings,
    #[sea_orm(has_many = "super::meeting_attendee::Entity")]
    MeetingAttendees,
    #[sea_orm(has_many = "super::document::Entity")]
    Documents,
    #[sea_orm(has_many = "super::task::Entity")]
    Tasks,
    #[sea_orm(has_one = "super::hr_file::Entity")]
    HrFile,
    #[sea_orm(has_many = "super::leave_record::Entity")]
    LeaveRecords,
    #[sea_orm(has_many = "super::timesheet::Entity")]
    Timesheets,
    #[sea_orm(has_many = "super::payslip::Entity")]
    Payslips,
    #[sea_orm(has_many = "super::performance_review::Entity")]
    PerformanceReviews,
    #[sea_orm(has_many = "super::expense::Entity")]
    Expenses,
    #[sea_orm(has_many = "super::private_note::Entity")]
    PrivateNotes,
    #[sea_orm(has_many = "super::objective::Entity")]
    Objectives,
    #[sea_orm(has_many = "super::okr_task::Entity")]
    OkrTasks,
    #[sea_orm(has_many = "super::role_member::Entity")]
    RoleMemberships,
}

impl Related<super::user_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
