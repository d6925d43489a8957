pub use super::calendar_event::Entity as CalendarEvent;
pub use super::calendar_event_attendee::Entity as CalendarEventAttendee;
pub use super::client::Entity as Client;
pub use super::department::Entity as Department;
pub use super::document::Entity as Document;
pub use super::expense::Entity as Expense;
pub use super::hr_file::Entity as HrFile;
pub use super::leave_record::Entity as LeaveRecord;
pub use super::meeting::Entity as Meeting;
pub use super::meeting_attendee::Entity as MeetingAttendee;
pub use super::objective::Entity as Objective;
pub use super::okr_task::Entity as OkrTask;
pub use super::payslip::Entity as Payslip;
pub use super::performance_review::Entity as PerformanceReview;
pub use super::policy::Entity as Policy;
pub use super::private_note::Entity as PrivateNote;
pub use super::role::Entity as Role;
pub use super::role_member::Entity as RoleMember;
pub use super::task::Entity as Task;
pub use super::timesheet::Entity as Timesheet;
pub use super::user::Entity as User;
pub use super::user_profile::Entity as UserProfile;
