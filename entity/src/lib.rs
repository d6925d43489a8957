//! SeaORM entity definitions for every persisted table.

pub mod prelude;

pub mod calendar_event;
pub mod calendar_event_attendee;
pub mod client;
pub mod department;
pub mod document;
pub mod expense;
pub mod hr_file;
pub mod leave_record;
pub mod meeting;
pub mod meeting_attendee;
pub mod objective;
pub mod okr_task;
pub mod payslip;
pub mod performance_review;
pub mod policy;
pub mod private_note;
pub mod role;
pub mod role_member;
pub mod task;
pub mod timesheet;
pub mod user;
pub mod user_profile;
