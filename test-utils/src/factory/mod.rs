//! Factory methods for creating test data.
//!
//! Each entity has a factory module with a `create_*` convenience function,
//! and a builder-style `Factory` struct where tests commonly need to override
//! fields. Factories handle foreign keys explicitly: callers pass the ids of
//! already-created parent rows.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let task = factory::task::TaskFactory::new(&db, user.id)
//!     .completed(true)
//!     .build()
//!     .await?;
//! ```

pub mod calendar_event;
pub mod client;
pub mod document;
pub mod helpers;
pub mod hr;
pub mod meeting;
pub mod okr;
pub mod org;
pub mod policy;
pub mod task;
pub mod user;
pub mod user_profile;

// Re-export commonly used factory functions for concise usage
pub use calendar_event::{create_event, create_event_attendee};
pub use client::create_client;
pub use document::create_document;
pub use meeting::{create_meeting, create_meeting_attendee};
pub use okr::{create_objective, create_okr_task};
pub use org::{create_department, create_role, create_role_member};
pub use policy::create_policy;
pub use task::create_task;
pub use user::create_user;
pub use user_profile::create_profile;
