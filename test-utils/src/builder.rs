use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Task, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Task)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign keys
    /// after their referenced tables).
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and profile tables.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(UserProfile)
    }

    /// Adds the tables needed for calendar event tests.
    pub fn with_event_tables(self) -> Self {
        self.with_table(User)
            .with_table(CalendarEvent)
            .with_table(CalendarEventAttendee)
    }

    /// Adds the tables needed for meeting tests.
    pub fn with_meeting_tables(self) -> Self {
        self.with_table(User)
            .with_table(Meeting)
            .with_table(MeetingAttendee)
    }

    /// Adds the user table plus every HR record table.
    pub fn with_hr_tables(self) -> Self {
        self.with_table(User)
            .with_table(HrFile)
            .with_table(LeaveRecord)
            .with_table(Timesheet)
            .with_table(Payslip)
            .with_table(PerformanceReview)
            .with_table(Expense)
            .with_table(PrivateNote)
    }

    /// Adds the tables needed for OKR tests.
    pub fn with_okr_tables(self) -> Self {
        self.with_table(User)
            .with_table(Objective)
            .with_table(OkrTask)
    }

    /// Adds the department, role, and membership tables.
    pub fn with_org_tables(self) -> Self {
        self.with_table(User)
            .with_table(Department)
            .with_table(Role)
            .with_table(RoleMember)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
