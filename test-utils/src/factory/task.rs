//! Task factory for creating test task entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tasks with customizable fields.
///
/// Defaults to an open task due in one week.
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    due_date: DateTime<Utc>,
    assigned_to: i32,
    completed: bool,
}

impl<'a> TaskFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, assigned_to: i32) -> Self {
        Self {
            db,
            title: format!("Task {}", next_id()),
            description: String::new(),
            due_date: Utc::now() + Duration::weeks(1),
            assigned_to,
            completed: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        entity::task::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            due_date: ActiveValue::Set(self.due_date),
            assigned_to: ActiveValue::Set(self.assigned_to),
            completed: ActiveValue::Set(self.completed),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open task assigned to the given user.
pub async fn create_task(
    db: &DatabaseConnection,
    assigned_to: i32,
) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, assigned_to).build().await
}
