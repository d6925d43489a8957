use sea_orm::DatabaseConnection;

use crate::server::{
    data::task::TaskRepository,
    error::AppError,
    model::task::{CreateTaskParams, Task},
    service::resolve_user,
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a task assigned to an existing user.
    pub async fn create(&self, params: CreateTaskParams) -> Result<Task, AppError> {
        let assignee = resolve_user(self.db, params.assigned_to).await?;

        let task = TaskRepository::new(self.db).create(params).await?;

        Ok(Task::from_entity(task, assignee))
    }

    pub async fn get_all(&self) -> Result<Vec<Task>, AppError> {
        let rows = TaskRepository::new(self.db).get_all().await?;

        Ok(rows
            .into_iter()
            .map(|(task, assignee)| Task::from_entity(task, assignee))
            .collect())
    }

    /// Gets the tasks assigned to one user, for the personal surface.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Task>, AppError> {
        let rows = TaskRepository::new(self.db).get_by_assignee(user_id).await?;

        Ok(rows
            .into_iter()
            .map(|(task, assignee)| Task::from_entity(task, assignee))
            .collect())
    }
}
