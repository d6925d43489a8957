use sea_orm::DatabaseConnection;

use crate::server::{
    data::{task::TaskRepository, user::UserRepository},
    error::AppError,
    model::manager::ManagerDashboard,
};

pub struct ManagerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ManagerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Aggregates team size and task counts for the manager dashboard.
    pub async fn dashboard(&self) -> Result<ManagerDashboard, AppError> {
        let task_repo = TaskRepository::new(self.db);

        Ok(ManagerDashboard {
            team_member_count: UserRepository::new(self.db).count().await?,
            open_task_count: task_repo.count_open().await?,
            completed_task_count: task_repo.count_completed().await?,
        })
    }
}
