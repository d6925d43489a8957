use sea_orm::DatabaseConnection;

use crate::server::{
    data::okr::OkrRepository,
    error::AppError,
    model::okr::{
        CreateObjectiveParams, CreateOkrTaskParams, Objective, OkrDashboard, OkrTask,
    },
    service::resolve_user,
};

pub struct OkrService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OkrService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_objective(
        &self,
        params: CreateObjectiveParams,
    ) -> Result<Objective, AppError> {
        let owner = resolve_user(self.db, params.owner_id).await?;

        let objective = OkrRepository::new(self.db).create_objective(params).await?;

        Ok(Objective::from_entity(objective, owner))
    }

    pub async fn get_objectives(&self) -> Result<Vec<Objective>, AppError> {
        let rows = OkrRepository::new(self.db).get_all_objectives().await?;

        Ok(rows
            .into_iter()
            .map(|(objective, owner)| Objective::from_entity(objective, owner))
            .collect())
    }

    /// Creates an OKR task under an existing objective.
    ///
    /// Resolves both the parent objective and the assignee before inserting.
    pub async fn create_task(&self, params: CreateOkrTaskParams) -> Result<OkrTask, AppError> {
        let repo = OkrRepository::new(self.db);

        if repo.find_objective_by_id(params.objective_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Objective {} not found",
                params.objective_id
            )));
        }

        let assignee = resolve_user(self.db, params.assigned_to).await?;

        let task = repo.create_task(params).await?;

        Ok(OkrTask::from_entity(task, assignee))
    }

    pub async fn get_tasks(&self) -> Result<Vec<OkrTask>, AppError> {
        let rows = OkrRepository::new(self.db).get_all_tasks().await?;

        Ok(rows
            .into_iter()
            .map(|(task, assignee)| OkrTask::from_entity(task, assignee))
            .collect())
    }

    /// Aggregates objective and task counts for the dashboard.
    pub async fn dashboard(&self) -> Result<OkrDashboard, AppError> {
        let repo = OkrRepository::new(self.db);

        Ok(OkrDashboard {
            objective_count: repo.count_objectives().await?,
            task_count: repo.count_tasks().await?,
            completed_task_count: repo.count_completed_tasks().await?,
        })
    }
}
