//! OKR objective and task data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::okr::{CreateObjectiveParams, CreateOkrTaskParams};

pub struct OkrRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OkrRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_objective(
        &self,
        params: CreateObjectiveParams,
    ) -> Result<entity::objective::Model, DbErr> {
        entity::objective::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            owner_id: ActiveValue::Set(params.owner_id),
            created_at: ActiveValue::Set(Utc::now()),
            due_date: ActiveValue::Set(params.due_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_objective_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::objective::Model>, DbErr> {
        entity::prelude::Objective::find_by_id(id).one(self.db).await
    }

    /// Gets all objectives with their owner resolved.
    pub async fn get_all_objectives(
        &self,
    ) -> Result<Vec<(entity::objective::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::Objective::find()
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(objective, owner)| {
                let owner = owner.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Owner of objective {} not found",
                        objective.id
                    ))
                })?;
                Ok((objective, owner))
            })
            .collect()
    }

    pub async fn create_task(
        &self,
        params: CreateOkrTaskParams,
    ) -> Result<entity::okr_task::Model, DbErr> {
        entity::okr_task::ActiveModel {
            objective_id: ActiveValue::Set(params.objective_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            due_date: ActiveValue::Set(params.due_date),
            assigned_to: ActiveValue::Set(params.assigned_to),
            completed: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all OKR tasks with their assignee resolved.
    pub async fn get_all_tasks(
        &self,
    ) -> Result<Vec<(entity::okr_task::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::OkrTask::find()
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(task, assignee)| {
                let assignee = assignee.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Assignee of OKR task {} not found", task.id))
                })?;
                Ok((task, assignee))
            })
            .collect()
    }

    pub async fn count_objectives(&self) -> Result<u64, DbErr> {
        entity::prelude::Objective::find().count(self.db).await
    }

    pub async fn count_tasks(&self) -> Result<u64, DbErr> {
        entity::prelude::OkrTask::find().count(self.db).await
    }

    pub async fn count_completed_tasks(&self) -> Result<u64, DbErr> {
        entity::prelude::OkrTask::find()
            .filter(entity::okr_task::Column::Completed.eq(true))
            .count(self.db)
            .await
    }
}
