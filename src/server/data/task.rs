use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::task::CreateTaskParams;

pub struct TaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTaskParams) -> Result<entity::task::Model, DbErr> {
        entity::task::ActiveModel {
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

    /// Gets all tasks with their assignee resolved.
    pub async fn get_all(&self) -> Result<Vec<(entity::task::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::Task::find()
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Self::resolve_assignees(rows)
    }

    /// Gets tasks assigned to a specific user.
    pub async fn get_by_assignee(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::task::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::Task::find()
            .filter(entity::task::Column::AssignedTo.eq(user_id))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Self::resolve_assignees(rows)
    }

    pub async fn count_open(&self) -> Result<u64, DbErr> {
        entity::prelude::Task::find()
            .filter(entity::task::Column::Completed.eq(false))
            .count(self.db)
            .await
    }

    pub async fn count_completed(&self) -> Result<u64, DbErr> {
        entity::prelude::Task::find()
            .filter(entity::task::Column::Completed.eq(true))
            .count(self.db)
            .await
    }

    fn resolve_assignees(
        rows: Vec<(entity::task::Model, Option<entity::user::Model>)>,
    ) -> Result<Vec<(entity::task::Model, entity::user::Model)>, DbErr> {
        rows.into_iter()
            .map(|(task, assignee)| {
                let assignee = assignee.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Assignee of task {} not found", task.id))
                })?;
                Ok((task, assignee))
            })
            .collect()
    }
}
