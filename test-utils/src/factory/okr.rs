use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an objective owned by the given user, due in 90 days.
pub async fn create_objective(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::objective::Model, DbErr> {
    let now = Utc::now();
    entity::objective::ActiveModel {
        title: ActiveValue::Set(format!("Objective {}", next_id())),
        description: ActiveValue::Set(String::new()),
        owner_id: ActiveValue::Set(owner_id),
        created_at: ActiveValue::Set(now),
        due_date: ActiveValue::Set(now + Duration::days(90)),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an open OKR task under an existing objective.
pub async fn create_okr_task(
    db: &DatabaseConnection,
    objective_id: i32,
    assigned_to: i32,
) -> Result<entity::okr_task::Model, DbErr> {
    entity::okr_task::ActiveModel {
        objective_id: ActiveValue::Set(objective_id),
        title: ActiveValue::Set(format!("Key Result {}", next_id())),
        description: ActiveValue::Set(String::new()),
        due_date: ActiveValue::Set(Utc::now() + Duration::days(30)),
        assigned_to: ActiveValue::Set(assigned_to),
        completed: ActiveValue::Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a completed OKR task under an existing objective.
pub async fn create_completed_okr_task(
    db: &DatabaseConnection,
    objective_id: i32,
    assigned_to: i32,
) -> Result<entity::okr_task::Model, DbErr> {
    entity::okr_task::ActiveModel {
        objective_id: ActiveValue::Set(objective_id),
        title: ActiveValue::Set(format!("Key Result {}", next_id())),
        description: ActiveValue::Set(String::new()),
        due_date: ActiveValue::Set(Utc::now() + Duration::days(30)),
        assigned_to: ActiveValue::Set(assigned_to),
        completed: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
