use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ObjectiveDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub owner: UserDto,
    pub created_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateObjectiveDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub owner_id: i32,
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OkrTaskDto {
    pub id: i32,
    pub objective_id: i32,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub assigned_to: UserDto,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOkrTaskDto {
    pub objective_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub assigned_to: i32,
}

/// Aggregates over the OKR tables, replacing the old placeholder payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OkrDashboardDto {
    pub objective_count: u64,
    pub task_count: u64,
    pub completed_task_count: u64,
}
