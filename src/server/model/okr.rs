//! OKR domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::okr::{
        CreateObjectiveDto, CreateOkrTaskDto, ObjectiveDto, OkrDashboardDto, OkrTaskDto,
    },
    server::model::user::User,
};

/// Objective with its owner resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub owner: User,
    pub created_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

impl Objective {
    pub fn from_entity(objective: entity::objective::Model, owner: entity::user::Model) -> Self {
        Self {
            id: objective.id,
            title: objective.title,
            description: objective.description,
            owner: User::from_entity(owner),
            created_at: objective.created_at,
            due_date: objective.due_date,
        }
    }

    pub fn into_dto(self) -> ObjectiveDto {
        ObjectiveDto {
            id: self.id,
            title: self.title,
            description: self.description,
            owner: self.owner.into_dto(),
            created_at: self.created_at,
            due_date: self.due_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateObjectiveParams {
    pub title: String,
    pub description: String,
    pub owner_id: i32,
    pub due_date: DateTime<Utc>,
}

impl CreateObjectiveParams {
    pub fn from_dto(dto: CreateObjectiveDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            owner_id: dto.owner_id,
            due_date: dto.due_date,
        }
    }
}

/// OKR task with its assignee resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct OkrTask {
    pub id: i32,
    pub objective_id: i32,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub assigned_to: User,
    pub completed: bool,
}

impl OkrTask {
    pub fn from_entity(task: entity::okr_task::Model, assignee: entity::user::Model) -> Self {
        Self {
            id: task.id,
            objective_id: task.objective_id,
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            assigned_to: User::from_entity(assignee),
            completed: task.completed,
        }
    }

    pub fn into_dto(self) -> OkrTaskDto {
        OkrTaskDto {
            id: self.id,
            objective_id: self.objective_id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            assigned_to: self.assigned_to.into_dto(),
            completed: self.completed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateOkrTaskParams {
    pub objective_id: i32,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub assigned_to: i32,
}

impl CreateOkrTaskParams {
    pub fn from_dto(dto: CreateOkrTaskDto) -> Self {
        Self {
            objective_id: dto.objective_id,
            title: dto.title,
            description: dto.description,
            due_date: dto.due_date,
            assigned_to: dto.assigned_to,
        }
    }
}

/// Aggregate counts over the OKR tables.
#[derive(Debug, Clone, PartialEq)]
pub struct OkrDashboard {
    pub objective_count: u64,
    pub task_count: u64,
    pub completed_task_count: u64,
}

impl OkrDashboard {
    pub fn into_dto(self) -> OkrDashboardDto {
        OkrDashboardDto {
            objective_count: self.objective_count,
            task_count: self.task_count,
            completed_task_count: self.completed_task_count,
        }
    }
}
