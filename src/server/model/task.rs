use chrono::{DateTime, Utc};

use crate::{
    model::task::{CreateTaskDto, TaskDto},
    server::model::user::User,
};

/// Task with its assignee resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub assigned_to: User,
    pub completed: bool,
}

impl Task {
    pub fn from_entity(task: entity::task::Model, assignee: entity::user::Model) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            assigned_to: User::from_entity(assignee),
            completed: task.completed,
        }
    }

    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            assigned_to: self.assigned_to.into_dto(),
            completed: self.completed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTaskParams {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub assigned_to: i32,
}

impl CreateTaskParams {
    pub fn from_dto(dto: CreateTaskDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            due_date: dto.due_date,
            assigned_to: dto.assigned_to,
        }
    }
}
