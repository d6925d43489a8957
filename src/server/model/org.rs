//! Department and role domain models and parameters.

use crate::{
    model::org::{CreateDepartmentDto, CreateRoleDto, DepartmentDto, RoleDto},
    server::model::user::User,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl Department {
    pub fn from_entity(entity: entity::department::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> DepartmentDto {
        DepartmentDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDepartmentParams {
    pub name: String,
    pub description: String,
}

impl CreateDepartmentParams {
    pub fn from_dto(dto: CreateDepartmentDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

/// Role entity with its department and member users loaded.
#[derive(Debug, Clone)]
pub struct RoleWithRelations {
    pub role: entity::role::Model,
    pub department: entity::department::Model,
    pub users: Vec<entity::user::Model>,
}

/// Role with its department and member set resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub department: Department,
    pub users: Vec<User>,
}

impl Role {
    pub fn from_with_relations(data: RoleWithRelations) -> Self {
        Self {
            id: data.role.id,
            name: data.role.name,
            description: data.role.description,
            department: Department::from_entity(data.department),
            users: data.users.into_iter().map(User::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            id: self.id,
            name: self.name,
            description: self.description,
            department: self.department.into_dto(),
            users: self.users.into_iter().map(User::into_dto).collect(),
        }
    }
}

/// Parameters for creating a role with its initial member set.
#[derive(Debug, Clone)]
pub struct CreateRoleParams {
    pub name: String,
    pub description: String,
    pub department_id: i32,
    pub user_ids: Vec<i32>,
}

impl CreateRoleParams {
    pub fn from_dto(dto: CreateRoleDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            department_id: dto.department_id,
            user_ids: dto.user_ids,
        }
    }
}
