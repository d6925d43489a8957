//! Department and role data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use std::collections::HashMap;

use crate::server::model::org::{CreateDepartmentParams, CreateRoleParams, RoleWithRelations};

pub struct OrgRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrgRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_department(
        &self,
        params: CreateDepartmentParams,
    ) -> Result<entity::department::Model, DbErr> {
        entity::department::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_department_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::department::Model>, DbErr> {
        entity::prelude::Department::find_by_id(id).one(self.db).await
    }

    pub async fn get_all_departments(&self) -> Result<Vec<entity::department::Model>, DbErr> {
        entity::prelude::Department::find().all(self.db).await
    }

    /// Creates a role and its member rows.
    ///
    /// Member user ids must already be resolved; the join rows are inserted
    /// only after the role row exists.
    pub async fn create_role(
        &self,
        params: CreateRoleParams,
    ) -> Result<entity::role::Model, DbErr> {
        let role = entity::role::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            department_id: ActiveValue::Set(params.department_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for user_id in params.user_ids {
            entity::role_member::ActiveModel {
                role_id: ActiveValue::Set(role.id),
                user_id: ActiveValue::Set(user_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(role)
    }

    /// Gets a role by id with its department and member users loaded.
    pub async fn find_role_by_id(&self, id: i32) -> Result<Option<RoleWithRelations>, DbErr> {
        let Some((role, department)) = entity::prelude::Role::find_by_id(id)
            .find_also_related(entity::prelude::Department)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let department = department.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Department of role {} not found", role.id))
        })?;

        let member_rows = entity::prelude::RoleMember::find()
            .filter(entity::role_member::Column::RoleId.eq(role.id))
            .all(self.db)
            .await?;

        let user_ids: Vec<i32> = member_rows.iter().map(|row| row.user_id).collect();
        let users = if user_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(user_ids))
                .all(self.db)
                .await?
        };

        Ok(Some(RoleWithRelations {
            role,
            department,
            users,
        }))
    }

    /// Gets all roles with departments and member users loaded.
    ///
    /// Member users are fetched in one batched query and grouped per role.
    pub async fn get_all_roles(&self) -> Result<Vec<RoleWithRelations>, DbErr> {
        let roles = entity::prelude::Role::find()
            .find_also_related(entity::prelude::Department)
            .all(self.db)
            .await?;

        let role_ids: Vec<i32> = roles.iter().map(|(role, _)| role.id).collect();
        let member_rows = if role_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::RoleMember::find()
                .filter(entity::role_member::Column::RoleId.is_in(role_ids))
                .all(self.db)
                .await?
        };

        let user_ids: Vec<i32> = member_rows.iter().map(|row| row.user_id).collect();
        let users_map: HashMap<i32, entity::user::Model> = if user_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(user_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|user| (user.id, user))
                .collect()
        };

        let mut users_by_role: HashMap<i32, Vec<entity::user::Model>> = HashMap::new();
        for row in member_rows {
            if let Some(user) = users_map.get(&row.user_id) {
                users_by_role
                    .entry(row.role_id)
                    .or_default()
                    .push(user.clone());
            }
        }

        roles
            .into_iter()
            .map(|(role, department)| {
                let department = department.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Department of role {} not found", role.id))
                })?;
                let users = users_by_role.remove(&role.id).unwrap_or_default();

                Ok(RoleWithRelations {
                    role,
                    department,
                    users,
                })
            })
            .collect()
    }
}
