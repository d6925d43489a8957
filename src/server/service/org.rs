use sea_orm::DatabaseConnection;

use crate::server::{
    data::org::OrgRepository,
    error::AppError,
    model::org::{CreateDepartmentParams, CreateRoleParams, Department, Role},
    service::resolve_users,
};

pub struct OrgService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrgService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_department(
        &self,
        params: CreateDepartmentParams,
    ) -> Result<Department, AppError> {
        let department = OrgRepository::new(self.db).create_department(params).await?;

        Ok(Department::from_entity(department))
    }

    pub async fn get_departments(&self) -> Result<Vec<Department>, AppError> {
        let departments = OrgRepository::new(self.db).get_all_departments().await?;

        Ok(departments
            .into_iter()
            .map(Department::from_entity)
            .collect())
    }

    /// Creates a role in a department with its initial member set.
    ///
    /// Resolves the department and every member id before any row is written.
    /// Duplicate member ids collapse to one membership.
    pub async fn create_role(&self, mut params: CreateRoleParams) -> Result<Role, AppError> {
        let repo = OrgRepository::new(self.db);

        if repo
            .find_department_by_id(params.department_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Department {} not found",
                params.department_id
            )));
        }

        params.user_ids.sort_unstable();
        params.user_ids.dedup();
        resolve_users(self.db, &params.user_ids).await?;

        let role = repo.create_role(params).await?;

        let full = repo
            .find_role_by_id(role.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Role not found after creation".to_string()))?;

        Ok(Role::from_with_relations(full))
    }

    pub async fn get_roles(&self) -> Result<Vec<Role>, AppError> {
        let roles = OrgRepository::new(self.db).get_all_roles().await?;

        Ok(roles.into_iter().map(Role::from_with_relations).collect())
    }
}
