use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_department(
    db: &DatabaseConnection,
) -> Result<entity::department::Model, DbErr> {
    entity::department::ActiveModel {
        name: ActiveValue::Set(format!("Department {}", next_id())),
        description: ActiveValue::Set(String::new()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_role(
    db: &DatabaseConnection,
    department_id: i32,
) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        name: ActiveValue::Set(format!("Role {}", next_id())),
        description: ActiveValue::Set(String::new()),
        department_id: ActiveValue::Set(department_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_role_member(
    db: &DatabaseConnection,
    role_id: i32,
    user_id: i32,
) -> Result<entity::role_member::Model, DbErr> {
    entity::role_member::ActiveModel {
        role_id: ActiveValue::Set(role_id),
        user_id: ActiveValue::Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
