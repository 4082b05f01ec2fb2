use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::sea_orm_entity::users::{self, Column, Entity, Model};
use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::user_repository::{
    NewUser, UserPatch, UserRepository, UserRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_user(model: Model) -> Result<User, UserRepositoryError> {
    let role = UserRole::from_str(&model.role).map_err(UserRepositoryError::DatabaseError)?;
    Ok(User {
        id: model.id,
        email: model.email,
        name: model.name,
        password_hash: model.password_hash,
        role,
        is_active: model.is_active,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    })
}

fn map_insert_error(err: sea_orm::DbErr) -> UserRepositoryError {
    let msg = err.to_string();
    let lowered = msg.to_lowercase();
    if lowered.contains("duplicate") || lowered.contains("unique") || lowered.contains("23505") {
        UserRepositoryError::UserAlreadyExists
    } else {
        UserRepositoryError::DatabaseError(msg)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let now = Utc::now();
        let active = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(user.email),
            name: Set(user.name),
            password_hash: Set(user.password_hash),
            role: Set(user.role.as_str().to_string()),
            is_active: Set(true),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let model = active.insert(&*self.db).await.map_err(map_insert_error)?;
        model_to_user(model)
    }

    async fn update_user(
        &self,
        user_id: Uuid,
        patch: UserPatch,
    ) -> Result<User, UserRepositoryError> {
        let model = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active: users::ActiveModel = model.into();
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(role) = patch.role {
            active.role = Set(role.as_str().to_string());
        }
        if let Some(is_active) = patch.is_active {
            active.is_active = Set(is_active);
        }

        let updated = active.update(&*self.db).await.map_err(map_insert_error)?;
        model_to_user(updated)
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let result = Entity::update_many()
            .col_expr(
                Column::PasswordHash,
                sea_orm::sea_query::Expr::value(new_password_hash),
            )
            .col_expr(
                Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(Column::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}
