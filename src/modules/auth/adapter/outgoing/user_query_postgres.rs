use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use super::sea_orm_entity::users::{Column, Entity, Model};
use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::user_query::{UserPage, UserQuery, UserQueryError};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_user(model: Model) -> Result<User, UserQueryError> {
    let role = UserRole::from_str(&model.role).map_err(UserQueryError::DatabaseError)?;
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

fn map_db_err(err: sea_orm::DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(err.to_string())
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let user = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        user.map(model_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let user = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        user.map(model_to_user).transpose()
    }

    async fn list(&self, page: u32, limit: u32) -> Result<UserPage, UserQueryError> {
        let total = Entity::find().count(&*self.db).await.map_err(map_db_err)?;

        let offset = u64::from(page.saturating_sub(1)) * u64::from(limit);
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .offset(offset)
            .limit(u64::from(limit))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = models
            .into_iter()
            .map(model_to_user)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(UserPage {
            items,
            page,
            limit,
            total,
        })
    }
}
