use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::sea_orm_entity::refresh_tokens::{self, Column, Entity, Model};
use crate::auth::application::domain::entities::RefreshToken;
use crate::auth::application::ports::outgoing::refresh_token_repository::{
    NewRefreshToken, RefreshTokenRepository, RefreshTokenRepositoryError,
};

#[derive(Clone, Debug)]
pub struct RefreshTokenRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RefreshTokenRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_token(model: Model) -> RefreshToken {
    RefreshToken {
        id: model.id,
        user_id: model.user_id,
        token: model.token,
        expires_at: model.expires_at.with_timezone(&chrono::Utc),
        created_at: model.created_at.with_timezone(&chrono::Utc),
    }
}

fn map_db_err(err: sea_orm::DbErr) -> RefreshTokenRepositoryError {
    RefreshTokenRepositoryError::DatabaseError(err.to_string())
}

#[async_trait]
impl RefreshTokenRepository for RefreshTokenRepositoryPostgres {
    async fn store(&self, token: NewRefreshToken) -> Result<(), RefreshTokenRepositoryError> {
        let active = refresh_tokens::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(token.user_id),
            token: Set(token.token),
            expires_at: Set(token.expires_at.into()),
            created_at: Set(Utc::now().into()),
        };

        active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(())
    }

    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<RefreshToken>, RefreshTokenRepositoryError> {
        let row = Entity::find()
            .filter(Column::Token.eq(token))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_token))
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, RefreshTokenRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Token.eq(token))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_for_user(&self, user_id: Uuid) -> Result<(), RefreshTokenRepositoryError> {
        Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn delete_expired_for_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<(), RefreshTokenRepositoryError> {
        Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ExpiresAt.lte(now))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}
