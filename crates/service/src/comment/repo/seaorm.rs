use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

use crate::comment::domain::{Comment, CommentDraft};
use crate::comment::repository::CommentRepository;
use crate::errors::ServiceError;
use models::comment::{self, Entity as CommentEntity};

/// Production repository backed by the relational store. Each call executes
/// as a single statement; transactional guarantees come from the database.
pub struct SeaOrmCommentRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl CommentRepository for SeaOrmCommentRepository {
    async fn insert(&self, draft: &CommentDraft) -> Result<Comment, ServiceError> {
        let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
        let am = comment::ActiveModel {
            slug: Set(draft.slug.clone()),
            body: Set(draft.body.clone()),
            author: Set(draft.author.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(|e| ServiceError::Storage(e.to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, ServiceError> {
        CommentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Comment>, ServiceError> {
        CommentEntity::find()
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }

    async fn update(&self, id: i64, draft: &CommentDraft) -> Result<Option<Comment>, ServiceError> {
        let existing = CommentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let Some(existing) = existing else { return Ok(None) };

        // Full replace of the mutable fields; created_at stays untouched.
        let mut am: comment::ActiveModel = existing.into();
        am.slug = Set(draft.slug.clone());
        am.body = Set(draft.body.clone());
        am.author = Set(draft.author.clone());
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&self.db).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = CommentEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
