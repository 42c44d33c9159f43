use async_trait::async_trait;

use super::domain::{Comment, CommentDraft};
use crate::errors::ServiceError;

/// Repository abstraction for comment persistence (the storage port).
///
/// "No such row" is conveyed structurally (`None` / `false`), never as an
/// error, so callers can tell a miss apart from a storage failure.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, draft: &CommentDraft) -> Result<Comment, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, ServiceError>;
    /// Returns all comments in a stable order (ascending id).
    async fn find_all(&self) -> Result<Vec<Comment>, ServiceError>;
    async fn update(&self, id: i64, draft: &CommentDraft) -> Result<Option<Comment>, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use sea_orm::prelude::DateTimeWithTimeZone;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCommentRepository {
        inner: Mutex<Inner>,
    }

    #[derive(Default)]
    struct Inner {
        rows: BTreeMap<i64, Comment>,
        // Monotonic; ids of deleted rows are never handed out again.
        next_id: i64,
    }

    fn now() -> DateTimeWithTimeZone {
        chrono::Utc::now().into()
    }

    #[async_trait]
    impl CommentRepository for MockCommentRepository {
        async fn insert(&self, draft: &CommentDraft) -> Result<Comment, ServiceError> {
            let mut inner = self.inner.lock().unwrap();
            inner.next_id += 1;
            let ts = now();
            let comment = Comment {
                id: inner.next_id,
                slug: draft.slug.clone(),
                body: draft.body.clone(),
                author: draft.author.clone(),
                created_at: ts,
                updated_at: ts,
            };
            inner.rows.insert(comment.id, comment.clone());
            Ok(comment)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, ServiceError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.rows.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Comment>, ServiceError> {
            let inner = self.inner.lock().unwrap();
            Ok(inner.rows.values().cloned().collect())
        }

        async fn update(&self, id: i64, draft: &CommentDraft) -> Result<Option<Comment>, ServiceError> {
            let mut inner = self.inner.lock().unwrap();
            let Some(existing) = inner.rows.get_mut(&id) else { return Ok(None) };
            existing.slug = draft.slug.clone();
            existing.body = draft.body.clone();
            existing.author = draft.author.clone();
            existing.updated_at = now();
            Ok(Some(existing.clone()))
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            let mut inner = self.inner.lock().unwrap();
            Ok(inner.rows.remove(&id).is_some())
        }
    }
}
