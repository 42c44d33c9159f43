use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument};

use super::domain::{Comment, CommentDraft};
use super::repository::CommentRepository;
use crate::errors::ServiceError;

/// Upper bound for a single storage call; an operation that exceeds it fails
/// with `ServiceError::Timeout` instead of hanging the request.
pub const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(10);

/// Comment business service independent of web framework. Holds no state
/// beyond the injected repository; concurrent use is safe.
pub struct CommentService {
    repo: Arc<dyn CommentRepository>,
    op_timeout: Duration,
}

impl CommentService {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self::with_timeout(repo, DEFAULT_OP_TIMEOUT)
    }

    pub fn with_timeout(repo: Arc<dyn CommentRepository>, op_timeout: Duration) -> Self {
        Self { repo, op_timeout }
    }

    fn validate_draft(draft: &CommentDraft) -> Result<(), ServiceError> {
        match models::comment::validate_body(&draft.body) {
            Ok(()) => Ok(()),
            Err(models::errors::ModelError::Validation(msg)) => Err(ServiceError::Validation(msg)),
        }
    }

    async fn bounded<T>(
        &self,
        fut: impl Future<Output = Result<T, ServiceError>>,
    ) -> Result<T, ServiceError> {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(res) => res,
            Err(_) => Err(ServiceError::Timeout),
        }
    }

    /// Fetch a single comment by id.
    #[instrument(skip(self))]
    pub async fn get_comment(&self, id: i64) -> Result<Comment, ServiceError> {
        self.bounded(self.repo.find_by_id(id))
            .await?
            .ok_or_else(|| ServiceError::not_found("comment"))
    }

    /// Fetch every comment; an empty store yields an empty list.
    #[instrument(skip(self))]
    pub async fn get_all_comments(&self) -> Result<Vec<Comment>, ServiceError> {
        self.bounded(self.repo.find_all()).await
    }

    /// Validate and persist a new comment; the store assigns id and timestamps.
    #[instrument(skip(self, draft), fields(slug = %draft.slug))]
    pub async fn post_comment(&self, draft: CommentDraft) -> Result<Comment, ServiceError> {
        Self::validate_draft(&draft)?;
        let created = self.bounded(self.repo.insert(&draft)).await?;
        info!(id = created.id, slug = %created.slug, "comment_created");
        Ok(created)
    }

    /// Replace all mutable fields of an existing comment wholesale.
    #[instrument(skip(self, draft), fields(slug = %draft.slug))]
    pub async fn update_comment(&self, id: i64, draft: CommentDraft) -> Result<Comment, ServiceError> {
        Self::validate_draft(&draft)?;
        let updated = self
            .bounded(self.repo.update(id, &draft))
            .await?
            .ok_or_else(|| ServiceError::not_found("comment"))?;
        info!(id = updated.id, "comment_updated");
        Ok(updated)
    }

    /// Permanently remove a comment.
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, id: i64) -> Result<(), ServiceError> {
        let deleted = self.bounded(self.repo.delete(id)).await?;
        if !deleted {
            return Err(ServiceError::not_found("comment"));
        }
        info!(id, "comment_deleted");
        Ok(())
    }
}
