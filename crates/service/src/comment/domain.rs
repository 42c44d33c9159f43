use serde::{Deserialize, Serialize};

/// Stored comment (business view). The entity model doubles as the domain
/// type since it carries no persistence-only fields.
pub type Comment = models::comment::Model;

/// Client-submitted comment payload prior to id/timestamp assignment.
/// Extra fields (id, timestamps) in an incoming body are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDraft {
    pub slug: String,
    pub body: String,
    pub author: String,
}
