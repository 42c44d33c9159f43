use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;

/// Persisted comment row. Ids are storage-assigned, positive and never
/// reused; timestamps are set by the writing side, never by clients.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub slug: String,
    pub body: String,
    pub author: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A comment with empty content is not a well-formed comment.
pub fn validate_body(body: &str) -> Result<(), errors::ModelError> {
    if body.trim().is_empty() {
        return Err(errors::ModelError::Validation("comment body must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_rejected() {
        assert!(validate_body("").is_err());
        assert!(validate_body("   \n\t").is_err());
    }

    #[test]
    fn non_empty_body_accepted() {
        assert!(validate_body("nice post").is_ok());
    }
}
