//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access behind a repository trait.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod comment;
pub mod errors;
