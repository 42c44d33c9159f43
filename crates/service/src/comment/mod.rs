//! Comment module: three-layer architecture (domain, repository, service).
//!
//! The repository trait is the storage port; the service owns the CRUD
//! business rules and never sees a transport encoding.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::CommentService;
