pub mod comment;
pub mod db;
pub mod errors;
