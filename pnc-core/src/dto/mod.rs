//! Data Transfer Objects for the PNC REST API
//!
//! Request bodies, query parameters and response wrappers that are not
//! entities themselves.

pub mod page;
pub mod project;
pub mod scm_repository;
