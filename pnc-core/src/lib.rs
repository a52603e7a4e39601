//! PNC Core
//!
//! Data types exchanged with the PNC build-orchestration REST API.
//!
//! This crate contains:
//! - Domain types: the entities the API serves (Project, ScmRepository, etc.)
//! - DTOs: request and response wrappers (create requests, pages, patches)

pub mod domain;
pub mod dto;
