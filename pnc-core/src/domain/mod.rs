//! Core domain types
//!
//! This module contains the entities served by the PNC REST API. They are
//! owned by the server; the CLI only builds them from arguments or passes
//! them through unmodified.
//!
//! Every type keeps the fields it does not model in an `extra` map so that an
//! object read from the server can be written back or printed without loss.

pub mod build;
pub mod build_config;
pub mod project;
pub mod scm_repository;

/// References to other entities embedded in a parent object, keyed by ID
pub type EntityRefs = std::collections::BTreeMap<String, serde_json::Value>;
