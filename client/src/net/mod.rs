//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP transport and auth endpoint helpers; `types` defines
//! the shared wire schema.

pub mod api;
pub mod types;
