//! Networking modules for the HTTP boundary with the server.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST call behind the greeting form and `types` defines
//! the shared wire schema.

pub mod api;
pub mod types;
