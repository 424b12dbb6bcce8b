//! Networking modules for the contact endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single outbound call of the contact flow and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
