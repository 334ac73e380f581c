//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the shared client and its default headers, `api` wraps the
//! auth backend's endpoints, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
