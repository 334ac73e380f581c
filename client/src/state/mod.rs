//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session token is the only client state that outlives a page; it lives
//! behind the `session` store so pages and the guard never touch storage
//! directly.

pub mod session;
