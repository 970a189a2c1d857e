//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `chat`, `session`) so individual
//! components can depend on small focused models. `session` is the only
//! persisted piece; the rest lives in reactive signals provided via context.

pub mod auth;
pub mod chat;
pub mod session;
