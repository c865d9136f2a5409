//! Middleware modules for request processing.
//!
//! - [`auth`]: session-cookie extractor yielding the caller's claims
//! - [`role`]: allow-list role gating built on top of it
//!
//! # Authentication flow
//!
//! 1. Client logs in and receives the `token` cookie
//! 2. [`auth::AuthUser`] validates the cookie's signature and expiry
//! 3. [`role::require_roles`] checks the typed role claim against the
//!    route's allow-list
//! 4. Handler executes if all checks pass

pub mod auth;
pub mod role;
