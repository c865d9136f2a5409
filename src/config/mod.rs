//! Configuration modules for the fithub API.
//!
//! Each submodule handles a specific aspect of configuration, loaded from
//! environment variables with development-friendly defaults:
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: MongoDB connection initialization
//! - [`email`]: SMTP settings for verification mail
//! - [`jwt`]: session token signing secret and lifetime

pub mod cors;
pub mod database;
pub mod email;
pub mod jwt;
