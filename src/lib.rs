//! # FitHub API
//!
//! HTTP backend for a fitness goods storefront, built with Axum and MongoDB:
//! signup/login with email verification, role-gated admin management of
//! users and products, catalog browsing with pagination/sort/filter, and
//! self-service profile/password management.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (database, JWT, email, CORS)
//! ├── middleware/       # Session-cookie auth and role gating
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Signup, email verification, login
//! │   ├── users/       # Profile management and admin user CRUD
//! │   ├── products/    # Catalog browsing and management
//! │   └── carts/       # Cart models (no endpoints yet)
//! ├── store/            # Document-store capability (MongoDB + in-memory fake)
//! └── utils/            # Shared utilities (errors, hashing, tokens, email)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Business logic
//! - `model.rs`: Data models and DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Authentication
//!
//! Logging in sets a signed session cookie named `token` (HttpOnly, Secure,
//! SameSite=Lax) valid for 24 hours. The token embeds the user's id and a
//! closed role enum (`user` / `administrator`); the `/admin` tree requires
//! the administrator role.
//!
//! ## Quick Start
//!
//! ```bash
//! MONGODB_URI=mongodb://localhost:27017
//! MONGODB_DATABASE=fithub
//! JWT_SECRET=your-secure-secret-key
//! SMTP_ENABLED=true
//! SMTP_HOST=smtp.example.com
//! BASE_URL=https://fithub.example.com
//! ```
//!
//! With the server running, interactive API documentation is served at
//! `/swagger-ui` and `/scalar`.
//!
//! ## Security Considerations
//!
//! - Passwords are hashed using bcrypt and never serialized to clients
//! - Verification tokens come from the OS entropy source
//! - The JWT secret should be cryptographically random
//! - Session validation is stateless and repeated on every request

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod utils;
pub mod validator;
