//! MongoDB connection initialization.
//!
//! The connection string is read from `MONGODB_URI` and the database name
//! from `MONGODB_DATABASE`. Startup pings the server so an unreachable
//! store aborts the process instead of failing on the first request.

use mongodb::bson::doc;
use mongodb::{Client, Database};
use std::env;

/// # Panics
///
/// Panics if the client cannot be constructed or the server does not answer
/// a ping. This is called once during startup; a dead store is fatal.
pub async fn init_database() -> Database {
    let uri = env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let name = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "fithub".to_string());

    let client = Client::with_uri_str(&uri)
        .await
        .expect("Failed to connect to MongoDB");
    let database = client.database(&name);

    database
        .run_command(doc! { "ping": 1 })
        .await
        .expect("MongoDB is unreachable");

    database
}
