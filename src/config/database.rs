//! Database configuration and connection pool initialization.
//!
//! The connection URL is read from the `DATABASE_URL` environment variable.
//!
//! # Panics
//!
//! [`init_db_pool`] panics if `DATABASE_URL` is unset or the connection
//! cannot be established. It is called once at startup; everything after
//! that shares the pool through [`AppState`](crate::state::AppState).

use sqlx::PgPool;
use std::env;

/// Initializes a PostgreSQL connection pool.
///
/// The returned [`PgPool`] is cheaply cloneable and shared across async
/// tasks via the application state.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
