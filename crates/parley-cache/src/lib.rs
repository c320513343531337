//! # Parley Cache
//!
//! Redis-based caching utilities for the Parley API.
//!
//! This crate provides:
//! - Redis connection management
//! - Cache operations (get, set with TTL, get-or-compute, invalidate)
//! - Cache configuration from environment variables
//! - Well-known cache key definitions
//!
//! # Example
//!
//! ```ignore
//! use parley_cache::{CacheConfig, RedisCache};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = CacheConfig::from_env();
//!     let cache = RedisCache::new(&config.redis_url).await.unwrap();
//!
//!     // Get a value, computing and storing it on a miss
//!     let value: MyType = cache
//!         .get_or_compute("key", Duration::from_secs(300), || async { load().await })
//!         .await;
//! }
//! ```

pub mod config;
pub mod keys;
pub mod redis;

pub use config::CacheConfig;
pub use redis::{CacheError, RedisCache};
