//! Request-gating middleware.
//!
//! - [`auth`]: bearer-token extractor
//! - [`role`]: role-based authorization
//! - [`maintenance`]: maintenance-mode access-control gate
//! - [`ban`]: ban enforcement
//! - [`activity`]: user-activity timestamping

pub mod activity;
pub mod auth;
pub mod ban;
pub mod maintenance;
pub mod role;
