//! Utility modules for the Parley API.
//!
//! This module contains shared utilities used throughout the application:
//!
//! - [`client_ip`]: Client IP resolution from forwarding headers
//! - [`errors`]: Application error types and handling
//! - [`jwt`]: JWT token creation and verification
//! - [`response`]: JSON response envelope types

pub mod client_ip;
pub mod errors;
pub mod jwt;
pub mod response;
