//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for every marketplace service:
//! - Password hashing (Argon2id)
//! - Identity tokens (HS256 JWT)
//! - Side cache port with Redis and in-memory adapters
//! - Outbound HTTP client construction
//! - Trusted `X-User-ID` identity header and JSON body extractor
//! - Tracing subscriber setup and request-id propagation
//! - Environment configuration helpers

pub mod cache;
pub mod config;
pub mod extract;
pub mod http;
pub mod identity;
pub mod password;
pub mod telemetry;
pub mod token;
