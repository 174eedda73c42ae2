//! Infrastructure Layer
//!
//! Cart store and peer-service adapters.

pub mod http;
pub mod memory;
pub mod postgres;
