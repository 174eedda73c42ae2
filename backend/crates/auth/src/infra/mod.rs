//! Infrastructure Layer
//!
//! User store implementations.

pub mod memory;
pub mod postgres;
