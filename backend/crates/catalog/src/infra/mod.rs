//! Infrastructure Layer
//!
//! Product store implementations.

pub mod memory;
pub mod postgres;
