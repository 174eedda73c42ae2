//! Infrastructure Layer
//!
//! Order store and event log adapters.

pub mod events;
pub mod memory;
pub mod postgres;
