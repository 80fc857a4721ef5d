//! Stream-probe engine
//!
//! One probe is a single open -> sample -> aggregate -> release pass over a
//! directly playable media URL.

pub mod aggregate;
pub mod classify;
pub mod engine;
pub mod sampler;
