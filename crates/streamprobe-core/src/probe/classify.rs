//! Reachability classification
//!
//! Online/Offline is derived solely from the open result. Later frame-level
//! failures never revise it: a source that opens but drops every frame is
//! still Online.

use std::fmt;

use serde::Serialize;

use super::sampler::OpenError;

/// Binary reachability of a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Reachability {
    Online,
    Offline,
}

impl fmt::Display for Reachability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reachability::Online => write!(f, "Online"),
            Reachability::Offline => write!(f, "Offline"),
        }
    }
}

/// Classify an open result. Pure function.
pub fn classify<S>(open_result: &Result<S, OpenError>) -> Reachability {
    match open_result {
        Ok(_) => Reachability::Online,
        Err(_) => Reachability::Offline,
    }
}
