//! Streamprobe Core - Stream probing, quality aggregation, and simulation
//!
//! This library provides the core functionality for probing remote video
//! streams. It opens a media source, pulls a bounded sample of frames under
//! timing instrumentation, classifies reachability, and reduces the sample
//! into a latency/drop report.

pub mod probe;
pub mod resolve;
pub mod simulate;

pub use probe::aggregate::QualityStats;
pub use probe::classify::Reachability;
pub use probe::engine::{ProbeConfig, ProbeEngine, ProbeReport};
pub use probe::sampler::{FrameSample, FrameSampler, HttpFrameSampler, MediaSource};

use std::time::Duration;

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of frame-read attempts per probe
pub const DEFAULT_TOTAL_FRAMES: u32 = 30;

/// Default connect/open timeout for a media source
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default bound on the I/O performed by one probe's frame reads
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);
