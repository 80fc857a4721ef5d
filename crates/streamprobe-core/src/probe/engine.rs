//! Probe engine orchestration
//!
//! Owns the lifecycle of one probe: open, sample, classify, aggregate,
//! release. Open failure is a normal outcome (Offline), never an error to
//! the caller; a read fault is one more drop, never an abort.

use std::time::Duration;

use super::aggregate::aggregate;
use super::classify::{classify, Reachability};
use super::sampler::{sample, FrameSampler, HttpFrameSampler};
use crate::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT, DEFAULT_TOTAL_FRAMES};

/// Probe configuration, injected at construction. No ambient globals.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Bound on establishing the connection
    pub connect_timeout: Duration,
    /// Bound on the total I/O of one probe's frame reads
    pub read_timeout: Duration,
    /// Frame-read attempts per probe unless overridden per call
    pub total_frames: u32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            total_frames: DEFAULT_TOTAL_FRAMES,
        }
    }
}

/// Final output of one probe
///
/// `average_latency` and `drop_count` are `Some` iff the stream was Online;
/// their absence is itself the Offline signal, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport {
    pub status: Reachability,
    pub average_latency: Option<Duration>,
    pub drop_count: Option<u32>,
}

impl ProbeReport {
    /// Report for a source that could not be opened. No sampling occurred.
    pub fn offline() -> Self {
        Self {
            status: Reachability::Offline,
            average_latency: None,
            drop_count: None,
        }
    }

    pub fn is_online(&self) -> bool {
        self.status == Reachability::Online
    }
}

/// Orchestrates probes over a frame sampler
///
/// Generic over the sampler so tests can inject scripted sources. Each call
/// to [`probe`](Self::probe) is one complete, synchronous, single-flow pass;
/// the engine holds no per-probe state between calls.
pub struct ProbeEngine<S: FrameSampler> {
    sampler: S,
    config: ProbeConfig,
}

impl<S: FrameSampler> ProbeEngine<S> {
    pub fn new(sampler: S, config: ProbeConfig) -> Self {
        Self { sampler, config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Probe `url` with the configured frame count.
    pub fn probe(&self, url: &str) -> ProbeReport {
        self.probe_with_frames(url, self.config.total_frames)
    }

    /// Probe `url`, pulling exactly `total_frames` frame-read attempts.
    ///
    /// The source is released when it leaves this scope, exactly once, on
    /// every exit path.
    pub fn probe_with_frames(&self, url: &str, total_frames: u32) -> ProbeReport {
        let open_result = self.sampler.open(url);
        let status = classify(&open_result);

        let mut source = match open_result {
            Ok(source) => source,
            Err(err) => {
                tracing::debug!(url, %err, "media source open failed");
                return ProbeReport::offline();
            }
        };

        let samples = sample(&mut source, total_frames);
        let stats = aggregate(&samples);
        drop(source);

        tracing::debug!(
            url,
            %status,
            total_frames,
            drop_count = stats.drop_count,
            average_latency = ?stats.average_latency,
            "probe complete"
        );

        ProbeReport {
            status,
            average_latency: Some(stats.average_latency),
            drop_count: Some(stats.drop_count),
        }
    }
}

impl ProbeEngine<HttpFrameSampler> {
    /// Engine over the production HTTP sampler.
    pub fn with_http(config: ProbeConfig) -> Self {
        let sampler = HttpFrameSampler::new(config.connect_timeout, config.read_timeout);
        Self::new(sampler, config)
    }
}
