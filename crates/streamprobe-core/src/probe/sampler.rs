//! Frame sampling over an open media source
//!
//! A "frame" here is one bounded read from the stream transport. The sampler
//! records wall-clock elapsed time for each successful read and a bare drop
//! for each failed one. Sampling always performs the requested number of
//! attempts; a failed read never terminates the pass.

use std::io::Read;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Upper bound on the bytes pulled per frame-read attempt
pub const FRAME_CHUNK_BYTES: usize = 64 * 1024;

/// Errors that prevent a media source from being opened
#[derive(Error, Debug)]
pub enum OpenError {
    #[error("invalid media URL: {0}")]
    InvalidUrl(String),

    #[error("connection timed out")]
    Timeout,

    #[error("connection refused: {0}")]
    Refused(String),

    #[error("server rejected the stream: HTTP {0}")]
    HttpStatus(u16),

    #[error("transport error: {0}")]
    Transport(String),
}

/// A single frame-read failure. Recovered by the caller as a drop.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("end of stream")]
    EndOfStream,

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The outcome of one frame-read attempt
///
/// Immutable once produced. `elapsed` is recorded only for successful reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSample {
    succeeded: bool,
    elapsed: Option<Duration>,
}

impl FrameSample {
    /// A successful read that took `elapsed` of wall-clock time
    pub fn success(elapsed: Duration) -> Self {
        Self {
            succeeded: true,
            elapsed: Some(elapsed),
        }
    }

    /// A failed read. No timing is recorded for drops.
    pub fn dropped() -> Self {
        Self {
            succeeded: false,
            elapsed: None,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Elapsed wall-clock time, present iff the read succeeded
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }
}

/// An open handle to a remote stream
///
/// A source is owned exclusively by the probe that opened it and is released
/// by its `Drop` impl, exactly once, on every exit path.
pub trait MediaSource {
    /// Attempt to retrieve one frame. Returns the number of bytes pulled.
    fn read_frame(&mut self) -> Result<usize, ReadError>;
}

/// Opens media sources by URL
pub trait FrameSampler {
    type Source: MediaSource;

    /// Establish a readable connection to `url`.
    ///
    /// Must not block indefinitely; implementations apply a connect timeout
    /// and report `OpenError` on timeout or refusal.
    fn open(&self, url: &str) -> Result<Self::Source, OpenError>;
}

/// Perform exactly `count` sequential read attempts against `source`.
///
/// Reads are strictly sequential so frame order and timing reflect real
/// delivery. The source is not released here; that is the caller's scope.
pub fn sample<S: MediaSource>(source: &mut S, count: u32) -> Vec<FrameSample> {
    let mut samples = Vec::with_capacity(count as usize);
    for attempt in 0..count {
        let start = Instant::now();
        match source.read_frame() {
            Ok(bytes) => {
                let elapsed = start.elapsed();
                tracing::trace!(attempt, bytes, ?elapsed, "frame read ok");
                samples.push(FrameSample::success(elapsed));
            }
            Err(err) => {
                tracing::trace!(attempt, %err, "frame read failed");
                samples.push(FrameSample::dropped());
            }
        }
    }
    samples
}

/// Production sampler over a blocking HTTP client
///
/// The connect timeout bounds `open`; the read timeout bounds the total I/O
/// of one probe's frame reads, so a stalled stream degrades into drops
/// instead of hanging the request.
pub struct HttpFrameSampler {
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl HttpFrameSampler {
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            read_timeout,
        }
    }
}

impl FrameSampler for HttpFrameSampler {
    type Source = HttpMediaSource;

    fn open(&self, url: &str) -> Result<Self::Source, OpenError> {
        let parsed =
            reqwest::Url::parse(url).map_err(|e| OpenError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(OpenError::InvalidUrl(format!(
                "unsupported scheme: {}",
                parsed.scheme()
            )));
        }

        // The blocking client may not be created or dropped inside an async
        // runtime; one client per probe keeps its lifetime inside the
        // probe's own blocking scope.
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.read_timeout)
            .build()
            .map_err(|e| OpenError::Transport(e.to_string()))?;

        let response = client.get(parsed).send().map_err(|e| {
            if e.is_timeout() {
                OpenError::Timeout
            } else if e.is_connect() {
                OpenError::Refused(e.to_string())
            } else {
                OpenError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OpenError::HttpStatus(status.as_u16()));
        }

        Ok(HttpMediaSource {
            _client: client,
            response,
            buf: vec![0u8; FRAME_CHUNK_BYTES].into_boxed_slice(),
        })
    }
}

/// An open HTTP stream. The connection is released when this is dropped.
pub struct HttpMediaSource {
    // Owns the transport for the life of the response
    _client: reqwest::blocking::Client,
    response: reqwest::blocking::Response,
    buf: Box<[u8]>,
}

impl MediaSource for HttpMediaSource {
    fn read_frame(&mut self) -> Result<usize, ReadError> {
        match self.response.read(&mut self.buf) {
            Ok(0) => Err(ReadError::EndOfStream),
            Ok(n) => Ok(n),
            Err(e) => Err(ReadError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted source: each entry is Some(bytes) for a success or None for
    /// a failure; reads past the script fail with EndOfStream.
    struct ScriptedSource {
        script: Vec<Option<usize>>,
        next: usize,
    }

    impl ScriptedSource {
        fn new(script: Vec<Option<usize>>) -> Self {
            Self { script, next: 0 }
        }
    }

    impl MediaSource for ScriptedSource {
        fn read_frame(&mut self) -> Result<usize, ReadError> {
            let outcome = self.script.get(self.next).copied().flatten();
            self.next += 1;
            outcome.ok_or(ReadError::EndOfStream)
        }
    }

    #[test]
    fn test_sample_performs_all_attempts() {
        let mut source = ScriptedSource::new(vec![]);
        let samples = sample(&mut source, 10);
        assert_eq!(samples.len(), 10);
        assert!(samples.iter().all(|s| !s.succeeded()));
    }

    #[test]
    fn test_failed_read_does_not_terminate_sampling() {
        let mut source = ScriptedSource::new(vec![
            Some(1024),
            None,
            Some(1024),
            None,
            Some(1024),
        ]);
        let samples = sample(&mut source, 5);
        assert_eq!(samples.len(), 5);
        let outcomes: Vec<bool> = samples.iter().map(|s| s.succeeded()).collect();
        assert_eq!(outcomes, vec![true, false, true, false, true]);
    }

    #[test]
    fn test_timing_recorded_only_on_success() {
        let mut source = ScriptedSource::new(vec![Some(512), None]);
        let samples = sample(&mut source, 2);
        assert!(samples[0].elapsed().is_some());
        assert!(samples[1].elapsed().is_none());
    }

    #[test]
    fn test_sample_zero_count_is_empty() {
        let mut source = ScriptedSource::new(vec![Some(512)]);
        let samples = sample(&mut source, 0);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_frame_sample_constructors() {
        let ok = FrameSample::success(Duration::from_millis(10));
        assert!(ok.succeeded());
        assert_eq!(ok.elapsed(), Some(Duration::from_millis(10)));

        let dropped = FrameSample::dropped();
        assert!(!dropped.succeeded());
        assert_eq!(dropped.elapsed(), None);
    }

    #[test]
    fn test_open_rejects_non_http_scheme() {
        let sampler =
            HttpFrameSampler::new(Duration::from_millis(100), Duration::from_millis(100));
        match sampler.open("bad://url") {
            Err(OpenError::InvalidUrl(_)) => {}
            other => panic!("expected InvalidUrl, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_open_rejects_unparseable_url() {
        let sampler =
            HttpFrameSampler::new(Duration::from_millis(100), Duration::from_millis(100));
        assert!(matches!(
            sampler.open("not a url at all"),
            Err(OpenError::InvalidUrl(_))
        ));
    }
}
