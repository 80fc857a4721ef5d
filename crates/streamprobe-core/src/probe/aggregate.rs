//! Quality aggregation
//!
//! Reduces a frame-sample sequence into latency and drop statistics. The
//! reduction is total over any sequence length and order-invariant (mean and
//! count do not depend on attempt order).

use std::time::Duration;

use super::sampler::FrameSample;

/// Aggregate quality statistics over one sampling pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QualityStats {
    /// Arithmetic mean latency over successful samples; zero when none succeeded
    pub average_latency: Duration,
    /// Number of failed frame-read attempts
    pub drop_count: u32,
}

/// Reduce `samples` into quality statistics.
///
/// An empty slice yields zero latency and zero drops rather than an error.
pub fn aggregate(samples: &[FrameSample]) -> QualityStats {
    let mut total = Duration::ZERO;
    let mut successes: u32 = 0;
    let mut drops: u32 = 0;

    for sample in samples {
        match sample.elapsed() {
            Some(elapsed) => {
                total += elapsed;
                successes += 1;
            }
            None => drops += 1,
        }
    }

    let average_latency = if successes == 0 {
        Duration::ZERO
    } else {
        total / successes
    };

    QualityStats {
        average_latency,
        drop_count: drops,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn successes(elapsed: Duration, count: usize) -> Vec<FrameSample> {
        vec![FrameSample::success(elapsed); count]
    }

    #[test]
    fn test_empty_sequence_yields_zeroes() {
        let stats = aggregate(&[]);
        assert_eq!(stats.average_latency, Duration::ZERO);
        assert_eq!(stats.drop_count, 0);
    }

    #[test]
    fn test_all_successes() {
        // 30 reads at 10ms each
        let samples = successes(Duration::from_millis(10), 30);
        let stats = aggregate(&samples);
        assert_eq!(stats.average_latency, Duration::from_millis(10));
        assert_eq!(stats.drop_count, 0);
    }

    #[test]
    fn test_alternating_success_and_drop() {
        // 15 successes at 20ms interleaved with 15 drops
        let mut samples = Vec::new();
        for _ in 0..15 {
            samples.push(FrameSample::success(Duration::from_millis(20)));
            samples.push(FrameSample::dropped());
        }
        let stats = aggregate(&samples);
        assert_eq!(stats.average_latency, Duration::from_millis(20));
        assert_eq!(stats.drop_count, 15);
    }

    #[test]
    fn test_all_drops_yields_zero_latency() {
        let samples = vec![FrameSample::dropped(); 10];
        let stats = aggregate(&samples);
        assert_eq!(stats.average_latency, Duration::ZERO);
        assert_eq!(stats.drop_count, 10);
    }

    #[test]
    fn test_mean_over_mixed_latencies() {
        let samples = vec![
            FrameSample::success(Duration::from_millis(10)),
            FrameSample::success(Duration::from_millis(20)),
            FrameSample::success(Duration::from_millis(30)),
            FrameSample::dropped(),
            FrameSample::dropped(),
        ];
        let stats = aggregate(&samples);
        assert_eq!(stats.average_latency, Duration::from_millis(20));
        assert_eq!(stats.drop_count, 2);
    }

    #[test]
    fn test_aggregation_is_order_invariant() {
        let mut samples = vec![
            FrameSample::success(Duration::from_millis(5)),
            FrameSample::dropped(),
            FrameSample::success(Duration::from_millis(15)),
            FrameSample::success(Duration::from_millis(40)),
            FrameSample::dropped(),
        ];
        let forward = aggregate(&samples);

        samples.reverse();
        let reversed = aggregate(&samples);

        samples.swap(0, 3);
        samples.swap(1, 4);
        let shuffled = aggregate(&samples);

        assert_eq!(forward, reversed);
        assert_eq!(forward, shuffled);
    }
}
