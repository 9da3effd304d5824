/// Process-wide request metrics
///
/// Request count and running mean latency, updated once per request on
/// every path (hit, miss, failed inference). The count increment and the
/// mean update are one indivisible operation: both live behind the same
/// mutex, so a snapshot can never observe one without the other.
use crate::logger::{self, LogTag};
use std::sync::Mutex;
use std::time::Duration;

/// Consistent view of the counters at one point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub avg_latency_ms: f64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

#[derive(Debug, Default)]
struct MetricsInner {
    requests: u64,
    avg_latency_ms: f64,
    cache_hits: u64,
    cache_misses: u64,
}

#[derive(Debug, Default)]
pub struct MetricsTracker {
    inner: Mutex<MetricsInner>,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed request
    ///
    /// The mean is maintained incrementally against the post-increment
    /// count: mean' = mean + (latency - mean) / n'. Only the current
    /// count and mean are retained, never a sample history.
    pub fn record_request(&self, latency: Duration, was_hit: bool) {
        let latency_ms = latency.as_secs_f64() * 1000.0;

        let mut inner = self.inner.lock().unwrap();
        inner.requests += 1;
        inner.avg_latency_ms += (latency_ms - inner.avg_latency_ms) / inner.requests as f64;
        if was_hit {
            inner.cache_hits += 1;
        } else {
            inner.cache_misses += 1;
        }

        logger::verbose(
            LogTag::Metrics,
            &format!(
                "Request #{} recorded ({:.2}ms, hit={})",
                inner.requests, latency_ms, was_hit
            ),
        );
    }

    /// Consistent (never torn) view of the current counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        let inner = self.inner.lock().unwrap();
        MetricsSnapshot {
            requests: inner.requests,
            avg_latency_ms: inner.avg_latency_ms,
            cache_hits: inner.cache_hits,
            cache_misses: inner.cache_misses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn empty_tracker_snapshot() {
        let tracker = MetricsTracker::new();
        let snap = tracker.snapshot();
        assert_eq!(snap.requests, 0);
        assert_eq!(snap.avg_latency_ms, 0.0);
    }

    #[test]
    fn running_mean_matches_arithmetic_mean() {
        let tracker = MetricsTracker::new();
        let latencies_ms = [10.0_f64, 30.0, 50.0, 2.0, 108.0];

        for &ms in &latencies_ms {
            tracker.record_request(Duration::from_secs_f64(ms / 1000.0), false);
        }

        let expected = latencies_ms.iter().sum::<f64>() / latencies_ms.len() as f64;
        let snap = tracker.snapshot();
        assert_eq!(snap.requests, latencies_ms.len() as u64);
        assert!((snap.avg_latency_ms - expected).abs() < 1e-9);
    }

    #[test]
    fn hit_and_miss_counters() {
        let tracker = MetricsTracker::new();
        tracker.record_request(Duration::from_millis(1), true);
        tracker.record_request(Duration::from_millis(1), false);
        tracker.record_request(Duration::from_millis(1), true);

        let snap = tracker.snapshot();
        assert_eq!(snap.requests, 3);
        assert_eq!(snap.cache_hits, 2);
        assert_eq!(snap.cache_misses, 1);
    }

    #[test]
    fn concurrent_updates_are_not_torn() {
        let tracker = Arc::new(MetricsTracker::new());
        let threads = 8;
        let per_thread = 250;

        // Half the threads record 4ms, half 8ms; the incremental mean is
        // order-independent, so any interleaving must land on 6ms.
        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let tracker = Arc::clone(&tracker);
                let latency = Duration::from_millis(if i % 2 == 0 { 4 } else { 8 });
                thread::spawn(move || {
                    for _ in 0..per_thread {
                        tracker.record_request(latency, i % 2 == 0);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let snap = tracker.snapshot();
        assert_eq!(snap.requests, (threads * per_thread) as u64);
        assert_eq!(snap.cache_hits + snap.cache_misses, snap.requests);
        assert!((snap.avg_latency_ms - 6.0).abs() < 1e-6);
    }
}
