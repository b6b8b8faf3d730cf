use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::instrument;

/// Samples kept per timer before the oldest are dropped.
const MAX_TIMER_SAMPLES: usize = 10_000;
const TRIM_BATCH: usize = 1_000;

/// In-process metrics sink for named counters and timers.
///
/// Handlers increment counters and record latency samples; the aggregated
/// view is served as a [`MetricsSnapshot`].
pub struct MetricsService {
    inner: Arc<RwLock<MetricsInner>>,

    /// Service start time for uptime calculation
    start_time: Instant,
}

#[derive(Default)]
struct MetricsInner {
    counters: HashMap<String, u64>,

    /// Durations in microseconds, oldest first
    timers: HashMap<String, Vec<u64>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetricType {
    /// Monotonically increasing count of events
    Counter,
    /// Distribution of recorded durations
    Timer,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MetricsSnapshot {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub uptime_seconds: u64,
    pub counters: BTreeMap<String, u64>,
    pub timers: BTreeMap<String, TimerSummary>,
}

/// Aggregated timer statistics in milliseconds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimerSummary {
    pub count: u64,
    pub mean_ms: f64,
    pub p50_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub max_ms: f64,
}

impl MetricsService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsInner::default())),
            start_time: Instant::now(),
        }
    }

    /// Makes a metric visible in snapshots before its first sample.
    pub async fn register(&self, name: &str, metric_type: MetricType) {
        let mut inner = self.inner.write().await;
        match metric_type {
            MetricType::Counter => {
                inner.counters.entry(name.to_string()).or_default();
            }
            MetricType::Timer => {
                inner.timers.entry(name.to_string()).or_default();
            }
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub async fn increment_counter(&self, name: &str) {
        let mut inner = self.inner.write().await;
        *inner.counters.entry(name.to_string()).or_default() += 1;
    }

    #[instrument(level = "trace", skip(self))]
    pub async fn record_timer(&self, name: &str, duration: Duration) {
        let mut inner = self.inner.write().await;
        let samples = inner.timers.entry(name.to_string()).or_default();
        samples.push(duration.as_micros() as u64);

        if samples.len() > MAX_TIMER_SAMPLES {
            samples.drain(0..TRIM_BATCH);
        }
    }

    /// Runs `fut` and records its wall-clock duration under `name`.
    pub async fn time<F, T>(&self, name: &str, fut: F) -> T
    where
        F: Future<Output = T>,
    {
        let started = Instant::now();
        let out = fut.await;
        self.record_timer(name, started.elapsed()).await;
        out
    }

    pub async fn counter_value(&self, name: &str) -> u64 {
        self.inner
            .read()
            .await
            .counters
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    pub async fn snapshot(&self) -> MetricsSnapshot {
        let inner = self.inner.read().await;

        let counters = inner
            .counters
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        let timers = inner
            .timers
            .iter()
            .map(|(k, samples)| (k.clone(), Self::summarize(samples)))
            .collect();

        MetricsSnapshot {
            timestamp: chrono::Utc::now(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            counters,
            timers,
        }
    }

    fn summarize(samples: &[u64]) -> TimerSummary {
        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        let to_ms = |micros: f64| micros / 1000.0;
        let mean = if sorted.is_empty() {
            0.0
        } else {
            sorted.iter().sum::<u64>() as f64 / sorted.len() as f64
        };

        TimerSummary {
            count: sorted.len() as u64,
            mean_ms: to_ms(mean),
            p50_ms: to_ms(Self::calculate_percentile(&sorted, 50.0)),
            p95_ms: to_ms(Self::calculate_percentile(&sorted, 95.0)),
            p99_ms: to_ms(Self::calculate_percentile(&sorted, 99.0)),
            max_ms: to_ms(sorted.last().copied().unwrap_or(0) as f64),
        }
    }

    /// Nearest-rank percentile over already sorted data.
    fn calculate_percentile(sorted_data: &[u64], percentile: f64) -> f64 {
        if sorted_data.is_empty() {
            return 0.0;
        }

        let len = sorted_data.len();
        let rank = ((percentile / 100.0) * len as f64).ceil() as usize;
        sorted_data[rank.saturating_sub(1).min(len - 1)] as f64
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}
