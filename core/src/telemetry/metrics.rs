use serde::Serialize;
use std::sync::Mutex;

/// Request counters shared by every handler.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub nearest_served: usize,
    pub predictions_served: usize,
    pub rejected: usize,
    pub failures: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_nearest(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.nearest_served += 1;
        }
    }

    pub fn record_prediction(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.predictions_served += 1;
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    pub fn record_failure(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.failures += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let recorder = MetricsRecorder::new();
        recorder.record_nearest();
        recorder.record_nearest();
        recorder.record_prediction();
        recorder.record_rejected();
        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.nearest_served, 2);
        assert_eq!(snapshot.predictions_served, 1);
        assert_eq!(snapshot.rejected, 1);
        assert_eq!(snapshot.failures, 0);
    }
}
