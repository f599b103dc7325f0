//! Request metrics
//!
//! Recorded through the `metrics` facade. Nothing is exported unless the
//! embedding application installs a recorder.

use std::time::Duration;

pub const REQUESTS_TOTAL: &str = "fhe_client_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "fhe_client_request_duration_seconds";

/// How a single request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Non-2xx status
    ServerError,
    /// Connection, DNS or body transfer failure
    NetworkError,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::ServerError => "server_error",
            Outcome::NetworkError => "network_error",
        }
    }
}

pub(crate) fn record_request(route: &'static str, outcome: Outcome, elapsed: Duration) {
    ::metrics::counter!(REQUESTS_TOTAL, "route" => route, "outcome" => outcome.as_str()).increment(1);
    ::metrics::histogram!(REQUEST_DURATION_SECONDS, "route" => route).record(elapsed.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::MetricKind;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::Success.as_str(), "success");
        assert_eq!(Outcome::ServerError.as_str(), "server_error");
        assert_eq!(Outcome::NetworkError.as_str(), "network_error");
    }

    #[test]
    fn test_record_request_emits_counter_and_histogram() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        ::metrics::with_local_recorder(&recorder, || {
            record_request("/transfer", Outcome::ServerError, Duration::from_millis(5));
            record_request("/transfer", Outcome::ServerError, Duration::from_millis(7));
            record_request("/post", Outcome::Success, Duration::from_millis(1));
        });

        let mut counters = Vec::new();
        let mut histograms = Vec::new();
        for (key, _, _, value) in snapshotter.snapshot().into_vec() {
            let labels: Vec<(String, String)> = key
                .key()
                .labels()
                .map(|l| (l.key().to_string(), l.value().to_string()))
                .collect();
            match (key.kind(), value) {
                (MetricKind::Counter, DebugValue::Counter(n)) => {
                    assert_eq!(key.key().name(), REQUESTS_TOTAL);
                    counters.push((labels, n));
                }
                (MetricKind::Histogram, DebugValue::Histogram(samples)) => {
                    assert_eq!(key.key().name(), REQUEST_DURATION_SECONDS);
                    histograms.push((labels, samples.len()));
                }
                other => panic!("unexpected metric: {:?}", other),
            }
        }
        counters.sort();
        histograms.sort();

        let pair = |k: &str, v: &str| (k.to_string(), v.to_string());
        assert_eq!(
            counters,
            vec![
                (vec![pair("route", "/post"), pair("outcome", "success")], 1),
                (vec![pair("route", "/transfer"), pair("outcome", "server_error")], 2),
            ]
        );
        assert_eq!(
            histograms,
            vec![
                (vec![pair("route", "/post")], 1),
                (vec![pair("route", "/transfer")], 2),
            ]
        );
    }
}
