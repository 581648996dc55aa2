//! Radius-with-details fan-out.
//!
//! Favors availability over completeness: every detail lookup runs
//! concurrently and settles on its own, and a failed lookup only removes
//! that station from the result.

use std::future::Future;

use futures::future::join_all;
use tracing::{info, warn};

use crate::domain::{StationDetails, StationRadiusHit};

use super::error::GatewayError;

/// Enrich radius hits with one detail lookup per station.
///
/// Hits without a numeric station id are skipped before any lookup. All
/// lookups are awaited, none is cancelled by another's failure. Survivors
/// keep the order of `hits`.
pub async fn enrich<F, Fut>(hits: &[StationRadiusHit], lookup: F) -> Vec<StationDetails>
where
    F: Fn(u64) -> Fut,
    Fut: Future<Output = Result<StationDetails, GatewayError>>,
{
    let ids: Vec<u64> = hits.iter().filter_map(|hit| hit.station_id).collect();
    let without_id = hits.len() - ids.len();

    let lookups = ids.iter().map(|&station_id| {
        let pending = lookup(station_id);
        async move {
            match pending.await {
                Ok(details) => Some(details),
                Err(err) => {
                    warn!(station_id, error = %err, "dropping station: detail lookup failed");
                    None
                }
            }
        }
    });

    let enriched: Vec<StationDetails> = join_all(lookups).await.into_iter().flatten().collect();

    info!(
        hits = hits.len(),
        without_id,
        enriched = enriched.len(),
        failed = ids.len() - enriched.len(),
        "radius fan-out complete"
    );

    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    fn hit(id: &str, station_id: Option<u64>) -> StationRadiusHit {
        StationRadiusHit {
            id: Some(id.to_string()),
            station_id,
            name: None,
            coordinates: None,
            distance: None,
            province: None,
            locality: None,
        }
    }

    /// Captures formatted log output for assertions.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[tokio::test]
    async fn failed_lookup_is_dropped_and_logged() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let hits = [hit("a1", Some(1)), hit("a2", Some(2)), hit("a3", Some(3))];

        let result = enrich(&hits, |id| async move {
            if id == 2 {
                Err(GatewayError::UpstreamUnavailable)
            } else {
                Ok(StationDetails::bare(id))
            }
        })
        .await;

        let ids: Vec<u64> = result.iter().map(|d| d.station_id).collect();
        assert_eq!(ids, vec![1, 3]);

        let output = logs.contents();
        assert!(output.contains("station_id=2"), "log was: {output}");
        assert!(output.contains("dropping station"));
    }

    #[tokio::test]
    async fn hits_without_id_are_never_looked_up() {
        let looked_up = Mutex::new(Vec::new());
        let hits = [hit("a1", Some(100)), hit("a2", None)];

        let result = enrich(&hits, |id| {
            looked_up.lock().unwrap().push(id);
            async move { Ok(StationDetails::bare(id)) }
        })
        .await;

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].station_id, 100);
        assert_eq!(*looked_up.lock().unwrap(), vec![100]);
    }

    #[tokio::test]
    async fn order_follows_hits_not_completion() {
        let hits = [hit("a", Some(1)), hit("b", Some(2)), hit("c", Some(3))];

        // Earlier hits finish later.
        let result = enrich(&hits, |id| async move {
            tokio::time::sleep(Duration::from_millis(30 * (4 - id))).await;
            Ok(StationDetails::bare(id))
        })
        .await;

        let ids: Vec<u64> = result.iter().map(|d| d.station_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn failure_does_not_cancel_slow_siblings() {
        let hits = [hit("a", Some(1)), hit("b", Some(2))];

        let result = enrich(&hits, |id| async move {
            if id == 1 {
                Err(GatewayError::NotFound("gone".into()))
            } else {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok(StationDetails::bare(id))
            }
        })
        .await;

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].station_id, 2);
    }

    #[tokio::test]
    async fn all_failures_yield_empty() {
        let hits = [hit("a", Some(1)), hit("b", Some(2))];
        let result = enrich(&hits, |_| async { Err(GatewayError::UpstreamUnavailable) }).await;
        assert!(result.is_empty());
    }
}
