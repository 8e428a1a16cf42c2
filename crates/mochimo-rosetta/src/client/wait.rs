//! Polling helper for mempool propagation.
//!
//! Mempool inclusion is eventually consistent from the submitting side: the
//! client cannot know when the node's peers have relayed a transaction, and
//! the API offers no server push. The only option is to poll the
//! single-transaction lookup until a deadline. The cadence is a fixed
//! interval with no backoff; the expected wait is on the order of seconds,
//! where a constant tick is good enough. Many concurrent waiters against
//! one node would want a smarter schedule.

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::error::Error;
use crate::types::MempoolTransactionResponse;

use super::rosetta::RosettaClient;

/// Default deadline for a mempool wait.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default pause between mempool lookups.
pub const DEFAULT_WAIT_INTERVAL: Duration = Duration::from_secs(1);

/// Fluent builder for waiting until a transaction shows up in the mempool.
///
/// Created by [`RosettaClient::wait_for_transaction`]; awaiting it runs the
/// poll loop. Each wait owns its own clone of the client and its own
/// deadline, so concurrent waits for different hashes are fully independent.
///
/// # Example
///
/// ```rust,no_run
/// # use std::time::Duration;
/// # use mochimo_rosetta::RosettaClient;
/// # async fn example() -> Result<(), mochimo_rosetta::Error> {
/// let client = RosettaClient::new("http://localhost:8080");
///
/// // Defaults: 60 s deadline, 1 s interval
/// let tx = client.wait_for_transaction("d2e5...").await?;
///
/// // Customized, with cooperative cancellation
/// let (cancel, signal) = tokio::sync::oneshot::channel();
/// let tx = client
///     .wait_for_transaction("d2e5...")
///     .timeout(Duration::from_secs(30))
///     .interval(Duration::from_millis(500))
///     .cancel_on(signal)
///     .await?;
/// # drop(cancel);
/// # Ok(())
/// # }
/// ```
pub struct WaitForTransaction {
    client: RosettaClient,
    hash: String,
    timeout: Duration,
    interval: Duration,
    cancel: Option<oneshot::Receiver<()>>,
}

impl WaitForTransaction {
    pub(crate) fn new(client: RosettaClient, hash: String) -> Self {
        Self {
            client,
            hash,
            timeout: DEFAULT_WAIT_TIMEOUT,
            interval: DEFAULT_WAIT_INTERVAL,
            cancel: None,
        }
    }

    /// Overall deadline (default 60 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pause between lookups (default 1 second).
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Cancel the wait when the signal fires.
    ///
    /// Dropping the sender also cancels. Cancellation interrupts the
    /// inter-attempt pause, so the wait fails with [`Error::Cancelled`]
    /// promptly instead of at the next tick.
    pub fn cancel_on(mut self, signal: oneshot::Receiver<()>) -> Self {
        self.cancel = Some(signal);
        self
    }
}

impl IntoFuture for WaitForTransaction {
    type Output = Result<MempoolTransactionResponse, Error>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        let Self {
            client,
            hash,
            timeout,
            interval,
            cancel,
        } = self;
        Box::pin(async move {
            debug!(
                %hash,
                timeout_ms = timeout.as_millis() as u64,
                interval_ms = interval.as_millis() as u64,
                "watching mempool for transaction"
            );
            poll_mempool(&hash, timeout, interval, cancel, || {
                client.mempool_transaction(&hash)
            })
            .await
        })
    }
}

/// Bounded fixed-interval retry around a mempool lookup.
///
/// First success wins. Any lookup failure is retried until the deadline;
/// "not found" is not distinguished from transport failures, matching the
/// node's eventual-consistency window where both are transient. Two timeout
/// exits exist: the deadline may already have passed when a lookup fails
/// ([`Error::MempoolTimeout`]), or the loop condition goes false before the
/// next attempt ([`Error::WaitTimeout`]).
async fn poll_mempool<F, Fut>(
    hash: &str,
    timeout: Duration,
    interval: Duration,
    mut cancel: Option<oneshot::Receiver<()>>,
    mut lookup: F,
) -> Result<MempoolTransactionResponse, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<MempoolTransactionResponse, Error>>,
{
    let start = Instant::now();

    while start.elapsed() < timeout {
        match lookup().await {
            Ok(response) => {
                debug!(%hash, "transaction observed in mempool");
                return Ok(response);
            }
            Err(err) => {
                if start.elapsed() >= timeout {
                    return Err(Error::MempoolTimeout {
                        hash: hash.to_string(),
                        timeout_ms: timeout.as_millis() as u64,
                    });
                }
                debug!(%hash, error = %err, "lookup failed, retrying after interval");
                match cancel.as_mut() {
                    Some(signal) => {
                        tokio::select! {
                            _ = sleep(interval) => {}
                            _ = signal => {
                                return Err(Error::Cancelled {
                                    hash: hash.to_string(),
                                });
                            }
                        }
                    }
                    None => sleep(interval).await,
                }
            }
        }
    }

    Err(Error::WaitTimeout {
        hash: hash.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MempoolTransaction, TransactionIdentifier};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn found(hash: &str) -> MempoolTransactionResponse {
        MempoolTransactionResponse {
            transaction: MempoolTransaction {
                transaction_identifier: TransactionIdentifier::new(hash),
                operations: vec![],
                metadata: None,
            },
            metadata: None,
        }
    }

    fn not_found() -> Error {
        Error::Api {
            code: 404,
            message: "transaction not found in mempool".to_string(),
            retriable: true,
        }
    }

    // ========================================================================
    // Builder configuration
    // ========================================================================

    #[test]
    fn test_builder_defaults() {
        let client = RosettaClient::new("http://localhost:8080");
        let wait = client.wait_for_transaction("0xabc");
        assert_eq!(wait.hash, "0xabc");
        assert_eq!(wait.timeout, DEFAULT_WAIT_TIMEOUT);
        assert_eq!(wait.interval, DEFAULT_WAIT_INTERVAL);
        assert!(wait.cancel.is_none());
    }

    #[test]
    fn test_builder_setters() {
        let client = RosettaClient::new("http://localhost:8080");
        let (_tx, rx) = oneshot::channel();
        let wait = client
            .wait_for_transaction("0xabc")
            .timeout(Duration::from_secs(5))
            .interval(Duration::from_millis(250))
            .cancel_on(rx);
        assert_eq!(wait.timeout, Duration::from_secs(5));
        assert_eq!(wait.interval, Duration::from_millis(250));
        assert!(wait.cancel.is_some());
    }

    // ========================================================================
    // Poll loop timing (paused clock)
    // ========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_first_success_returns_immediately() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();

        let start = Instant::now();
        let result = poll_mempool(
            "0xabc",
            Duration::from_millis(5000),
            Duration::from_millis(1000),
            None,
            || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Ok(found("0xabc")) }
            },
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_on_third_attempt_takes_two_intervals() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();

        let start = Instant::now();
        let result = poll_mempool(
            "0xabc",
            Duration::from_millis(5000),
            Duration::from_millis(1000),
            None,
            move || {
                let attempt = counter.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 2 {
                        Err(not_found())
                    } else {
                        Ok(found("0xabc"))
                    }
                }
            },
        )
        .await;

        let elapsed = start.elapsed();
        assert_eq!(result.unwrap().transaction.transaction_identifier.hash, "0xabc");
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
        assert!(elapsed >= Duration::from_millis(2000), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(3000), "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_persistent_failure_times_out_within_one_interval() {
        let start = Instant::now();
        let result = poll_mempool(
            "0xabc",
            Duration::from_millis(2000),
            Duration::from_millis(1000),
            None,
            || async { Err(not_found()) },
        )
        .await;

        let elapsed = start.elapsed();
        match result {
            Err(Error::WaitTimeout { hash }) => assert_eq!(hash, "0xabc"),
            other => panic!("expected WaitTimeout, got {other:?}"),
        }
        assert!(elapsed >= Duration::from_millis(2000), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(3000), "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_lookup_hits_deadline_check_on_failure() {
        // The lookup itself outlives the deadline, so the failure lands
        // after the timeout and takes the deadline-check exit, not the
        // loop-condition exit.
        let result = poll_mempool(
            "0xabc",
            Duration::from_millis(2000),
            Duration::from_millis(1000),
            None,
            || async {
                sleep(Duration::from_millis(2500)).await;
                Err(not_found())
            },
        )
        .await;

        match result {
            Err(Error::MempoolTimeout { hash, timeout_ms }) => {
                assert_eq!(hash, "0xabc");
                assert_eq!(timeout_ms, 2000);
            }
            other => panic!("expected MempoolTimeout, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_waits_resolve_independently() {
        let fast = poll_mempool(
            "0xfast",
            Duration::from_millis(5000),
            Duration::from_millis(1000),
            None,
            || async { Ok(found("0xfast")) },
        );
        let slow = poll_mempool(
            "0xslow",
            Duration::from_millis(3000),
            Duration::from_millis(1000),
            None,
            || async { Err(not_found()) },
        );

        let start = Instant::now();
        let (fast_result, slow_result) = tokio::join!(fast, slow);

        assert_eq!(
            fast_result.unwrap().transaction.transaction_identifier.hash,
            "0xfast"
        );
        assert!(slow_result.unwrap_err().is_timeout());
        // the slow wait's deadline bounds the whole join; the fast one
        // finished long before it
        assert!(start.elapsed() >= Duration::from_millis(3000));
        assert!(start.elapsed() < Duration::from_millis(4000));
    }

    // ========================================================================
    // Cancellation
    // ========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_interrupts_the_pause() {
        let (tx, rx) = oneshot::channel();
        let canceller = tokio::spawn(async move {
            sleep(Duration::from_millis(1500)).await;
            let _ = tx.send(());
        });

        let start = Instant::now();
        let result = poll_mempool(
            "0xabc",
            Duration::from_millis(60000),
            Duration::from_millis(1000),
            Some(rx),
            || async { Err(not_found()) },
        )
        .await;

        let elapsed = start.elapsed();
        match result {
            Err(Error::Cancelled { hash }) => assert_eq!(hash, "0xabc"),
            other => panic!("expected Cancelled, got {other:?}"),
        }
        // cancelled mid-pause, long before the 60 s deadline
        assert!(elapsed < Duration::from_millis(2500), "elapsed {elapsed:?}");
        canceller.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_unsignalled_cancellation_does_not_disturb_the_wait() {
        let (_tx, rx) = oneshot::channel();
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();

        let result = poll_mempool(
            "0xabc",
            Duration::from_millis(5000),
            Duration::from_millis(1000),
            Some(rx),
            move || {
                let attempt = counter.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 1 {
                        Err(not_found())
                    } else {
                        Ok(found("0xabc"))
                    }
                }
            },
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }
}
