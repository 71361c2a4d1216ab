//! Debounced delivery of search terms.
//!
//! Filtering is cheap and synchronous, but re-running it on every keystroke
//! is wasteful. [`debounce`] sits between the input source and the filter:
//! it forwards only the last value of each burst, once the input has been
//! quiet for the configured delay.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

/// Default quiet period before a search term is applied.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Upper bound accepted for `--debounce-ms`.
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

const CHANNEL_CAPACITY: usize = 64;

/// Spawns a task that debounces `input` and returns the receiving end.
///
/// Every received value restarts the `delay` timer. When the timer fires, the
/// most recent value is forwarded. When `input` closes, a pending value is
/// forwarded immediately and the returned receiver then closes too.
///
/// Must be called from within a tokio runtime.
pub fn debounce<T: Send + 'static>(
    mut input: mpsc::Receiver<T>,
    delay: Duration,
) -> mpsc::Receiver<T> {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

    tokio::spawn(async move {
        let mut pending: Option<T> = None;

        loop {
            if pending.is_none() {
                match input.recv().await {
                    Some(value) => pending = Some(value),
                    None => break,
                }
                continue;
            }

            tokio::select! {
                received = input.recv() => match received {
                    Some(value) => pending = Some(value),
                    None => break,
                },
                _ = sleep(delay) => {
                    if let Some(value) = pending.take() {
                        if tx.send(value).await.is_err() {
                            return;
                        }
                    }
                }
            }
        }

        if let Some(value) = pending.take() {
            let _ = tx.send(value).await;
        }
    });

    rx
}
