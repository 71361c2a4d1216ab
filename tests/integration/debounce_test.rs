//! Integration tests for debounced search delivery, using paused tokio time

use prompt_library::csv_handler::PromptRecord;
use prompt_library::debounce::{debounce, DEFAULT_DEBOUNCE_MS};
use prompt_library::search::Catalog;

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep, Instant};

const DELAY: Duration = Duration::from_millis(DEFAULT_DEBOUNCE_MS);

#[tokio::test(start_paused = true)]
async fn test_value_is_held_for_the_quiet_period() {
    let (tx, input) = mpsc::channel(8);
    let mut output = debounce(input, DELAY);

    let start = Instant::now();
    tx.send("alpha").await.unwrap();

    assert_eq!(output.recv().await, Some("alpha"));
    assert!(start.elapsed() >= DELAY);
}

#[tokio::test(start_paused = true)]
async fn test_each_value_restarts_the_timer() {
    let (tx, input) = mpsc::channel(8);
    let mut output = debounce(input, DELAY);

    let start = Instant::now();
    tx.send("a").await.unwrap();
    sleep(Duration::from_millis(200)).await;
    tx.send("al").await.unwrap();
    sleep(Duration::from_millis(200)).await;
    tx.send("alp").await.unwrap();

    assert_eq!(output.recv().await, Some("alp"));
    assert!(start.elapsed() >= Duration::from_millis(400) + DELAY);
}

#[tokio::test(start_paused = true)]
async fn test_spaced_values_are_all_delivered() {
    let (tx, input) = mpsc::channel(8);
    let mut output = debounce(input, DELAY);

    tx.send("first").await.unwrap();
    assert_eq!(output.recv().await, Some("first"));

    sleep(DELAY * 2).await;
    tx.send("second").await.unwrap();
    assert_eq!(output.recv().await, Some("second"));
}

#[tokio::test(start_paused = true)]
async fn test_pending_value_is_flushed_when_input_closes() {
    let (tx, input) = mpsc::channel(8);
    let mut output = debounce(input, DELAY);

    let start = Instant::now();
    tx.send("last").await.unwrap();
    drop(tx);

    assert_eq!(output.recv().await, Some("last"));
    assert!(start.elapsed() < DELAY);
    assert_eq!(output.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_closed_input_without_values_closes_output() {
    let (tx, input) = mpsc::channel::<String>(8);
    let mut output = debounce(input, DELAY);
    drop(tx);

    assert_eq!(output.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_debounced_terms_drive_catalog() {
    let mut catalog = Catalog::new(vec![
        PromptRecord::new("alpha prompt", "first"),
        PromptRecord::new("Beta", "mentions ALPHA"),
        PromptRecord::new("Gamma", "unrelated"),
    ]);

    let (tx, input) = mpsc::channel(8);
    let mut terms = debounce(input, DELAY);

    for term in ["g", "ga", "gam", "alpha"] {
        tx.send(term.to_string()).await.unwrap();
    }
    drop(tx);

    let mut applied = Vec::new();
    while let Some(term) = terms.recv().await {
        catalog.search(&term);
        applied.push(term);
    }

    assert_eq!(applied, vec!["alpha".to_string()]);
    assert_eq!(catalog.summary().to_string(), "Showing 2 of 3 prompts");
}
