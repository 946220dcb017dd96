//! Tests for the fixed-backoff retry policy.

use cuslige_rate_limit::RetryPolicy;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_exhausts_three_attempts_with_fixed_backoff() {
    let policy = RetryPolicy::default();
    let mut calls = 0;
    let start = Instant::now();

    let result: Result<(), String> = policy
        .run("identity", || {
            calls += 1;
            async { Err("503".to_string()) }
        })
        .await;

    assert_eq!(result.unwrap_err(), "503");
    assert_eq!(calls, 3);
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(2));
    assert!(elapsed < Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn test_stops_at_first_success() {
    let policy = RetryPolicy::default();
    let mut calls = 0;

    let result: Result<u32, String> = policy
        .run("friends", || {
            calls += 1;
            let outcome = if calls < 2 {
                Err("timeout".to_string())
            } else {
                Ok(7)
            };
            async move { outcome }
        })
        .await;

    assert_eq!(result.unwrap(), 7);
    assert_eq!(calls, 2);
}

#[tokio::test]
async fn test_once_never_retries() {
    let policy = RetryPolicy::once();
    let mut calls = 0;

    let result: Result<(), String> = policy
        .run("premium", || {
            calls += 1;
            async { Err("down".to_string()) }
        })
        .await;

    assert!(result.is_err());
    assert_eq!(calls, 1);
}

#[test]
fn test_new_clamps_attempts() {
    let policy = RetryPolicy::new(0, Duration::from_millis(5));
    assert_eq!(*policy.max_attempts(), 1);
    assert_eq!(policy.backoff(), Duration::from_millis(5));
}
