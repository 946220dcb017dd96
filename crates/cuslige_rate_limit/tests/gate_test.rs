//! Tests for the concurrency gate.

use cuslige_rate_limit::{ConcurrencyGate, DEFAULT_MAX_CONCURRENT};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[test]
fn test_default_capacity_is_twenty() {
    let gate = ConcurrencyGate::default();
    assert_eq!(gate.capacity(), DEFAULT_MAX_CONCURRENT);
    assert_eq!(gate.capacity(), 20);
}

#[test]
fn test_zero_capacity_is_clamped() {
    let gate = ConcurrencyGate::new(0);
    assert_eq!(gate.capacity(), 1);
}

#[tokio::test]
async fn test_permit_released_on_drop() {
    let gate = ConcurrencyGate::new(1);
    let permit = gate.acquire().await.unwrap();
    assert!(gate.try_acquire().is_none());

    drop(permit);
    assert!(gate.try_acquire().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_twenty_first_holder_waits_for_a_free_slot() {
    let gate = ConcurrencyGate::new(20);
    let active = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for _ in 0..21 {
        let gate = gate.clone();
        let active = Arc::clone(&active);
        let peak = Arc::clone(&peak);
        handles.push(tokio::spawn(async move {
            let _permit = gate.acquire().await.unwrap();
            let now = active.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_secs(1)).await;
            active.fetch_sub(1, Ordering::SeqCst);
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(peak.load(Ordering::SeqCst), 20);
    assert_eq!(gate.available(), 20);
}
