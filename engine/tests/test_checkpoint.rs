//! Checkpoint Tests
//!
//! Pauses a running simulation mid-chain, snapshots it, restores into a
//! fresh scheduler, and verifies the resumed run is indistinguishable
//! from an uninterrupted one. Also covers tamper rejection and JSON
//! round-tripping of snapshots.

use chrono::NaiveDate;
use portal_lifecycle_core::{
    compute_state_hash, seed, validate_snapshot, ManualClock, Quote, QuoteStatus, Scheduler,
    SchedulerConfig, SimulationError, StateSnapshot,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn quote_in_pipeline(status_changed_at: i64) -> Quote {
    Quote::new(
        "Q-2023-300".to_string(),
        "Acme HQ".to_string(),
        "London Main".to_string(),
        NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
        50_000,
        QuoteStatus::AwaitingSupplierApproval,
        "Alice Smith".to_string(),
        vec![],
        Some(status_changed_at),
    )
}

fn seeded_scheduler(clock: &ManualClock) -> Scheduler {
    let config = SchedulerConfig {
        quotes: vec![quote_in_pipeline(0)],
        orders: seed::orders(),
        invoices: seed::invoices(),
        ..Default::default()
    };
    Scheduler::new(config, Box::new(clock.clone())).unwrap()
}

// ============================================================================
// Snapshot / Restore
// ============================================================================

#[test]
fn test_snapshot_round_trips_through_json() {
    let clock = ManualClock::new(0);
    let scheduler = seeded_scheduler(&clock);

    let snapshot = scheduler.snapshot().unwrap();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: StateSnapshot = serde_json::from_str(&json).unwrap();

    validate_snapshot(&restored).unwrap();
    assert_eq!(restored.ticks_completed, snapshot.ticks_completed);
    assert_eq!(restored.state_hash, snapshot.state_hash);
    assert_eq!(restored.quotes, snapshot.quotes);
    assert_eq!(restored.orders, snapshot.orders);
    assert_eq!(restored.invoices, snapshot.invoices);
}

#[test]
fn test_resumed_run_matches_uninterrupted_run() {
    // Uninterrupted run: 3 ticks, advancing 10s each (stops short of
    // conversion, whose derived ids are freshly generated per run)
    let clock_a = ManualClock::new(0);
    let mut uninterrupted = seeded_scheduler(&clock_a);
    for _ in 0..3 {
        clock_a.advance(10_001);
        uninterrupted.tick().unwrap();
    }

    // Interrupted run: pause after 2 ticks, snapshot, restore, resume
    let clock_b = ManualClock::new(0);
    let mut first_half = seeded_scheduler(&clock_b);
    for _ in 0..2 {
        clock_b.advance(10_001);
        first_half.tick().unwrap();
    }
    let snapshot = first_half.snapshot().unwrap();

    let mut resumed = seeded_scheduler(&clock_b);
    resumed.restore(snapshot).unwrap();
    assert_eq!(resumed.ticks_completed(), 2);
    clock_b.advance(10_001);
    resumed.tick().unwrap();

    assert_eq!(resumed.ticks_completed(), uninterrupted.ticks_completed());
    let hash_a = compute_state_hash(
        uninterrupted.store().quotes(),
        uninterrupted.store().orders(),
        uninterrupted.store().invoices(),
    )
    .unwrap();
    let hash_b = compute_state_hash(
        resumed.store().quotes(),
        resumed.store().orders(),
        resumed.store().invoices(),
    )
    .unwrap();
    assert_eq!(hash_a, hash_b);
}

// ============================================================================
// Integrity Rejection
// ============================================================================

#[test]
fn test_tampered_snapshot_rejected() {
    let clock = ManualClock::new(0);
    let mut scheduler = seeded_scheduler(&clock);

    let mut snapshot = scheduler.snapshot().unwrap();
    snapshot.quotes.clear(); // tamper without recomputing the hash

    let err = scheduler.restore(snapshot).unwrap_err();
    assert!(matches!(err, SimulationError::StateValidation(_)));

    // Current state untouched after rejection
    assert!(scheduler.store().get_quote("Q-2023-300").is_some());
}

#[test]
fn test_snapshot_with_broken_invoice_identity_rejected() {
    let clock = ManualClock::new(0);
    let scheduler = seeded_scheduler(&clock);

    let mut snapshot = scheduler.snapshot().unwrap();
    // Corrupt one invoice via JSON, keeping the struct shape valid
    let mut value = serde_json::to_value(&snapshot).unwrap();
    value["invoices"][0]["total"] = serde_json::json!(1);
    snapshot = serde_json::from_value(value).unwrap();
    snapshot.state_hash =
        compute_state_hash(&snapshot.quotes, &snapshot.orders, &snapshot.invoices).unwrap();

    let err = validate_snapshot(&snapshot).unwrap_err();
    assert!(matches!(err, SimulationError::StateValidation(_)));
}
