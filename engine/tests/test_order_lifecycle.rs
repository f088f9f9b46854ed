//! Order Lifecycle Tests
//!
//! Drives orders through the provisioning pipeline under the scheduler,
//! verifying the uniform 5-second stage dwell, the terminal `Active`
//! state, and that orders without a dwell clock or with unrecognized
//! statuses never move.

use chrono::NaiveDate;
use portal_lifecycle_core::{
    ManualClock, Order, OrderStatus, Scheduler, SchedulerConfig,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn order(id: &str, status: OrderStatus, status_changed_at: Option<i64>) -> Order {
    Order::new(
        id.to_string(),
        None,
        status,
        "London Main".to_string(),
        NaiveDate::from_ymd_opt(2023, 10, 18).unwrap(),
        None,
        vec!["Fibre 900".to_string()],
        status_changed_at,
    )
}

fn scheduler_with(orders: Vec<Order>, clock: &ManualClock) -> Scheduler {
    let config = SchedulerConfig {
        orders,
        ..Default::default()
    };
    Scheduler::new(config, Box::new(clock.clone())).unwrap()
}

fn status_of(scheduler: &Scheduler, order_id: &str) -> OrderStatus {
    scheduler
        .store()
        .get_order(order_id)
        .expect("order exists")
        .status()
        .clone()
}

// ============================================================================
// Pipeline Progression
// ============================================================================

#[test]
fn test_order_walks_the_full_pipeline() {
    let clock = ManualClock::new(0);
    let mut scheduler = scheduler_with(
        vec![order("ORD-1", OrderStatus::Submitted, Some(0))],
        &clock,
    );

    let expected = [
        OrderStatus::Processing,
        OrderStatus::InventoryCheck,
        OrderStatus::FieldAgentAssign,
        OrderStatus::InfraProcurement,
        OrderStatus::Installation,
        OrderStatus::JobDone,
        OrderStatus::Active,
    ];

    for stage in &expected {
        clock.advance(5_001);
        scheduler.tick().unwrap();
        assert_eq!(status_of(&scheduler, "ORD-1"), *stage);
    }

    // Terminal: further ticks change nothing
    clock.advance(60_000);
    let result = scheduler.tick().unwrap();
    assert_eq!(result.orders_advanced, 0);
    assert_eq!(status_of(&scheduler, "ORD-1"), OrderStatus::Active);
}

#[test]
fn test_order_holds_within_dwell() {
    let clock = ManualClock::new(0);
    let mut scheduler = scheduler_with(
        vec![order("ORD-1", OrderStatus::Submitted, Some(0))],
        &clock,
    );

    // Exactly at the boundary: strict comparison, no move
    clock.set(5_000);
    scheduler.tick().unwrap();
    assert_eq!(status_of(&scheduler, "ORD-1"), OrderStatus::Submitted);

    clock.set(5_001);
    scheduler.tick().unwrap();
    assert_eq!(status_of(&scheduler, "ORD-1"), OrderStatus::Processing);
}

#[test]
fn test_job_done_promotes_to_active() {
    let clock = ManualClock::new(100_000);
    let mut scheduler = scheduler_with(
        vec![order("ORD-1", OrderStatus::JobDone, Some(100_000))],
        &clock,
    );

    clock.advance(6_000);
    scheduler.tick().unwrap();
    assert_eq!(status_of(&scheduler, "ORD-1"), OrderStatus::Active);
}

// ============================================================================
// Inert Orders
// ============================================================================

#[test]
fn test_order_without_clock_never_moves() {
    let clock = ManualClock::new(0);
    let mut scheduler = scheduler_with(
        vec![order("ORD-1", OrderStatus::Processing, None)],
        &clock,
    );

    clock.advance(3_600_000);
    scheduler.run_ticks(10).unwrap();
    assert_eq!(status_of(&scheduler, "ORD-1"), OrderStatus::Processing);
}

#[test]
fn test_unrecognized_status_never_moves() {
    let clock = ManualClock::new(0);
    let mut scheduler = scheduler_with(
        vec![order(
            "ORD-1",
            OrderStatus::Other("Engineer Scheduled".to_string()),
            Some(0),
        )],
        &clock,
    );

    clock.advance(3_600_000);
    scheduler.run_ticks(10).unwrap();
    assert_eq!(
        status_of(&scheduler, "ORD-1"),
        OrderStatus::Other("Engineer Scheduled".to_string())
    );
}

#[test]
fn test_independent_orders_advance_independently() {
    let clock = ManualClock::new(0);
    let mut scheduler = scheduler_with(
        vec![
            order("ORD-1", OrderStatus::Submitted, Some(0)),
            order("ORD-2", OrderStatus::Installation, Some(2_000)),
            order("ORD-3", OrderStatus::Active, Some(0)),
        ],
        &clock,
    );

    clock.set(5_001);
    let result = scheduler.tick().unwrap();

    // ORD-1 elapsed 5_001 > 5_000, ORD-2 elapsed 3_001, ORD-3 terminal
    assert_eq!(result.orders_advanced, 1);
    assert_eq!(status_of(&scheduler, "ORD-1"), OrderStatus::Processing);
    assert_eq!(status_of(&scheduler, "ORD-2"), OrderStatus::Installation);
    assert_eq!(status_of(&scheduler, "ORD-3"), OrderStatus::Active);
}
