//! Order stage advancer
//!
//! Same shape as the quote advancer, applied to the provisioning chain
//! with a uniform dwell per stage:
//!
//! ```text
//! Submitted -> Processing -> Inventory check -> Field agent assign
//!          -> Infra procurement -> Installation -> Job done -> Active
//! ```
//!
//! Orders created externally with a status outside this chain (seed data
//! `Active`, `Engineer Scheduled`, ...) are left untouched; the advancer
//! only recognizes the exact chain states.

use crate::core::clock::TimestampMs;
use crate::models::order::{Order, OrderStatus};

/// Uniform dwell for every provisioning stage.
pub const ORDER_STAGE_DWELL_MS: TimestampMs = 5_000;

/// Transition table for the provisioning chain.
///
/// Total: terminal (`Active`) and unrecognized statuses map to "no
/// transition" explicitly.
pub fn order_transition(status: &OrderStatus) -> Option<OrderStatus> {
    match status {
        OrderStatus::Submitted => Some(OrderStatus::Processing),
        OrderStatus::Processing => Some(OrderStatus::InventoryCheck),
        OrderStatus::InventoryCheck => Some(OrderStatus::FieldAgentAssign),
        OrderStatus::FieldAgentAssign => Some(OrderStatus::InfraProcurement),
        OrderStatus::InfraProcurement => Some(OrderStatus::Installation),
        OrderStatus::Installation => Some(OrderStatus::JobDone),
        OrderStatus::JobDone => Some(OrderStatus::Active),
        OrderStatus::Active | OrderStatus::Other(_) => None,
    }
}

/// Advance a single order by at most one step.
pub fn advance_order(order: &Order, now: TimestampMs) -> Order {
    let Some(changed_at) = order.status_changed_at() else {
        return order.clone();
    };

    let Some(next) = order_transition(order.status()) else {
        return order.clone();
    };

    if now - changed_at > ORDER_STAGE_DWELL_MS {
        order.advanced_to(next, now)
    } else {
        order.clone()
    }
}

/// Advance every order in the collection by at most one step.
///
/// Returns a replacement collection; element order is preserved.
pub fn advance_orders(orders: &[Order], now: TimestampMs) -> Vec<Order> {
    orders.iter().map(|o| advance_order(o, now)).collect()
}
