//! Stage advancers — the pure state machines of the simulation.
//!
//! Both advancers share the same contract: given a committed collection
//! and the current time, return a replacement collection in which each
//! entity with a running dwell clock has advanced at most one step.

pub mod order;
pub mod quote;

pub use order::{advance_order, advance_orders, order_transition, ORDER_STAGE_DWELL_MS};
pub use quote::{
    advance_quote, advance_quotes, quote_transition, APPROVAL_STAGE_DWELL_MS,
    SUPPLIER_APPROVAL_DWELL_MS,
};
