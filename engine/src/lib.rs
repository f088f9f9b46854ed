//! Portal Lifecycle Core - Rust Engine
//!
//! Lifecycle simulation and derivation engine for a demonstration
//! business portal: quotes progress through approval stages on fixed
//! dwell times and, once approved, convert exactly once into an order
//! and an invoice; orders independently progress through a provisioning
//! pipeline.
//!
//! # Architecture
//!
//! - **core**: time management (injectable clock)
//! - **models**: domain types (Quote, Order, Invoice, reference data,
//!   the entity store, event logging)
//! - **lifecycle**: pure stage advancers (quote and order state machines)
//! - **conversion**: derivation of orders and invoices from approved quotes
//! - **scheduler**: fixed-period tick loop and checkpointing
//! - **workflow**: quote creation from the reference catalogue
//! - **seed**: demo fixtures
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (pence)
//! 2. Advancers and the deriver are pure; the scheduler owns the only
//!    mutable store and commits whole collections (copy-on-write)
//! 3. At most one stage transition per entity per tick
//! 4. Each approved quote converts exactly once

// Module declarations
pub mod conversion;
pub mod core;
pub mod lifecycle;
pub mod models;
pub mod scheduler;
pub mod seed;
pub mod workflow;

// Re-exports for convenience
pub use conversion::{
    derive_from_approved, period_label, vat_of, Conversion, Derivation, INVOICE_DUE_DAYS,
    INVOICE_METHOD, VAT_RATE_BPS,
};
pub use crate::core::clock::{Clock, ManualClock, SystemClock, TimestampMs, DEFAULT_TICK_PERIOD_MS};
pub use lifecycle::{
    advance_order, advance_orders, advance_quote, advance_quotes, order_transition,
    quote_transition, APPROVAL_STAGE_DWELL_MS, ORDER_STAGE_DWELL_MS, SUPPLIER_APPROVAL_DWELL_MS,
};
pub use models::{
    event::{Event, EventLog},
    invoice::{Invoice, InvoiceStatus},
    order::{Order, OrderStatus},
    quote::{Quote, QuoteItem, QuoteStatus},
    reference::{Product, Site, Supplier},
    store::EntityStore,
};
pub use scheduler::{
    compute_state_hash, validate_snapshot, Scheduler, SchedulerConfig, SimulationError,
    StateSnapshot, TickResult,
};
pub use workflow::{create_quote, QuoteLine, WorkflowError};
