//! Scheduler engine
//!
//! Drives the simulation: one `tick()` call is one atomic logical step
//! executing the pipeline in a fixed order:
//!
//! ```text
//! For each tick t:
//! 1. Advance quotes (at most one stage each), commit
//! 2. Derive from approved quotes (reaction to the quote commit), commit
//! 3. Advance orders (at most one stage each), commit
//! 4. Log events
//! ```
//!
//! Quote advancement is fully applied — and derivation completed —
//! before order advancement for the tick is computed, so an order
//! derived in step 2 observes zero elapsed dwell in step 3 and first
//! advances on the following tick. Real-time pacing (the 1-second
//! period) belongs to the caller; the engine itself never sleeps, and
//! no blocking I/O happens inside a tick.
//!
//! # Example
//!
//! ```rust
//! use portal_lifecycle_core::{ManualClock, Scheduler, SchedulerConfig};
//!
//! let clock = ManualClock::new(0);
//! let config = SchedulerConfig::default();
//! let mut scheduler = Scheduler::new(config, Box::new(clock.clone())).unwrap();
//!
//! clock.advance(1_000);
//! let result = scheduler.tick().unwrap();
//! assert_eq!(result.tick, 0);
//! ```

use crate::conversion::derive_from_approved;
use crate::core::clock::{Clock, TimestampMs, DEFAULT_TICK_PERIOD_MS};
use crate::lifecycle::{advance_orders, advance_quotes};
use crate::models::event::{Event, EventLog};
use crate::models::invoice::Invoice;
use crate::models::order::Order;
use crate::models::quote::Quote;
use crate::models::store::EntityStore;
use std::collections::HashSet;
use thiserror::Error;

/// Complete scheduler configuration.
///
/// Carries the fixed tick period and the initial collections. Validated
/// before a store is built so duplicate ids surface as errors rather
/// than panics.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Fixed scheduling period in milliseconds (callers sleep this long
    /// between ticks; the engine only records it)
    pub tick_period_ms: u64,

    /// Initial quote collection
    pub quotes: Vec<Quote>,

    /// Initial order collection
    pub orders: Vec<Order>,

    /// Initial invoice collection
    pub invoices: Vec<Invoice>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
            quotes: Vec::new(),
            orders: Vec::new(),
            invoices: Vec::new(),
        }
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickResult {
    /// Tick number (0-indexed)
    pub tick: usize,

    /// Quotes that moved one stage this tick
    pub quotes_advanced: usize,

    /// Orders that moved one stage this tick
    pub orders_advanced: usize,

    /// Quotes converted into an order and invoice this tick
    pub conversions: usize,
}

/// Simulation error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Snapshot serialization error
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Snapshot failed integrity validation
    #[error("state validation failed: {0}")]
    StateValidation(String),
}

/// Main scheduler owning the simulation state and tick loop.
///
/// The scheduler holds the only mutable reference to the entity store;
/// advancers and the deriver are pure functions over snapshots, and
/// every write is a whole-collection commit. Stopping between ticks can
/// never leave a tick half-applied.
pub struct Scheduler {
    /// Entity collections (quotes, orders, invoices)
    store: EntityStore,

    /// Injected time source
    clock: Box<dyn Clock>,

    /// Fixed scheduling period (milliseconds)
    tick_period_ms: u64,

    /// Event log (all simulation events)
    event_log: EventLog,

    /// Ticks completed since start
    ticks_completed: usize,
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("tick_period_ms", &self.tick_period_ms)
            .field("ticks_completed", &self.ticks_completed)
            .finish_non_exhaustive()
    }
}

impl Scheduler {
    /// Create a scheduler from configuration and a time source.
    ///
    /// # Returns
    ///
    /// * `Ok(Scheduler)` - ready to tick
    /// * `Err(SimulationError::InvalidConfig)` - zero period or
    ///   duplicate ids in an initial collection
    pub fn new(config: SchedulerConfig, clock: Box<dyn Clock>) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let SchedulerConfig {
            tick_period_ms,
            quotes,
            orders,
            invoices,
        } = config;

        Ok(Self {
            store: EntityStore::new(quotes, orders, invoices),
            clock,
            tick_period_ms,
            event_log: EventLog::new(),
            ticks_completed: 0,
        })
    }

    /// Validate configuration.
    fn validate_config(config: &SchedulerConfig) -> Result<(), SimulationError> {
        if config.tick_period_ms == 0 {
            return Err(SimulationError::InvalidConfig(
                "tick_period_ms must be > 0".to_string(),
            ));
        }

        Self::check_unique("quote", config.quotes.iter().map(|q| q.id()))?;
        Self::check_unique("order", config.orders.iter().map(|o| o.id()))?;
        Self::check_unique("invoice", config.invoices.iter().map(|i| i.id()))?;

        Ok(())
    }

    fn check_unique<'a>(
        kind: &str,
        ids: impl Iterator<Item = &'a str>,
    ) -> Result<(), SimulationError> {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(SimulationError::InvalidConfig(format!(
                    "duplicate {} id: {}",
                    kind, id
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the entity store
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Get mutable access to the entity store.
    ///
    /// Primarily for tests and external workflows (manual quote
    /// creation). Direct mutation bypasses the tick pipeline; use with
    /// caution.
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    /// Get the event log
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Ticks completed since start
    pub fn ticks_completed(&self) -> usize {
        self.ticks_completed
    }

    /// Fixed scheduling period in milliseconds
    pub fn tick_period_ms(&self) -> u64 {
        self.tick_period_ms
    }

    /// Restore position and state from a snapshot (see `checkpoint`).
    pub(crate) fn restore_state(&mut self, ticks_completed: usize, store: EntityStore) {
        self.ticks_completed = ticks_completed;
        self.store = store;
    }

    // ========================================================================
    // Tick Loop Implementation
    // ========================================================================

    /// Execute one simulation tick.
    pub fn tick(&mut self) -> Result<TickResult, SimulationError> {
        let tick = self.ticks_completed;
        let now = self.clock.now_ms();
        let today = self.clock.today();

        // STEP 1: QUOTE ADVANCEMENT
        // Pure pass over the committed quotes; at most one stage each.
        let advanced_quotes = advance_quotes(self.store.quotes(), now);
        let quote_events = Self::diff_quotes(tick, self.store.quotes(), &advanced_quotes);
        let quotes_advanced = quote_events.len();
        self.store.commit_quotes(advanced_quotes);
        for event in quote_events {
            self.event_log.log(event);
        }

        // STEP 2: CONVERSION DERIVATION
        // Reaction to the quote commit: runs to completion before order
        // advancement, inside the same tick.
        let derivation = derive_from_approved(
            self.store.quotes(),
            self.store.orders(),
            self.store.invoices(),
            now,
            today,
        );
        let conversions = derivation.conversions.len();
        self.store.commit_quotes(derivation.quotes);
        self.store.commit_orders(derivation.orders);
        self.store.commit_invoices(derivation.invoices);
        for conversion in derivation.conversions {
            self.event_log.log(Event::QuoteConverted {
                tick,
                quote_id: conversion.quote_id,
                order_id: conversion.order_id,
                invoice_id: conversion.invoice_id,
                amount: conversion.amount,
            });
        }

        // STEP 3: ORDER ADVANCEMENT
        // Computed only after derivation, so a just-derived order sees
        // zero elapsed dwell and waits for the next tick.
        let advanced_orders = advance_orders(self.store.orders(), now);
        let order_events = Self::diff_orders(tick, self.store.orders(), &advanced_orders);
        let orders_advanced = order_events.len();
        self.store.commit_orders(advanced_orders);
        for event in order_events {
            self.event_log.log(event);
        }

        // STEP 4: FINALIZE
        self.ticks_completed += 1;
        self.event_log.log(Event::TickCompleted {
            tick,
            quotes_advanced,
            orders_advanced,
            conversions,
        });

        tracing::debug!(
            tick,
            quotes_advanced,
            orders_advanced,
            conversions,
            "tick complete"
        );

        Ok(TickResult {
            tick,
            quotes_advanced,
            orders_advanced,
            conversions,
        })
    }

    /// Run `n` ticks back to back (tests and tools; no pacing).
    pub fn run_ticks(&mut self, n: usize) -> Result<Vec<TickResult>, SimulationError> {
        let mut results = Vec::with_capacity(n);
        for _ in 0..n {
            results.push(self.tick()?);
        }
        Ok(results)
    }

    /// Events for quotes whose status changed between two committed
    /// collections. Advancement preserves order and length, so the
    /// collections zip index-to-index.
    fn diff_quotes(tick: usize, before: &[Quote], after: &[Quote]) -> Vec<Event> {
        before
            .iter()
            .zip(after.iter())
            .filter(|(old, new)| old.status() != new.status())
            .map(|(old, new)| Event::QuoteAdvanced {
                tick,
                quote_id: new.id().to_string(),
                from: old.status().clone(),
                to: new.status().clone(),
            })
            .collect()
    }

    fn diff_orders(tick: usize, before: &[Order], after: &[Order]) -> Vec<Event> {
        before
            .iter()
            .zip(after.iter())
            .filter(|(old, new)| old.status() != new.status())
            .map(|(old, new)| Event::OrderAdvanced {
                tick,
                order_id: new.id().to_string(),
                from: old.status().clone(),
                to: new.status().clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::models::quote::QuoteStatus;
    use chrono::NaiveDate;

    fn quote_awaiting_supplier(now: TimestampMs) -> Quote {
        Quote::new(
            "Q-2023-500".to_string(),
            "Acme HQ".to_string(),
            "London Main".to_string(),
            NaiveDate::from_ymd_opt(2023, 10, 27).unwrap(),
            50_000,
            QuoteStatus::AwaitingSupplierApproval,
            "Alice Smith".to_string(),
            vec![],
            Some(now),
        )
    }

    #[test]
    fn test_zero_period_rejected() {
        let config = SchedulerConfig {
            tick_period_ms: 0,
            ..Default::default()
        };
        let result = Scheduler::new(config, Box::new(ManualClock::new(0)));
        assert!(matches!(
            result,
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_duplicate_quote_id_rejected() {
        let config = SchedulerConfig {
            quotes: vec![quote_awaiting_supplier(0), quote_awaiting_supplier(0)],
            ..Default::default()
        };
        let err = Scheduler::new(config, Box::new(ManualClock::new(0))).unwrap_err();
        assert_eq!(
            err,
            SimulationError::InvalidConfig("duplicate quote id: Q-2023-500".to_string())
        );
    }

    #[test]
    fn test_tick_advances_quote_after_dwell() {
        let clock = ManualClock::new(0);
        let config = SchedulerConfig {
            quotes: vec![quote_awaiting_supplier(0)],
            ..Default::default()
        };
        let mut scheduler = Scheduler::new(config, Box::new(clock.clone())).unwrap();

        // Within dwell: nothing moves
        clock.set(4_000);
        let result = scheduler.tick().unwrap();
        assert_eq!(result.quotes_advanced, 0);

        // Past dwell: one step
        clock.set(5_001);
        let result = scheduler.tick().unwrap();
        assert_eq!(result.quotes_advanced, 1);
        assert_eq!(
            *scheduler.store().get_quote("Q-2023-500").unwrap().status(),
            QuoteStatus::AwaitingCustomerApproval
        );
    }

    #[test]
    fn test_tick_numbers_increment() {
        let mut scheduler =
            Scheduler::new(SchedulerConfig::default(), Box::new(ManualClock::new(0))).unwrap();

        let results = scheduler.run_ticks(3).unwrap();
        let ticks: Vec<usize> = results.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![0, 1, 2]);
        assert_eq!(scheduler.ticks_completed(), 3);
    }

    #[test]
    fn test_tick_completed_event_logged() {
        let mut scheduler =
            Scheduler::new(SchedulerConfig::default(), Box::new(ManualClock::new(0))).unwrap();
        scheduler.tick().unwrap();

        let events = scheduler.event_log().events_of_type("TickCompleted");
        assert_eq!(events.len(), 1);
    }
}
