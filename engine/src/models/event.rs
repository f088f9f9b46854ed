//! Event logging for simulation auditing.
//!
//! Every state change the scheduler commits is recorded as an `Event`.
//! The log is the simulation's audit trail: it answers what happened to
//! a given quote or order, and when, without replaying the run.

use crate::models::order::OrderStatus;
use crate::models::quote::QuoteStatus;

/// Simulation event capturing a committed state change.
///
/// All events include the tick number for temporal ordering. Events are
/// logged in the order they are committed within a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A quote moved one step along the approval chain
    QuoteAdvanced {
        tick: usize,
        quote_id: String,
        from: QuoteStatus,
        to: QuoteStatus,
    },

    /// An order moved one step along the provisioning chain
    OrderAdvanced {
        tick: usize,
        order_id: String,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// An approved quote was converted into an order and an invoice
    QuoteConverted {
        tick: usize,
        quote_id: String,
        order_id: String,
        invoice_id: String,
        amount: i64,
    },

    /// One scheduler tick finished
    TickCompleted {
        tick: usize,
        quotes_advanced: usize,
        orders_advanced: usize,
        conversions: usize,
    },
}

impl Event {
    /// Get the tick number when this event occurred
    pub fn tick(&self) -> usize {
        match self {
            Event::QuoteAdvanced { tick, .. } => *tick,
            Event::OrderAdvanced { tick, .. } => *tick,
            Event::QuoteConverted { tick, .. } => *tick,
            Event::TickCompleted { tick, .. } => *tick,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::QuoteAdvanced { .. } => "QuoteAdvanced",
            Event::OrderAdvanced { .. } => "OrderAdvanced",
            Event::QuoteConverted { .. } => "QuoteConverted",
            Event::TickCompleted { .. } => "TickCompleted",
        }
    }

    /// Get quote id if the event relates to a specific quote
    pub fn quote_id(&self) -> Option<&str> {
        match self {
            Event::QuoteAdvanced { quote_id, .. } => Some(quote_id),
            Event::QuoteConverted { quote_id, .. } => Some(quote_id),
            _ => None,
        }
    }

    /// Get order id if the event relates to a specific order
    pub fn order_id(&self) -> Option<&str> {
        match self {
            Event::OrderAdvanced { order_id, .. } => Some(order_id),
            Event::QuoteConverted { order_id, .. } => Some(order_id),
            _ => None,
        }
    }
}

/// Event log for storing and querying simulation events.
///
/// A simple wrapper around `Vec<Event>` with convenience queries.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events for a specific tick
    pub fn events_at_tick(&self, tick: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.tick() == tick).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific quote
    pub fn events_for_quote(&self, quote_id: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.quote_id() == Some(quote_id))
            .collect()
    }

    /// Get events for a specific order
    pub fn events_for_order(&self, order_id: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.order_id() == Some(order_id))
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
