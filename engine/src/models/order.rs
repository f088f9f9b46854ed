//! Order model
//!
//! An order is a provisioning job, created either by seed data or by
//! converting an approved quote. Orders move through the provisioning
//! pipeline (processing, inventory, field agent, infra, installation)
//! driven by the order stage advancer, and finish in `Active`.

use crate::core::clock::TimestampMs;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order provisioning status.
///
/// Only the exact chain states are recognized by the advancer; anything
/// else — including seed statuses such as `Engineer Scheduled` — is
/// `Other` and inert. Serialized as the portal display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// Order received, awaiting processing
    Submitted,

    /// Order validation and enrichment in progress
    Processing,

    /// Stock check against inventory
    InventoryCheck,

    /// Field agent being assigned
    FieldAgentAssign,

    /// Infrastructure procurement in progress
    InfraProcurement,

    /// On-site installation in progress
    Installation,

    /// Installation complete, awaiting activation
    JobDone,

    /// Service live (terminal for the simulation)
    Active,

    /// Any status outside the recognized chain. Always inert.
    Other(String),
}

impl OrderStatus {
    /// Portal display string for this status.
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Submitted => "Submitted",
            OrderStatus::Processing => "Processing",
            OrderStatus::InventoryCheck => "Inventory check",
            OrderStatus::FieldAgentAssign => "Field agent assign",
            OrderStatus::InfraProcurement => "Infra procurement",
            OrderStatus::Installation => "Installation",
            OrderStatus::JobDone => "Job done",
            OrderStatus::Active => "Active",
            OrderStatus::Other(s) => s,
        }
    }

    /// Check if this status has no further scheduled transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Active | OrderStatus::Other(_))
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Submitted" => OrderStatus::Submitted,
            "Processing" => OrderStatus::Processing,
            "Inventory check" => OrderStatus::InventoryCheck,
            "Field agent assign" => OrderStatus::FieldAgentAssign,
            "Infra procurement" => OrderStatus::InfraProcurement,
            "Installation" => OrderStatus::Installation,
            "Job done" => OrderStatus::JobDone,
            "Active" => OrderStatus::Active,
            _ => OrderStatus::Other(s),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A provisioning order tracked by the lifecycle engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier
    id: String,

    /// Source quote id, if converted from a quote (lookup key only)
    quote_id: Option<String>,

    /// Current provisioning status
    status: OrderStatus,

    /// Site name
    site: String,

    /// Date the order was submitted
    submitted_date: NaiveDate,

    /// Booked engineer appointment, if any
    engineer_appointment: Option<String>,

    /// Item name snapshots (not live product references)
    items: Vec<String>,

    /// Timestamp of the last status transition. Absent means the order
    /// is inert and never auto-advances.
    status_changed_at: Option<TimestampMs>,
}

impl Order {
    /// Create an order from its parts (seed data, external creation).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        quote_id: Option<String>,
        status: OrderStatus,
        site: String,
        submitted_date: NaiveDate,
        engineer_appointment: Option<String>,
        items: Vec<String>,
        status_changed_at: Option<TimestampMs>,
    ) -> Self {
        Self {
            id,
            quote_id,
            status,
            site,
            submitted_date,
            engineer_appointment,
            items,
            status_changed_at,
        }
    }

    /// Create an order derived from an approved quote.
    ///
    /// Status starts at `Submitted` with the dwell clock running from
    /// `now`, so the provisioning pipeline picks it up on the next tick.
    pub fn derived(
        id: String,
        quote_id: String,
        site: String,
        submitted_date: NaiveDate,
        items: Vec<String>,
        now: TimestampMs,
    ) -> Self {
        Self {
            id,
            quote_id: Some(quote_id),
            status: OrderStatus::Submitted,
            site,
            submitted_date,
            engineer_appointment: None,
            items,
            status_changed_at: Some(now),
        }
    }

    /// Get order identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get source quote id, if any
    pub fn quote_id(&self) -> Option<&str> {
        self.quote_id.as_deref()
    }

    /// Get current status
    pub fn status(&self) -> &OrderStatus {
        &self.status
    }

    /// Get site name
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Get submission date
    pub fn submitted_date(&self) -> NaiveDate {
        self.submitted_date
    }

    /// Get engineer appointment, if booked
    pub fn engineer_appointment(&self) -> Option<&str> {
        self.engineer_appointment.as_deref()
    }

    /// Get item name snapshots
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Get last status transition timestamp
    pub fn status_changed_at(&self) -> Option<TimestampMs> {
        self.status_changed_at
    }

    /// Produce a copy advanced to `next`, restarting the dwell clock.
    pub fn advanced_to(&self, next: OrderStatus, now: TimestampMs) -> Order {
        let mut order = self.clone();
        order.status = next;
        order.status_changed_at = Some(now);
        order
    }
}
