//! Quote model
//!
//! A quote is a priced proposal for a customer site. Quotes move through
//! the approval pipeline (supplier approval, customer approval, credit
//! check, site check) driven by the quote stage advancer, and once
//! `Approved` are converted exactly once into an order and an invoice.
//!
//! CRITICAL: All money values are i64 (pence)

use crate::core::clock::TimestampMs;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Quote lifecycle status.
///
/// Statuses are an explicit finite-state machine: the advancer only
/// recognizes the exact chain states, and everything else — including
/// statuses carried by externally-seeded quotes — is `Other` and inert.
/// Serialized as the human-readable portal strings so out-of-band values
/// round-trip losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuoteStatus {
    /// Waiting for the supplier to confirm pricing and availability
    AwaitingSupplierApproval,

    /// Waiting for the customer to accept the quote
    AwaitingCustomerApproval,

    /// Credit check in progress
    CheckingCredit,

    /// Site serviceability check in progress
    CheckingSite,

    /// Fully approved; eligible for conversion into an order and invoice
    Approved,

    /// Converted into an order and invoice (terminal, never reprocessed)
    Converted,

    /// Any status outside the recognized chain (e.g. seed data `Draft`).
    /// Always inert: the advancer and deriver pass these through.
    Other(String),
}

impl QuoteStatus {
    /// Portal display string for this status.
    pub fn as_str(&self) -> &str {
        match self {
            QuoteStatus::AwaitingSupplierApproval => "Awaiting Supplier Approval",
            QuoteStatus::AwaitingCustomerApproval => "Awaiting Customer Approval",
            QuoteStatus::CheckingCredit => "Checking Credit",
            QuoteStatus::CheckingSite => "Checking Site",
            QuoteStatus::Approved => "Approved",
            QuoteStatus::Converted => "Converted",
            QuoteStatus::Other(s) => s,
        }
    }

    /// Check if this status has no further scheduled transition.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            QuoteStatus::Approved | QuoteStatus::Converted | QuoteStatus::Other(_)
        )
    }
}

impl From<String> for QuoteStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Awaiting Supplier Approval" => QuoteStatus::AwaitingSupplierApproval,
            "Awaiting Customer Approval" => QuoteStatus::AwaitingCustomerApproval,
            "Checking Credit" => QuoteStatus::CheckingCredit,
            "Checking Site" => QuoteStatus::CheckingSite,
            "Approved" => QuoteStatus::Approved,
            "Converted" => QuoteStatus::Converted,
            _ => QuoteStatus::Other(s),
        }
    }
}

impl From<QuoteStatus> for String {
    fn from(status: QuoteStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single priced line on a quote.
///
/// Product name and unit cost are snapshots taken at quote-creation
/// time; the line never re-reads live product data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteItem {
    /// Unique line identifier
    id: String,

    /// Source product id (lookup key, not an ownership link)
    product_id: String,

    /// Product name snapshot
    product_name: String,

    /// Quantity ordered (>= 1)
    quantity: u32,

    /// Unit cost snapshot (i64 pence)
    unit_cost: i64,

    /// Line total: unit_cost * quantity (i64 pence)
    total_cost: i64,
}

impl QuoteItem {
    /// Create a quote line, computing `total_cost` from the snapshot.
    ///
    /// # Panics
    /// Panics if quantity is zero.
    pub fn new(
        id: String,
        product_id: String,
        product_name: String,
        quantity: u32,
        unit_cost: i64,
    ) -> Self {
        assert!(quantity >= 1, "quantity must be at least 1");
        let total_cost = unit_cost * quantity as i64;
        Self {
            id,
            product_id,
            product_name,
            quantity,
            unit_cost,
            total_cost,
        }
    }

    /// Get line identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get source product id
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Get product name snapshot
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Get quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Get unit cost snapshot (i64 pence)
    pub fn unit_cost(&self) -> i64 {
        self.unit_cost
    }

    /// Get line total (i64 pence)
    pub fn total_cost(&self) -> i64 {
        self.total_cost
    }
}

/// A customer quote tracked by the lifecycle engine.
///
/// # Example
/// ```
/// use portal_lifecycle_core::{Quote, QuoteItem, QuoteStatus};
/// use chrono::NaiveDate;
///
/// let quote = Quote::new(
///     "Q-2023-100".to_string(),
///     "Acme HQ".to_string(),
///     "London Main".to_string(),
///     NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
///     4_500, // £45.00 in pence
///     QuoteStatus::AwaitingSupplierApproval,
///     "Alice Smith".to_string(),
///     vec![QuoteItem::new(
///         "qi-1".to_string(),
///         "PROD-001".to_string(),
///         "Fibre 900 Connection".to_string(),
///         1,
///         4_500,
///     )],
///     Some(1_000_000),
/// );
///
/// assert_eq!(quote.value(), 4_500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique quote identifier
    id: String,

    /// Customer display name
    customer_name: String,

    /// Site name, denormalized at creation time
    site: String,

    /// Date the quote was raised
    created_date: NaiveDate,

    /// Net subtotal (i64 pence). Equal to the sum of line totals at
    /// creation time via the quote workflow; not re-validated afterwards.
    value: i64,

    /// Current lifecycle status
    status: QuoteStatus,

    /// Owning salesperson
    owner: String,

    /// Ordered line items
    items: Vec<QuoteItem>,

    /// Timestamp of the last status transition. Absent means the quote
    /// is inert and never auto-advances.
    status_changed_at: Option<TimestampMs>,
}

impl Quote {
    /// Create a quote from its parts.
    ///
    /// Used by seed data and the quote-creation workflow. The workflow
    /// guarantees `value == sum(items.total_cost)`; seed data may carry
    /// values that deliberately break that identity, so it is not
    /// asserted here.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        customer_name: String,
        site: String,
        created_date: NaiveDate,
        value: i64,
        status: QuoteStatus,
        owner: String,
        items: Vec<QuoteItem>,
        status_changed_at: Option<TimestampMs>,
    ) -> Self {
        Self {
            id,
            customer_name,
            site,
            created_date,
            value,
            status,
            owner,
            items,
            status_changed_at,
        }
    }

    /// Get quote identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get customer name
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Get site name
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Get creation date
    pub fn created_date(&self) -> NaiveDate {
        self.created_date
    }

    /// Get net subtotal (i64 pence)
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Get current status
    pub fn status(&self) -> &QuoteStatus {
        &self.status
    }

    /// Get owning salesperson
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get line items
    pub fn items(&self) -> &[QuoteItem] {
        &self.items
    }

    /// Get last status transition timestamp
    pub fn status_changed_at(&self) -> Option<TimestampMs> {
        self.status_changed_at
    }

    /// Sum of line totals (i64 pence)
    pub fn items_value(&self) -> i64 {
        self.items.iter().map(|item| item.total_cost()).sum()
    }

    /// Check if the quote is eligible for conversion
    pub fn is_approved(&self) -> bool {
        self.status == QuoteStatus::Approved
    }

    /// Produce a copy advanced to `next`, restarting the dwell clock.
    ///
    /// Every transition yields a new value; committed quotes are never
    /// mutated in place.
    pub fn advanced_to(&self, next: QuoteStatus, now: TimestampMs) -> Quote {
        let mut quote = self.clone();
        quote.status = next;
        quote.status_changed_at = Some(now);
        quote
    }

    /// Produce a copy marked `Converted`, with no other field change.
    ///
    /// Conversion is not a dwell restart: `status_changed_at` is left
    /// untouched. `Converted` is terminal regardless.
    pub fn converted(&self) -> Quote {
        let mut quote = self.clone();
        quote.status = QuoteStatus::Converted;
        quote
    }
}
