//! Invoice model
//!
//! Invoices are issued once, either by seed data or by converting an
//! approved quote. The simulation never mutates an invoice after
//! creation; payment status changes belong to external billing systems.
//!
//! CRITICAL: All money values are i64 (pence)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Invoice payment status. Serialized as the portal display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    /// Issued, payment not yet received
    Due,

    /// Fully paid
    Paid,

    /// Past due date without full payment
    Overdue,

    /// Partially paid
    PartPaid,

    /// Any status outside the recognized set
    Other(String),
}

impl InvoiceStatus {
    /// Portal display string for this status.
    pub fn as_str(&self) -> &str {
        match self {
            InvoiceStatus::Due => "Due",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::PartPaid => "Part-paid",
            InvoiceStatus::Other(s) => s,
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Due" => InvoiceStatus::Due,
            "Paid" => InvoiceStatus::Paid,
            "Overdue" => InvoiceStatus::Overdue,
            "Part-paid" => InvoiceStatus::PartPaid,
            _ => InvoiceStatus::Other(s),
        }
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A billing invoice.
///
/// # Example
/// ```
/// use portal_lifecycle_core::{Invoice, InvoiceStatus};
/// use chrono::NaiveDate;
///
/// let invoice = Invoice::new(
///     "INV-2023-10".to_string(),
///     None,
///     None,
///     "Oct 2023".to_string(),
///     125_000, // £1,250.00 net
///     25_000,  // 20% VAT
///     InvoiceStatus::Due,
///     NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
///     "Direct Debit".to_string(),
/// );
///
/// assert_eq!(invoice.total(), 150_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique invoice identifier
    id: String,

    /// Billed order id, if any (lookup key only)
    order_id: Option<String>,

    /// Billed customer, if known
    customer_name: Option<String>,

    /// Human-readable billing period label, e.g. "Oct 2023"
    period: String,

    /// Net amount (i64 pence)
    amount: i64,

    /// VAT amount (i64 pence)
    tax: i64,

    /// Gross amount: amount + tax, fixed at creation (i64 pence)
    total: i64,

    /// Payment status
    status: InvoiceStatus,

    /// Payment due date
    due_date: NaiveDate,

    /// Payment method label
    method: String,
}

impl Invoice {
    /// Create an invoice. `total` is computed once as `amount + tax`
    /// and never recomputed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        order_id: Option<String>,
        customer_name: Option<String>,
        period: String,
        amount: i64,
        tax: i64,
        status: InvoiceStatus,
        due_date: NaiveDate,
        method: String,
    ) -> Self {
        Self {
            id,
            order_id,
            customer_name,
            period,
            amount,
            tax,
            total: amount + tax,
            status,
            due_date,
            method,
        }
    }

    /// Get invoice identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get billed order id, if any
    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    /// Get billed customer, if known
    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    /// Get billing period label
    pub fn period(&self) -> &str {
        &self.period
    }

    /// Get net amount (i64 pence)
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Get VAT amount (i64 pence)
    pub fn tax(&self) -> i64 {
        self.tax
    }

    /// Get gross amount (i64 pence)
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Get payment status
    pub fn status(&self) -> &InvoiceStatus {
        &self.status
    }

    /// Get payment due date
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Get payment method label
    pub fn method(&self) -> &str {
        &self.method
    }
}
