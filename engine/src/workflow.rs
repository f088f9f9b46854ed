//! Quote-creation workflow
//!
//! Builds a new quote from the reference catalogue. This is the only
//! entry point that establishes the creation-time invariant
//! `value == sum(item.total_cost)`: each requested line is resolved
//! against the product list, the name and unit cost are snapshotted
//! onto the line, and the quote value is the sum of line totals. The
//! lifecycle engine never re-reads the catalogue afterwards.

use crate::core::clock::TimestampMs;
use crate::models::ids;
use crate::models::quote::{Quote, QuoteItem, QuoteStatus};
use crate::models::reference::{Product, Site};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building a quote.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("quote must have at least one line item")]
    EmptyQuote,

    #[error("unknown product id: {0}")]
    UnknownProduct(String),

    #[error("quantity must be at least 1 for product {0}")]
    InvalidQuantity(String),
}

/// A requested quote line: product id and quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteLine {
    pub product_id: String,
    pub quantity: u32,
}

/// Build a new quote from the catalogue.
///
/// The quote enters the pipeline at `Awaiting Supplier Approval` with
/// its dwell clock started at `now`, so the stage advancer picks it up
/// on the next tick.
pub fn create_quote(
    customer_name: &str,
    site: &Site,
    owner: &str,
    lines: &[QuoteLine],
    products: &[Product],
    now: TimestampMs,
    today: NaiveDate,
) -> Result<Quote, WorkflowError> {
    if lines.is_empty() {
        return Err(WorkflowError::EmptyQuote);
    }

    let mut items = Vec::with_capacity(lines.len());
    for line in lines {
        if line.quantity == 0 {
            return Err(WorkflowError::InvalidQuantity(line.product_id.clone()));
        }

        let product = products
            .iter()
            .find(|p| p.id == line.product_id)
            .ok_or_else(|| WorkflowError::UnknownProduct(line.product_id.clone()))?;

        items.push(QuoteItem::new(
            ids::new_item_id(),
            product.id.clone(),
            product.name.clone(),
            line.quantity,
            product.unit_cost,
        ));
    }

    let value = items.iter().map(|item| item.total_cost()).sum();

    Ok(Quote::new(
        ids::new_quote_id(),
        customer_name.to_string(),
        site.name.clone(),
        today,
        value,
        QuoteStatus::AwaitingSupplierApproval,
        owner.to_string(),
        items,
        Some(now),
    ))
}
