//! Conversion deriver
//!
//! Reacts to the committed quote collection: every quote currently in
//! `Approved` is converted exactly once into a new order and a new
//! invoice, and the source quote is marked `Converted`. The scheduler
//! invokes this synchronously after each quote commit, so the reaction
//! completes inside the same tick that produced the approval.
//!
//! Exactly-once follows from the state machine: `Converted` quotes are
//! excluded from the scan, and the three replacement collections are
//! returned as one unit for the scheduler to commit together. A second
//! pass over the result derives nothing.
//!
//! CRITICAL: All money values are i64 (pence)

use crate::core::clock::TimestampMs;
use crate::models::ids;
use crate::models::invoice::{Invoice, InvoiceStatus};
use crate::models::order::Order;
use crate::models::quote::Quote;
use chrono::{Days, NaiveDate};

/// Fixed VAT rate in basis points (20%).
pub const VAT_RATE_BPS: i64 = 2_000;

/// Days until a derived invoice falls due.
pub const INVOICE_DUE_DAYS: u64 = 30;

/// Payment method stamped on derived invoices.
pub const INVOICE_METHOD: &str = "Direct Debit";

/// VAT owed on a net amount, rounding down to the penny.
pub fn vat_of(amount: i64) -> i64 {
    amount * VAT_RATE_BPS / 10_000
}

/// Billing period label for a date, e.g. "Oct 2023".
pub fn period_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Record of one quote converted during a derivation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Source quote
    pub quote_id: String,

    /// Derived order
    pub order_id: String,

    /// Derived invoice
    pub invoice_id: String,

    /// Net amount carried onto the invoice (i64 pence)
    pub amount: i64,
}

/// Result of one derivation pass: the three replacement collections and
/// the conversions performed. Committed by the scheduler as one unit.
#[derive(Debug, Clone)]
pub struct Derivation {
    /// Replacement quote collection (approved quotes now `Converted`)
    pub quotes: Vec<Quote>,

    /// Replacement order collection (derived orders prepended)
    pub orders: Vec<Order>,

    /// Replacement invoice collection (derived invoices prepended)
    pub invoices: Vec<Invoice>,

    /// One record per converted quote, in scan order
    pub conversions: Vec<Conversion>,
}

/// Derive orders and invoices from every currently-approved quote.
///
/// For each `Approved` quote:
/// 1. a new order: `Submitted`, the quote's site, item-name snapshots,
///    dwell clock started at `now`;
/// 2. a new invoice: `Due`, net amount = quote value, 20% VAT, due in
///    30 days, paid by direct debit;
/// 3. the source quote becomes `Converted` with no other field change.
///
/// The deriver never re-reads live product data — conversion works
/// entirely from the quote's item snapshots, so a deleted product cannot
/// block it. All previously existing orders and invoices are preserved.
///
/// # Example
/// ```rust,ignore
/// let derivation = derive_from_approved(
///     store.quotes(), store.orders(), store.invoices(), now, today,
/// );
/// store.commit_quotes(derivation.quotes);
/// store.commit_orders(derivation.orders);
/// store.commit_invoices(derivation.invoices);
/// ```
pub fn derive_from_approved(
    quotes: &[Quote],
    orders: &[Order],
    invoices: &[Invoice],
    now: TimestampMs,
    today: NaiveDate,
) -> Derivation {
    let mut new_quotes = Vec::with_capacity(quotes.len());
    let mut new_orders: Vec<Order> = Vec::new();
    let mut new_invoices: Vec<Invoice> = Vec::new();
    let mut conversions = Vec::new();

    let due_date = today
        .checked_add_days(Days::new(INVOICE_DUE_DAYS))
        .unwrap_or(today);

    for quote in quotes {
        if !quote.is_approved() {
            new_quotes.push(quote.clone());
            continue;
        }

        let order_id = ids::new_order_id();
        let invoice_id = ids::new_invoice_id();

        let order = Order::derived(
            order_id.clone(),
            quote.id().to_string(),
            quote.site().to_string(),
            today,
            quote
                .items()
                .iter()
                .map(|item| item.product_name().to_string())
                .collect(),
            now,
        );

        let amount = quote.value();
        let invoice = Invoice::new(
            invoice_id.clone(),
            Some(order_id.clone()),
            Some(quote.customer_name().to_string()),
            period_label(today),
            amount,
            vat_of(amount),
            InvoiceStatus::Due,
            due_date,
            INVOICE_METHOD.to_string(),
        );

        tracing::info!(
            quote_id = quote.id(),
            order_id = %order_id,
            invoice_id = %invoice_id,
            amount,
            "quote converted"
        );

        new_orders.push(order);
        new_invoices.push(invoice);
        new_quotes.push(quote.converted());
        conversions.push(Conversion {
            quote_id: quote.id().to_string(),
            order_id,
            invoice_id,
            amount,
        });
    }

    // Derived entities are prepended, matching the portal's newest-first
    // ordering; all pre-existing orders and invoices are preserved.
    new_orders.extend(orders.iter().cloned());
    new_invoices.extend(invoices.iter().cloned());

    Derivation {
        quotes: new_quotes,
        orders: new_orders,
        invoices: new_invoices,
        conversions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::OrderStatus;
    use crate::models::quote::{QuoteItem, QuoteStatus};

    fn approved_quote() -> Quote {
        Quote::new(
            "Q-2023-001".to_string(),
            "Acme HQ".to_string(),
            "London Main".to_string(),
            NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
            50_000,
            QuoteStatus::Approved,
            "Alice Smith".to_string(),
            vec![QuoteItem::new(
                "qi-1".to_string(),
                "PROD-001".to_string(),
                "Fibre 900".to_string(),
                1,
                50_000,
            )],
            None,
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 27).unwrap()
    }

    #[test]
    fn test_vat_rounds_down_to_the_penny() {
        assert_eq!(vat_of(50_000), 10_000);
        assert_eq!(vat_of(101), 20); // 20.2p rounds down
        assert_eq!(vat_of(0), 0);
    }

    #[test]
    fn test_period_label() {
        assert_eq!(period_label(today()), "Oct 2023");
    }

    #[test]
    fn test_approved_quote_derives_order_and_invoice() {
        let derivation = derive_from_approved(&[approved_quote()], &[], &[], 42_000, today());

        assert_eq!(derivation.conversions.len(), 1);
        assert_eq!(derivation.orders.len(), 1);
        assert_eq!(derivation.invoices.len(), 1);

        let order = &derivation.orders[0];
        assert_eq!(*order.status(), OrderStatus::Submitted);
        assert_eq!(order.site(), "London Main");
        assert_eq!(order.quote_id(), Some("Q-2023-001"));
        assert_eq!(order.items(), ["Fibre 900".to_string()]);
        assert_eq!(order.status_changed_at(), Some(42_000));
        assert_eq!(order.submitted_date(), today());

        let invoice = &derivation.invoices[0];
        assert_eq!(invoice.order_id(), Some(order.id()));
        assert_eq!(invoice.customer_name(), Some("Acme HQ"));
        assert_eq!(invoice.amount(), 50_000);
        assert_eq!(invoice.tax(), 10_000);
        assert_eq!(invoice.total(), 60_000);
        assert_eq!(*invoice.status(), InvoiceStatus::Due);
        assert_eq!(invoice.period(), "Oct 2023");
        assert_eq!(
            invoice.due_date(),
            NaiveDate::from_ymd_opt(2023, 11, 26).unwrap()
        );
        assert_eq!(invoice.method(), "Direct Debit");

        assert_eq!(
            *derivation.quotes[0].status(),
            QuoteStatus::Converted
        );
    }

    #[test]
    fn test_second_pass_derives_nothing() {
        let first = derive_from_approved(&[approved_quote()], &[], &[], 42_000, today());
        let second = derive_from_approved(
            &first.quotes,
            &first.orders,
            &first.invoices,
            43_000,
            today(),
        );

        assert!(second.conversions.is_empty());
        assert_eq!(second.orders.len(), 1);
        assert_eq!(second.invoices.len(), 1);
    }

    #[test]
    fn test_existing_orders_and_invoices_preserved() {
        let existing_order = Order::new(
            "ORD-9001".to_string(),
            None,
            OrderStatus::Active,
            "London Main".to_string(),
            NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
            None,
            vec!["Cloud Voice Express".to_string()],
            None,
        );
        let existing_invoice = Invoice::new(
            "INV-2023-09".to_string(),
            None,
            None,
            "Sep 2023".to_string(),
            124_550,
            24_910,
            InvoiceStatus::Paid,
            NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            "Direct Debit".to_string(),
        );

        let derivation = derive_from_approved(
            &[approved_quote()],
            &[existing_order.clone()],
            &[existing_invoice.clone()],
            42_000,
            today(),
        );

        // Derived entities prepend; existing ones survive untouched
        assert_eq!(derivation.orders.len(), 2);
        assert_eq!(derivation.orders[1], existing_order);
        assert_eq!(derivation.invoices.len(), 2);
        assert_eq!(derivation.invoices[1], existing_invoice);
    }

    #[test]
    fn test_non_approved_quotes_pass_through() {
        let pending = approved_quote().advanced_to(QuoteStatus::CheckingCredit, 1_000);
        let derivation = derive_from_approved(&[pending.clone()], &[], &[], 42_000, today());

        assert!(derivation.conversions.is_empty());
        assert_eq!(derivation.quotes[0], pending);
    }

    #[test]
    fn test_conversion_does_not_reset_dwell_clock() {
        let mut quote = approved_quote();
        quote = quote.advanced_to(QuoteStatus::Approved, 9_000);

        let derivation = derive_from_approved(&[quote], &[], &[], 42_000, today());
        assert_eq!(derivation.quotes[0].status_changed_at(), Some(9_000));
    }
}
