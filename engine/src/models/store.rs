//! Entity store
//!
//! The store exclusively owns the three mutable collections — quotes,
//! orders, invoices — that the simulation operates on. Readers get
//! slices of the committed collections; writers replace a collection
//! wholesale (copy-on-write), so an observer never sees a partially
//! updated collection and no entity is mutated after commit.
//!
//! # Critical Invariants
//!
//! 1. **Id Uniqueness**: Each entity id appears at most once per collection
//! 2. **Commit Atomicity**: Reads between commits always see a complete
//!    collection, never a mix of old and new entities
//! 3. **No Shared Mutable Sub-objects**: cross-references (`quote_id`,
//!    `order_id`) are lookup keys, never ownership links

use crate::models::invoice::Invoice;
use crate::models::order::Order;
use crate::models::quote::Quote;
use std::collections::HashSet;

/// Owned collections for the lifecycle simulation.
///
/// # Example
///
/// ```rust
/// use portal_lifecycle_core::EntityStore;
///
/// let store = EntityStore::new(vec![], vec![], vec![]);
/// assert_eq!(store.num_quotes(), 0);
/// assert_eq!(store.num_orders(), 0);
/// assert_eq!(store.num_invoices(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    /// All tracked quotes, in insertion order
    quotes: Vec<Quote>,

    /// All tracked orders, in insertion order (derived orders prepend)
    orders: Vec<Order>,

    /// All issued invoices, in insertion order (derived invoices prepend)
    invoices: Vec<Invoice>,
}

fn assert_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for id in ids {
        assert!(seen.insert(id), "{} id {} already exists", kind, id);
    }
}

impl EntityStore {
    /// Create a store from initial collections.
    ///
    /// # Panics
    /// Panics if any collection contains a duplicate id. Duplicate ids
    /// are a programming error; configuration-level duplicates are
    /// rejected earlier by `SchedulerConfig::validate`.
    pub fn new(quotes: Vec<Quote>, orders: Vec<Order>, invoices: Vec<Invoice>) -> Self {
        assert_unique_ids("quote", quotes.iter().map(|q| q.id()));
        assert_unique_ids("order", orders.iter().map(|o| o.id()));
        assert_unique_ids("invoice", invoices.iter().map(|i| i.id()));

        Self {
            quotes,
            orders,
            invoices,
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Committed quote collection
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Committed order collection
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Committed invoice collection
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Look up a quote by id
    pub fn get_quote(&self, id: &str) -> Option<&Quote> {
        self.quotes.iter().find(|q| q.id() == id)
    }

    /// Look up an order by id
    pub fn get_order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id() == id)
    }

    /// Look up an invoice by id
    pub fn get_invoice(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|i| i.id() == id)
    }

    /// Number of tracked quotes
    pub fn num_quotes(&self) -> usize {
        self.quotes.len()
    }

    /// Number of tracked orders
    pub fn num_orders(&self) -> usize {
        self.orders.len()
    }

    /// Number of issued invoices
    pub fn num_invoices(&self) -> usize {
        self.invoices.len()
    }

    /// Total gross value across all invoices (for invariant checking)
    pub fn invoiced_total(&self) -> i64 {
        self.invoices.iter().map(|i| i.total()).sum()
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Insert a quote (external creation workflow).
    ///
    /// New quotes are prepended, matching the portal's newest-first
    /// presentation order.
    ///
    /// # Panics
    /// Panics if the quote id already exists.
    pub fn add_quote(&mut self, quote: Quote) {
        assert!(
            self.get_quote(quote.id()).is_none(),
            "quote id {} already exists",
            quote.id()
        );
        self.quotes.insert(0, quote);
    }

    /// Insert an order (external creation).
    ///
    /// # Panics
    /// Panics if the order id already exists.
    pub fn add_order(&mut self, order: Order) {
        assert!(
            self.get_order(order.id()).is_none(),
            "order id {} already exists",
            order.id()
        );
        self.orders.insert(0, order);
    }

    /// Insert an invoice (external issuance).
    ///
    /// # Panics
    /// Panics if the invoice id already exists.
    pub fn add_invoice(&mut self, invoice: Invoice) {
        assert!(
            self.get_invoice(invoice.id()).is_none(),
            "invoice id {} already exists",
            invoice.id()
        );
        self.invoices.insert(0, invoice);
    }

    /// Replace the quote collection wholesale.
    pub fn commit_quotes(&mut self, quotes: Vec<Quote>) {
        self.quotes = quotes;
    }

    /// Replace the order collection wholesale.
    pub fn commit_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    /// Replace the invoice collection wholesale.
    pub fn commit_invoices(&mut self, invoices: Vec<Invoice>) {
        self.invoices = invoices;
    }
}
