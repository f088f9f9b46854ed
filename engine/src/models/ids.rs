//! Fresh entity identifiers.
//!
//! Derived entities get prefixed ids with a short uuid fragment, e.g.
//! `ORD-9F3A2C41`. Uniqueness comes from the uuid; the prefix keeps the
//! portal's id conventions readable.

use uuid::Uuid;

fn short_fragment() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}

/// Fresh quote id, e.g. `Q-4B1D9E02`
pub fn new_quote_id() -> String {
    format!("Q-{}", short_fragment())
}

/// Fresh quote line id, e.g. `qi-4b1d9e02`
pub fn new_item_id() -> String {
    format!("qi-{}", short_fragment().to_lowercase())
}

/// Fresh order id, e.g. `ORD-9F3A2C41`
pub fn new_order_id() -> String {
    format!("ORD-{}", short_fragment())
}

/// Fresh invoice id, e.g. `INV-0C77A1B3`
pub fn new_invoice_id() -> String {
    format!("INV-{}", short_fragment())
}
