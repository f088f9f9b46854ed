//! Domain models: quotes, orders, invoices, reference data, the entity
//! store, and event logging.

pub mod event;
pub mod ids;
pub mod invoice;
pub mod order;
pub mod quote;
pub mod reference;
pub mod store;
