//! Checkpoint - Save/Load Simulation State
//!
//! Serializes the complete scheduler state so a run can pause and
//! resume without losing a tick. Because ticks are all-or-nothing,
//! a snapshot taken between ticks is always a consistent state.
//!
//! # Critical Invariants
//!
//! - **Id Uniqueness**: no duplicate ids within a collection
//! - **Financial Identity**: every invoice satisfies total == amount + tax
//! - **Hash Matching**: state can only be restored when its recomputed
//!   hash matches the recorded one

use crate::models::invoice::Invoice;
use crate::models::order::Order;
use crate::models::quote::Quote;
use crate::models::store::EntityStore;
use crate::scheduler::engine::{Scheduler, SimulationError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Complete scheduler state snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Ticks completed at the time of the snapshot
    pub ticks_completed: usize,

    /// All tracked quotes
    pub quotes: Vec<Quote>,

    /// All tracked orders
    pub orders: Vec<Order>,

    /// All issued invoices
    pub invoices: Vec<Invoice>,

    /// SHA256 hash over the three collections (for tamper detection)
    pub state_hash: String,
}

/// Compute a deterministic SHA256 hash over the entity collections.
///
/// Struct serialization is field-ordered and the collections are
/// ordered vectors, so the JSON encoding is canonical without extra
/// key sorting.
pub fn compute_state_hash(
    quotes: &[Quote],
    orders: &[Order],
    invoices: &[Invoice],
) -> Result<String, SimulationError> {
    let json = serde_json::to_string(&(quotes, orders, invoices))
        .map_err(|e| SimulationError::Serialization(format!("state serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}

/// Validate snapshot integrity.
///
/// Checks id uniqueness per collection, the invoice financial identity,
/// and that the recorded hash matches the recomputed one.
pub fn validate_snapshot(snapshot: &StateSnapshot) -> Result<(), SimulationError> {
    fn check_unique<'a>(
        kind: &str,
        ids: impl Iterator<Item = &'a str>,
    ) -> Result<(), SimulationError> {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(SimulationError::StateValidation(format!(
                    "duplicate {} id: {}",
                    kind, id
                )));
            }
        }
        Ok(())
    }

    check_unique("quote", snapshot.quotes.iter().map(|q| q.id()))?;
    check_unique("order", snapshot.orders.iter().map(|o| o.id()))?;
    check_unique("invoice", snapshot.invoices.iter().map(|i| i.id()))?;

    for invoice in &snapshot.invoices {
        if invoice.total() != invoice.amount() + invoice.tax() {
            return Err(SimulationError::StateValidation(format!(
                "invoice {} violates total == amount + tax",
                invoice.id()
            )));
        }
    }

    let hash = compute_state_hash(&snapshot.quotes, &snapshot.orders, &snapshot.invoices)?;
    if hash != snapshot.state_hash {
        return Err(SimulationError::StateValidation(format!(
            "state hash mismatch: expected {}, got {}",
            snapshot.state_hash, hash
        )));
    }

    Ok(())
}

impl Scheduler {
    /// Capture the current state as a snapshot.
    pub fn snapshot(&self) -> Result<StateSnapshot, SimulationError> {
        let quotes = self.store().quotes().to_vec();
        let orders = self.store().orders().to_vec();
        let invoices = self.store().invoices().to_vec();
        let state_hash = compute_state_hash(&quotes, &orders, &invoices)?;

        Ok(StateSnapshot {
            ticks_completed: self.ticks_completed(),
            quotes,
            orders,
            invoices,
            state_hash,
        })
    }

    /// Restore state from a snapshot, replacing current collections.
    ///
    /// The snapshot is validated first; a tampered or inconsistent
    /// snapshot is rejected and current state is left untouched.
    pub fn restore(&mut self, snapshot: StateSnapshot) -> Result<(), SimulationError> {
        validate_snapshot(&snapshot)?;

        let StateSnapshot {
            ticks_completed,
            quotes,
            orders,
            invoices,
            ..
        } = snapshot;

        self.restore_state(ticks_completed, EntityStore::new(quotes, orders, invoices));
        Ok(())
    }
}
