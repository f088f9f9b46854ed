//! Quote stage advancer
//!
//! Pure transformation over the quote collection: each quote with a
//! running dwell clock advances at most one step along the approval
//! chain once its dwell time has elapsed. No I/O, no side effects.
//!
//! The chain is linear with no branching and no backward transitions:
//!
//! ```text
//! Awaiting Supplier Approval --5s--> Awaiting Customer Approval
//! Awaiting Customer Approval --10s-> Checking Credit
//! Checking Credit ----------10s----> Checking Site
//! Checking Site -----------10s----> Approved (terminal here;
//!                                    conversion takes over)
//! ```

use crate::core::clock::TimestampMs;
use crate::models::quote::{Quote, QuoteStatus};

/// Dwell before a quote leaves supplier approval.
pub const SUPPLIER_APPROVAL_DWELL_MS: TimestampMs = 5_000;

/// Dwell for each of the remaining approval stages.
pub const APPROVAL_STAGE_DWELL_MS: TimestampMs = 10_000;

/// Transition table for the quote approval chain.
///
/// Returns `(dwell, next)` for chain states, `None` for terminal states
/// (`Approved`, `Converted`) and for unrecognized statuses. The table is
/// total: every status maps to either a transition or "no transition",
/// so the advancer cannot fail.
pub fn quote_transition(status: &QuoteStatus) -> Option<(TimestampMs, QuoteStatus)> {
    match status {
        QuoteStatus::AwaitingSupplierApproval => Some((
            SUPPLIER_APPROVAL_DWELL_MS,
            QuoteStatus::AwaitingCustomerApproval,
        )),
        QuoteStatus::AwaitingCustomerApproval => {
            Some((APPROVAL_STAGE_DWELL_MS, QuoteStatus::CheckingCredit))
        }
        QuoteStatus::CheckingCredit => Some((APPROVAL_STAGE_DWELL_MS, QuoteStatus::CheckingSite)),
        QuoteStatus::CheckingSite => Some((APPROVAL_STAGE_DWELL_MS, QuoteStatus::Approved)),
        QuoteStatus::Approved | QuoteStatus::Converted | QuoteStatus::Other(_) => None,
    }
}

/// Advance a single quote by at most one step.
///
/// A quote without `status_changed_at` is inert and returned unchanged
/// regardless of `now`; so is any quote in a terminal or unrecognized
/// status, or one whose dwell has not yet elapsed. At most one
/// transition is applied no matter how much time has passed, so the
/// pipeline stays observable stage by stage.
pub fn advance_quote(quote: &Quote, now: TimestampMs) -> Quote {
    let Some(changed_at) = quote.status_changed_at() else {
        return quote.clone();
    };

    let Some((dwell, next)) = quote_transition(quote.status()) else {
        return quote.clone();
    };

    if now - changed_at > dwell {
        quote.advanced_to(next, now)
    } else {
        quote.clone()
    }
}

/// Advance every quote in the collection by at most one step.
///
/// Returns a replacement collection; element order is preserved.
pub fn advance_quotes(quotes: &[Quote], now: TimestampMs) -> Vec<Quote> {
    quotes.iter().map(|q| advance_quote(q, now)).collect()
}
