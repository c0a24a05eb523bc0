//! Trip transaction ledger (append-only, chronologically ordered).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod ledger;
pub mod transaction;

pub use ledger::{EarningsSummary, Ledger};
pub use transaction::{NewTransaction, Transaction};
