//! Driver wallets: per-driver settlement balances and payout sweeps.
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod engine;
pub mod wallet;

pub use engine::AccountingEngine;
pub use wallet::{Wallet, WalletState};
