//! Records with a stable identity.
//!
//! A ledger `Transaction` is identified by the sequence number the ledger
//! assigned it; a `Wallet` by the driver that owns it. Equality of identity
//! does not imply equality of state: a wallet keeps its id across credits and
//! payouts.

/// Anything the system tracks by identity rather than by value.
pub trait Entity {
    /// Identifier type (`TransactionId`, `DriverId`).
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
