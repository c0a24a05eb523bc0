//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: `Cents::new(300)`
/// equals any other `Cents::new(300)`. To "modify" one, build a new value.
///
/// Contrast with [`crate::Entity`], whose equality is anchored on an identifier
/// (a `Wallet` keyed by its driver, a `Transaction` keyed by its ledger id).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
