use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

use gosvg_core::{Cents, Clock, DriverId, TimeWindow, TransactionId};

use crate::transaction::{NewTransaction, Transaction};

/// Count and sum of a driver's transactions inside a window.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    pub count: u64,
    pub total_cents: Cents,
}

#[derive(Debug, Default)]
struct LedgerState {
    records: Vec<Transaction>,
    last_sequence: u64,
}

/// Append-only store of trip transactions, ordered by insertion.
///
/// Ids and timestamps are assigned under the write lock, so ledger order,
/// id order, and `created_at` order always agree. `created_at` never goes
/// backwards even if the clock does.
pub struct Ledger {
    clock: Arc<dyn Clock>,
    state: RwLock<LedgerState>,
}

impl core::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ledger").field("len", &self.len()).finish()
    }
}

impl Ledger {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            state: RwLock::new(LedgerState::default()),
        }
    }

    // Critical sections never panic mid-mutation, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, LedgerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LedgerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a validated transaction, assigning the next id and the current time.
    ///
    /// Returns the stored record by value.
    pub fn append(&self, new: NewTransaction) -> Transaction {
        let mut state = self.write();

        let now = self.clock.now();
        let created_at = match state.records.last() {
            Some(prev) if prev.created_at > now => prev.created_at,
            _ => now,
        };

        state.last_sequence += 1;
        let tx = Transaction {
            id: TransactionId::from_sequence(state.last_sequence),
            driver_id: new.driver_id,
            vehicle_id: new.vehicle_id,
            amount: new.amount,
            passenger_id: new.passenger_id,
            created_at,
        };
        state.records.push(tx.clone());

        tracing::debug!(
            transaction_id = %tx.id,
            driver_id = %tx.driver_id,
            amount_cents = tx.amount.get(),
            "ledger append"
        );

        tx
    }

    /// Count and sum of `driver_id`'s transactions with `created_at` in `window`.
    ///
    /// An unknown driver or an empty window yields zeroes.
    pub fn earnings_in_window(&self, driver_id: &DriverId, window: TimeWindow) -> EarningsSummary {
        let state = self.read();

        // Records are sorted by `created_at`; skip straight to the window start.
        let first = state
            .records
            .partition_point(|tx| tx.created_at < window.start);

        let mut summary = EarningsSummary::default();
        for tx in state.records[first..]
            .iter()
            .take_while(|tx| tx.created_at < window.end)
            .filter(|tx| &tx.driver_id == driver_id)
        {
            summary.count += 1;
            summary.total_cents = summary.total_cents.saturating_add(tx.amount);
        }
        summary
    }

    /// Earnings since local midnight, in the host's timezone.
    pub fn earnings_today(&self, driver_id: &DriverId) -> EarningsSummary {
        self.earnings_today_in(driver_id, &Local)
    }

    /// Earnings over `[midnight, now]` with midnight taken in `tz`.
    pub fn earnings_today_in<Tz: TimeZone>(&self, driver_id: &DriverId, tz: &Tz) -> EarningsSummary {
        let window = TimeWindow::today(self.clock.now(), tz);
        self.earnings_in_window(driver_id, window)
    }

    /// All of a driver's transactions, in ledger order.
    pub fn transactions_for_driver(&self, driver_id: &DriverId) -> Vec<Transaction> {
        self.read()
            .records
            .iter()
            .filter(|tx| &tx.driver_id == driver_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every record and restart ids at 1 (test isolation).
    pub fn reset(&self) {
        let mut state = self.write();
        *state = LedgerState::default();
    }
}
