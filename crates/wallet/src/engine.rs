use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use gosvg_core::{Cents, Clock, DomainResult, DriverId};

use crate::wallet::Wallet;

/// Accounting engine: owns every driver wallet.
///
/// One mutex guards the whole wallet map, so `credit`, `snapshot`, and
/// `payout_all` are linearizable across all drivers. Wallets are created on
/// first reference, reads included.
pub struct AccountingEngine {
    clock: Arc<dyn Clock>,
    wallets: Mutex<HashMap<DriverId, Wallet>>,
}

impl core::fmt::Debug for AccountingEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AccountingEngine")
            .field("wallets", &self.lock().len())
            .finish()
    }
}

impl AccountingEngine {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            wallets: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<DriverId, Wallet>> {
        self.wallets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add `amount` to the driver's available and lifetime-earned balances.
    pub fn credit(&self, driver_id: &DriverId, amount: Cents) -> DomainResult<Wallet> {
        let mut wallets = self.lock();
        let wallet = wallets
            .entry(driver_id.clone())
            .or_insert_with(|| Wallet::new(driver_id.clone()));

        wallet.credit(amount)?;

        tracing::debug!(
            driver_id = %driver_id,
            amount_cents = amount.get(),
            available_cents = wallet.available_cents().get(),
            "wallet credited"
        );

        Ok(wallet.clone())
    }

    /// Copy of the driver's wallet; an unseen driver gets a fresh zero wallet.
    pub fn snapshot(&self, driver_id: &DriverId) -> Wallet {
        self.lock()
            .entry(driver_id.clone())
            .or_insert_with(|| Wallet::new(driver_id.clone()))
            .clone()
    }

    /// Pay out the entire available balance.
    ///
    /// With nothing available the wallet comes back unchanged.
    pub fn payout_all(&self, driver_id: &DriverId) -> Wallet {
        let mut wallets = self.lock();
        let wallet = wallets
            .entry(driver_id.clone())
            .or_insert_with(|| Wallet::new(driver_id.clone()));

        let swept = wallet.payout_all(self.clock.now());
        if !swept.is_zero() {
            tracing::debug!(
                driver_id = %driver_id,
                amount_cents = swept.get(),
                "wallet paid out"
            );
        }

        wallet.clone()
    }

    /// Forget every wallet (test isolation).
    pub fn reset(&self) {
        self.lock().clear();
    }
}
