use std::sync::Arc;

use chrono::{DateTime, Utc};

use gosvg_core::{Clock, DomainResult, DriverId, SystemClock};
use gosvg_ledger::{EarningsSummary, Ledger, NewTransaction, Transaction};
use gosvg_wallet::{AccountingEngine, Wallet};

use crate::config::ApiConfig;

/// The two accounting components plus the policy that links them.
///
/// Each component serializes access to its own state; this type holds no
/// locks of its own.
pub struct AppServices {
    clock: Arc<dyn Clock>,
    ledger: Ledger,
    wallets: AccountingEngine,
    credit_on_submit: bool,
}

impl core::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppServices")
            .field("ledger", &self.ledger)
            .field("wallets", &self.wallets)
            .field("credit_on_submit", &self.credit_on_submit)
            .finish()
    }
}

impl AppServices {
    pub fn new(clock: Arc<dyn Clock>, credit_on_submit: bool) -> Self {
        Self {
            ledger: Ledger::new(clock.clone()),
            wallets: AccountingEngine::new(clock.clone()),
            clock,
            credit_on_submit,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(Arc::new(SystemClock), config.credit_on_submit)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn wallets(&self) -> &AccountingEngine {
        &self.wallets
    }

    /// Record a trip and, when enabled, credit the driver's wallet with it.
    ///
    /// The credit runs first: it is the only step that can fail, so a
    /// rejected submission leaves both the wallet and the ledger untouched.
    ///
    /// The two steps take separate locks. While a submission is in flight a
    /// concurrent wallet read may already include its credit before the
    /// ledger row is visible; once this returns, both reads agree.
    pub fn submit_transaction(&self, new: NewTransaction) -> DomainResult<Transaction> {
        if self.credit_on_submit {
            self.wallets.credit(&new.driver_id, new.amount)?;
        }

        let tx = self.ledger.append(new);
        tracing::info!(
            transaction_id = %tx.id,
            driver_id = %tx.driver_id,
            vehicle_id = %tx.vehicle_id,
            amount_cents = tx.amount.get(),
            credited = self.credit_on_submit,
            "transaction recorded"
        );
        Ok(tx)
    }

    pub fn earnings_today(&self, driver_id: &DriverId) -> EarningsSummary {
        self.ledger.earnings_today(driver_id)
    }

    pub fn transactions_for_driver(&self, driver_id: &DriverId) -> Vec<Transaction> {
        self.ledger.transactions_for_driver(driver_id)
    }

    pub fn wallet(&self, driver_id: &DriverId) -> Wallet {
        self.wallets.snapshot(driver_id)
    }

    pub fn payout(&self, driver_id: &DriverId) -> Wallet {
        let wallet = self.wallets.payout_all(driver_id);
        tracing::info!(
            driver_id = %driver_id,
            total_paid_out_cents = wallet.total_paid_out_cents().get(),
            last_payout_at = ?wallet.last_payout_at(),
            "payout requested"
        );
        wallet
    }

    /// Empty both components (test isolation).
    pub fn reset(&self) {
        self.ledger.reset();
        self.wallets.reset();
    }
}
