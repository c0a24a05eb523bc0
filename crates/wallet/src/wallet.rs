use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gosvg_core::{Cents, Currency, DomainResult, DriverId, Entity};

/// Settlement state of a wallet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletState {
    /// Funds earned and awaiting payout.
    Accrued,
    /// Nothing owed.
    Settled,
}

/// A driver's running settlement balance.
///
/// Fields are private: every instance satisfies
/// `total_earned == available + total_paid_out`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    driver_id: DriverId,
    currency: Currency,
    available_cents: Cents,
    total_earned_cents: Cents,
    total_paid_out_cents: Cents,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_payout_at: Option<DateTime<Utc>>,
}

impl Wallet {
    /// Zero wallet for a driver with no history.
    pub fn new(driver_id: DriverId) -> Self {
        Self {
            driver_id,
            currency: Currency::default(),
            available_cents: Cents::ZERO,
            total_earned_cents: Cents::ZERO,
            total_paid_out_cents: Cents::ZERO,
            last_payout_at: None,
        }
    }

    pub fn driver_id(&self) -> &DriverId {
        &self.driver_id
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn available_cents(&self) -> Cents {
        self.available_cents
    }

    pub fn total_earned_cents(&self) -> Cents {
        self.total_earned_cents
    }

    pub fn total_paid_out_cents(&self) -> Cents {
        self.total_paid_out_cents
    }

    pub fn last_payout_at(&self) -> Option<DateTime<Utc>> {
        self.last_payout_at
    }

    pub fn state(&self) -> WalletState {
        if self.available_cents.is_zero() {
            WalletState::Settled
        } else {
            WalletState::Accrued
        }
    }

    /// Conservation check: everything earned is either available or paid out.
    pub fn is_balanced(&self) -> bool {
        self.available_cents
            .checked_add(self.total_paid_out_cents)
            .is_ok_and(|sum| sum == self.total_earned_cents)
    }

    /// Add earnings. Both totals are computed before either is written, so an
    /// overflow leaves the wallet untouched.
    pub(crate) fn credit(&mut self, amount: Cents) -> DomainResult<()> {
        let available = self.available_cents.checked_add(amount)?;
        let earned = self.total_earned_cents.checked_add(amount)?;

        self.available_cents = available;
        self.total_earned_cents = earned;
        Ok(())
    }

    /// Sweep the whole available balance into the paid-out total.
    ///
    /// Returns the amount swept. An empty wallet is left exactly as it was,
    /// including `last_payout_at`.
    pub(crate) fn payout_all(&mut self, at: DateTime<Utc>) -> Cents {
        let amount = self.available_cents;
        if amount.is_zero() {
            return Cents::ZERO;
        }

        // Cannot overflow: paid_out + available == earned, which fits in u64.
        self.total_paid_out_cents = self.total_paid_out_cents.saturating_add(amount);
        self.available_cents = Cents::ZERO;
        self.last_payout_at = Some(at);
        amount
    }
}

impl Entity for Wallet {
    type Id = DriverId;

    fn id(&self) -> &Self::Id {
        &self.driver_id
    }
}
