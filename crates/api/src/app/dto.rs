use serde::Deserialize;

use gosvg_core::{Cents, DomainError, DomainResult, DriverId, PassengerId, VehicleId};
use gosvg_ledger::{EarningsSummary, NewTransaction, Transaction};
use gosvg_wallet::Wallet;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /transactions`.
///
/// Every field is untyped at the JSON level so that a missing or mistyped id
/// or amount is reported as a domain validation error rather than a decode
/// failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[serde(default)]
    pub driver_id: serde_json::Value,
    #[serde(default)]
    pub vehicle_id: serde_json::Value,
    /// Cents, e.g. 300 = 3.00 XCD.
    #[serde(default)]
    pub amount: serde_json::Value,
    #[serde(default)]
    pub passenger_id: serde_json::Value,
}

impl CreateTransactionRequest {
    pub fn into_new_transaction(self) -> DomainResult<NewTransaction> {
        let amount = Cents::try_from(&self.amount)?;
        let driver_id =
            DriverId::parse(identifier("driverId", self.driver_id)?.unwrap_or_default())?;
        let vehicle_id =
            VehicleId::parse(identifier("vehicleId", self.vehicle_id)?.unwrap_or_default())?;
        let passenger_id = identifier("passengerId", self.passenger_id)?
            .map(PassengerId::parse)
            .transpose()?;

        Ok(NewTransaction::new(driver_id, vehicle_id, amount, passenger_id))
    }
}

/// `null`/absent is `None`; anything other than a JSON string is rejected.
fn identifier(field: &str, raw: serde_json::Value) -> DomainResult<Option<String>> {
    match raw {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Err(DomainError::invalid_identifier(format!(
            "{field} must be a string"
        ))),
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn transaction_created_to_json(tx: Transaction) -> serde_json::Value {
    serde_json::json!({
        "status": "created",
        "transaction": tx,
    })
}

pub fn transactions_to_json(items: Vec<Transaction>) -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "items": items,
    })
}

pub fn earnings_today_to_json(driver_id: &DriverId, summary: EarningsSummary) -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "driverId": driver_id,
        "currency": gosvg_core::Currency::Xcd,
        "totalCents": summary.total_cents,
        "total": summary.total_cents.as_major_units(),
        "count": summary.count,
    })
}

pub fn wallet_to_json(wallet: Wallet) -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "wallet": wallet,
    })
}
