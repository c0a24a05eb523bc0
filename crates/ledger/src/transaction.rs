use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gosvg_core::{Cents, DomainResult, DriverId, Entity, PassengerId, TransactionId, VehicleId};

/// A recorded trip payment (immutable once appended).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub driver_id: DriverId,
    pub vehicle_id: VehicleId,
    /// Amount in cents.
    pub amount: Cents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_id: Option<PassengerId>,
    /// Assigned by the ledger at insertion time.
    pub created_at: DateTime<Utc>,
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validated input for [`crate::Ledger::append`].
///
/// Holding one of these means the amount and identifiers already passed
/// validation, so appending cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub driver_id: DriverId,
    pub vehicle_id: VehicleId,
    pub amount: Cents,
    pub passenger_id: Option<PassengerId>,
}

impl NewTransaction {
    pub fn new(
        driver_id: DriverId,
        vehicle_id: VehicleId,
        amount: Cents,
        passenger_id: Option<PassengerId>,
    ) -> Self {
        Self {
            driver_id,
            vehicle_id,
            amount,
            passenger_id,
        }
    }

    /// Validate raw caller input: amount first, then identifiers.
    pub fn parse(
        driver_id: &str,
        vehicle_id: &str,
        amount: i64,
        passenger_id: Option<&str>,
    ) -> DomainResult<Self> {
        let amount = Cents::try_from(amount)?;
        let driver_id = DriverId::parse(driver_id)?;
        let vehicle_id = VehicleId::parse(vehicle_id)?;
        let passenger_id = passenger_id.map(PassengerId::parse).transpose()?;

        Ok(Self::new(driver_id, vehicle_id, amount, passenger_id))
    }
}
