//! `gosvg-core` — shared building blocks for the driver earnings core.
//!
//! Pure domain primitives only: identifiers, money, time windows, the clock
//! abstraction, and the error model. No IO.

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;
pub mod window;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{DriverId, PassengerId, TransactionId, VehicleId};
pub use money::{Cents, Currency};
pub use value_object::ValueObject;
pub use window::{local_midnight, TimeWindow};
