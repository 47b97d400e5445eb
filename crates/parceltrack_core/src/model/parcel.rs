//! Parcel domain model.
//!
//! # Responsibility
//! - Define the canonical shipment record persisted by the repository.
//! - Provide the status vocabulary shared by core and its callers.
//!
//! # Invariants
//! - `number` is stable and never reused for another parcel.
//! - `status` is an open set of strings; only `registered` gates mutation.
//! - `created_at` is RFC3339 text and never changes after creation.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a parcel row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ParcelNumber = i64;

/// Identifier of the client a parcel belongs to.
pub type ClientId = i64;

/// Initial status of every parcel; the only status under which the address
/// may change or the row may be deleted.
pub const STATUS_REGISTERED: &str = "registered";

/// Status of a parcel handed over for delivery.
pub const STATUS_SENT: &str = "sent";

/// Status of a parcel that reached its recipient.
pub const STATUS_DELIVERED: &str = "delivered";

/// Canonical shipment record.
///
/// The status set is deliberately open: the store accepts any string and the
/// core imposes no transition table. Only [`STATUS_REGISTERED`] carries
/// semantics, as the gate for address changes and deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Store-assigned key. `0` until the parcel has been added.
    pub number: ParcelNumber,
    /// Owning client, set at creation.
    pub client: ClientId,
    /// Current lifecycle status.
    pub status: String,
    /// Delivery address. Mutable only while `status == registered`.
    pub address: String,
    /// Creation timestamp as RFC3339 text, provided by the caller.
    pub created_at: String,
}

impl Parcel {
    /// Creates a parcel in `registered` status with no assigned number yet.
    ///
    /// # Invariants
    /// - `number` starts as `0` and is only meaningful after `add`.
    /// - `status` starts as [`STATUS_REGISTERED`].
    pub fn new(
        client: ClientId,
        address: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            number: 0,
            client,
            status: STATUS_REGISTERED.to_string(),
            address: address.into(),
            created_at: created_at.into(),
        }
    }

    /// Returns whether this parcel is still mutable (address) and deletable.
    pub fn is_registered(&self) -> bool {
        self.status == STATUS_REGISTERED
    }
}

#[cfg(test)]
mod tests {
    use super::{Parcel, STATUS_REGISTERED, STATUS_SENT};

    #[test]
    fn new_parcel_starts_registered_with_no_number() {
        let parcel = Parcel::new(1000, "test", "2024-01-01T00:00:00Z");
        assert_eq!(parcel.number, 0);
        assert_eq!(parcel.client, 1000);
        assert_eq!(parcel.status, STATUS_REGISTERED);
        assert!(parcel.is_registered());
    }

    #[test]
    fn is_registered_tracks_status_value() {
        let mut parcel = Parcel::new(1, "addr", "2024-01-01T00:00:00Z");
        parcel.status = STATUS_SENT.to_string();
        assert!(!parcel.is_registered());
    }

    #[test]
    fn serde_shape_uses_plain_field_names() {
        let parcel = Parcel {
            number: 7,
            client: 1000,
            status: STATUS_REGISTERED.to_string(),
            address: "test".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };

        let json = serde_json::to_value(&parcel).expect("parcel should serialize");
        assert_eq!(json["number"], 7);
        assert_eq!(json["client"], 1000);
        assert_eq!(json["status"], "registered");
        assert_eq!(json["address"], "test");
        assert_eq!(json["created_at"], "2024-01-01T00:00:00Z");
    }
}
