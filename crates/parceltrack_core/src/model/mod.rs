//! Domain model for parcel tracking.
//!
//! # Responsibility
//! - Define the canonical parcel record used by core persistence logic.
//!
//! # Invariants
//! - Every parcel is identified by a store-assigned `ParcelNumber`.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod parcel;
