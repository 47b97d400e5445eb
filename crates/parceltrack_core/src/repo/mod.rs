//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract callers program against.
//! - Isolate SQLite query details from everything above this layer.
//!
//! # Invariants
//! - Guarded mutations are enforced in a single qualified statement, never
//!   via read-then-write.
//! - Repository APIs return semantic errors (`NotFound`, `Precondition`) in
//!   addition to DB transport errors.

pub mod parcel_repo;
