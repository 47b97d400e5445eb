//! Embedded DDL for the parcel table.
//!
//! # Responsibility
//! - Create the `parcel` table and its client lookup index when absent.
//!
//! # Invariants
//! - The DDL is idempotent (`IF NOT EXISTS`); re-running it is a no-op.
//! - `number` keys are never recycled (`AUTOINCREMENT`).

use crate::db::DbResult;
use rusqlite::Connection;

/// DDL applied to every connection handed out by this crate.
pub const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the parcel table and index if they do not exist yet.
///
/// Callers that manage their own connections can run this directly instead
/// of going through [`crate::db::open_db`].
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
