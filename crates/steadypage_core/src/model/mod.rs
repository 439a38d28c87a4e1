//! Domain model for paginated datasets.
//!
//! # Responsibility
//! - Define the canonical record shape shared by every backing source.
//! - Keep pagination indifferent to record content.
//!
//! # Invariants
//! - Every record is identified by a stable `RecordIndex` assigned at load.
//! - Deletion removes an index-map key; it never reassigns an index.

pub mod record;
