#![forbid(unsafe_code)]

//! Domain model for the mesa floor manager.
//!
//! This crate owns the in-memory state of a restaurant floor:
//!
//! - [`Table`] - one table record (identity, capacity, occupancy)
//! - [`TableRegistry`] - the ordered, id-keyed collection of tables
//! - [`RegistryError`] - recoverable rejections surfaced by the registry
//! - [`OrderBook`] - the companion order list with four interchangeable
//!   storage disciplines ([`Discipline`])
//!
//! Everything here is synchronous and process-local. The registry is the
//! sole mutator of its records; enumeration hands out immutable views, so a
//! presentation layer can never bypass the registry's invariants.

pub mod error;
pub mod orders;
pub mod registry;
pub mod table;

pub use error::RegistryError;
pub use orders::{Discipline, Order, OrderBook};
pub use registry::TableRegistry;
pub use table::Table;
