#![forbid(unsafe_code)]

//! Registry error taxonomy.
//!
//! Every variant is a local, recoverable rejection: the registry never
//! mutates state before validating, so a returned error means "nothing
//! changed". Absence (`NotFound`) and invalid transitions
//! (`AlreadyOccupied` / `AlreadyVacant`) are distinct variants so callers
//! can report them without a second lookup.

/// Rejections surfaced by [`TableRegistry`](crate::TableRegistry) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Creation requested with a non-positive capacity.
    InvalidCapacity(i32),
    /// No table with this id exists.
    NotFound(u32),
    /// Seat requested on a table that already has a party.
    AlreadyOccupied(u32),
    /// Vacate requested on a table that is already free.
    AlreadyVacant(u32),
    /// Seat requested with an empty party label.
    EmptyParty,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCapacity(cap) => write!(f, "invalid capacity: {cap}"),
            Self::NotFound(id) => write!(f, "table {id} not found"),
            Self::AlreadyOccupied(id) => write!(f, "table {id} is already occupied"),
            Self::AlreadyVacant(id) => write!(f, "table {id} is already free"),
            Self::EmptyParty => write!(f, "party name must not be empty"),
        }
    }
}

impl std::error::Error for RegistryError {}
