#![forbid(unsafe_code)]

//! The table record.

/// One table on the floor.
///
/// Plain data; all mutation goes through
/// [`TableRegistry`](crate::TableRegistry). Invariant: a vacant table has an
/// empty party label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Registry-assigned identity. Starts at 1, never reused.
    pub id: u32,
    /// Seats at this table. Immutable after creation.
    pub capacity: u32,
    /// Whether a party is currently seated.
    pub occupied: bool,
    /// Name of the seated party; empty when vacant.
    pub party: String,
}

impl Table {
    pub(crate) fn new(id: u32, capacity: u32) -> Self {
        Self {
            id,
            capacity,
            occupied: false,
            party: String::new(),
        }
    }

    /// Check if the table is free to seat a party.
    #[inline]
    pub fn is_free(&self) -> bool {
        !self.occupied
    }
}
