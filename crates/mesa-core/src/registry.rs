#![forbid(unsafe_code)]

//! Ordered, id-keyed table registry.
//!
//! Storage is a `Vec<Table>` in creation order. The original floor manager
//! kept a hand-rolled singly linked chain here; its only structural
//! operations are append-at-end, scan-to-find, and splice-out-by-id, so a
//! growable vector covers them without pointer juggling.
//!
//! Identity discipline: ids start at 1 and only ever grow. Removing a table
//! does not free its id, and a table created afterwards is appended at the
//! end with a fresh id (the sequence is never resorted). [`clear`] is the
//! one operation that resets the counter.
//!
//! [`clear`]: TableRegistry::clear

use crate::error::RegistryError;
use crate::table::Table;

/// The ordered collection owning all [`Table`] records.
///
/// The registry is the sole mutator: enumeration returns immutable views,
/// so invariants (unique ids, vacant ⇒ empty party) cannot be broken from
/// outside.
#[derive(Debug, Clone)]
pub struct TableRegistry {
    tables: Vec<Table>,
    next_id: u32,
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRegistry {
    /// Create an empty registry. The first table will get id 1.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a new table with the given capacity.
    ///
    /// Rejects `capacity <= 0` before touching any state, so a failed
    /// create never advances the id counter. Returns a snapshot of the new
    /// record.
    pub fn create(&mut self, capacity: i32) -> Result<Table, RegistryError> {
        if capacity <= 0 {
            return Err(RegistryError::InvalidCapacity(capacity));
        }
        let table = Table::new(self.next_id, capacity as u32);
        self.next_id += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(id = table.id, capacity, "table created");
        self.tables.push(table.clone());
        Ok(table)
    }

    /// Remove the table with the given id.
    ///
    /// Returns whether a table was removed. Absence is a normal outcome,
    /// not a fault; the registry is unchanged when this returns `false`.
    pub fn remove(&mut self, id: u32) -> bool {
        let Some(idx) = self.tables.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tables.remove(idx);
        #[cfg(feature = "tracing")]
        tracing::debug!(id, "table removed");
        true
    }

    /// Look up a table by id. O(n) scan; the floor holds tens of tables.
    pub fn find(&self, id: u32) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Seat a party at a table.
    ///
    /// Fails with [`RegistryError::NotFound`] for an unknown id,
    /// [`RegistryError::AlreadyOccupied`] if someone is already seated
    /// (the existing party is never overwritten), and
    /// [`RegistryError::EmptyParty`] for a blank label.
    pub fn seat(&mut self, id: u32, party: &str) -> Result<(), RegistryError> {
        let party = party.trim();
        if party.is_empty() {
            return Err(RegistryError::EmptyParty);
        }
        let table = self
            .tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        if table.occupied {
            return Err(RegistryError::AlreadyOccupied(id));
        }
        table.occupied = true;
        table.party = party.to_string();
        #[cfg(feature = "tracing")]
        tracing::debug!(id, party, "table seated");
        Ok(())
    }

    /// Free a table, clearing its party label.
    ///
    /// Fails with [`RegistryError::NotFound`] for an unknown id and
    /// [`RegistryError::AlreadyVacant`] if the table is already free.
    pub fn vacate(&mut self, id: u32) -> Result<(), RegistryError> {
        let table = self
            .tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        if !table.occupied {
            return Err(RegistryError::AlreadyVacant(id));
        }
        table.occupied = false;
        table.party.clear();
        #[cfg(feature = "tracing")]
        tracing::debug!(id, "table vacated");
        Ok(())
    }

    /// All tables in creation order, as an immutable view.
    #[inline]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Number of tables on the floor.
    #[inline]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if the floor is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Number of currently occupied tables.
    pub fn occupied_count(&self) -> usize {
        self.tables.iter().filter(|t| t.occupied).count()
    }

    /// Remove every table and reset the id counter to 1.
    pub fn clear(&mut self) {
        self.tables.clear();
        self.next_id = 1;
        #[cfg(feature = "tracing")]
        tracing::debug!("registry cleared");
    }
}
