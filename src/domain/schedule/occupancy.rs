use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::domain::schedule::time_slot::TimeSlot;

/// Write-once record of which (resource, slot) pairs are taken during one run.
///
/// Keys are explicit `(resource id, slot)` pairs; entries are never removed.
#[derive(Debug, Clone)]
pub struct OccupancyTable<K> {
    booked: HashSet<(K, TimeSlot)>,
}

impl<K: Copy + Eq + Hash + Debug> OccupancyTable<K> {
    pub fn new() -> Self {
        OccupancyTable { booked: HashSet::new() }
    }

    pub fn is_free(&self, resource: K, slot: &TimeSlot) -> bool {
        !self.booked.contains(&(resource, *slot))
    }

    /// Marks `resource` as booked in `slot`.
    ///
    /// # Returns
    /// `true` if the pair was free before; `false` if it was already taken (a warning is logged).
    pub fn mark(&mut self, resource: K, slot: &TimeSlot) -> bool {
        if self.booked.insert((resource, *slot)) {
            true
        } else {
            log::warn!("Attempted to book {:?} twice in slot {}. Occupancy was not changed.", resource, slot);
            false
        }
    }
}

impl<K: Copy + Eq + Hash + Debug> Default for OccupancyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}
