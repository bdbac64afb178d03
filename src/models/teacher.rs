//! Teacher model.
//!
//! A teacher carries an explicit set of slots they can be scheduled into.
//! Availability is a whitelist: an empty set means the teacher can never
//! be placed, and every scheduled entry must sit inside its teacher's set.
//!
//! The set is ordered (`BTreeSet`), so iterating availability is
//! deterministic regardless of insertion order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{SlotDomain, TimeSlot, Weekday};

/// A teacher with per-slot availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Slots this teacher can be scheduled into.
    pub available_slots: BTreeSet<TimeSlot>,
}

impl Teacher {
    /// Creates a teacher with no availability.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            available_slots: BTreeSet::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks one slot as available.
    pub fn with_slot(mut self, day: Weekday, period: u8) -> Self {
        self.available_slots.insert(TimeSlot::new(day, period));
        self
    }

    /// Marks a batch of slots as available.
    pub fn with_slots(mut self, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        self.available_slots.extend(slots);
        self
    }

    /// Marks every slot of the given grid as available.
    pub fn available_every_slot(mut self, domain: &SlotDomain) -> Self {
        self.available_slots.extend(domain.iter());
        self
    }

    /// Whether this teacher can be scheduled at a slot.
    #[inline]
    pub fn is_available(&self, slot: TimeSlot) -> bool {
        self.available_slots.contains(&slot)
    }

    /// Number of available slots.
    ///
    /// Used as the initial load-balancing capacity during assignment.
    pub fn availability_count(&self) -> usize {
        self.available_slots.len()
    }

    /// Name used in human-readable messages; falls back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
