//! Timetable entry model.
//!
//! An entry is one scheduled lecture occupying a single grid slot. Entries
//! reference subjects, teachers, and class groups by id; the references are
//! not enforced to resolve, and validation tolerates dangling ones.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TimeSlot;

/// Engine-assigned identity of one placed lecture.
///
/// Ids are allocated by the owning timetable and never reused within it,
/// so an id stays meaningful across moves and updates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntryId(u64);

impl EntryId {
    /// Creates an id from a raw value.
    ///
    /// Normal callers receive ids from the engine; constructing one by hand
    /// is only needed when bulk-loading prebuilt entries.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One scheduled lecture: a subject taught by a teacher in one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Engine-assigned identity.
    pub id: EntryId,
    /// Scheduled subject.
    pub subject_id: String,
    /// Teacher delivering the lecture.
    pub teacher_id: String,
    /// Grid coordinate this lecture occupies.
    pub slot: TimeSlot,
    /// Class scope; `None` is the implicit single-class grid.
    pub class_id: Option<String>,
}

impl TimetableEntry {
    /// Creates an unscoped entry.
    pub fn new(
        id: EntryId,
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
        slot: TimeSlot,
    ) -> Self {
        Self {
            id,
            subject_id: subject_id.into(),
            teacher_id: teacher_id.into(),
            slot,
            class_id: None,
        }
    }

    /// Scopes the entry to a class group.
    pub fn with_class(mut self, class_id: impl Into<String>) -> Self {
        self.class_id = Some(class_id.into());
        self
    }

    /// Whether this entry belongs to the given class scope.
    #[inline]
    pub fn in_scope(&self, scope: Option<&str>) -> bool {
        self.class_id.as_deref() == scope
    }
}
