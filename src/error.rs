//! Mutation and generation rejection outcomes.
//!
//! These are ordinary return values, not faults: a rejected operation
//! reports the first violated constraint and leaves the timetable exactly
//! as it was.

use thiserror::Error;

use crate::models::{EntryId, TimeSlot};

/// Why a timetable operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The target slot already holds a lecture within the class scope.
    #[error("slot {slot} is already occupied")]
    SlotOccupied {
        /// Requested slot.
        slot: TimeSlot,
    },

    /// The slot is outside the teacher's availability (or the teacher is
    /// unknown, which amounts to the same thing: no availability).
    #[error("teacher '{teacher_id}' is not available at {slot}")]
    TeacherUnavailable {
        /// Requested teacher.
        teacher_id: String,
        /// Requested slot.
        slot: TimeSlot,
    },

    /// The teacher already holds a lecture in the slot, possibly for
    /// another class.
    #[error("teacher '{teacher_id}' is already booked at {slot}")]
    TeacherDoubleBooked {
        /// Requested teacher.
        teacher_id: String,
        /// Requested slot.
        slot: TimeSlot,
    },

    /// No teachers are seeded; assignment has nothing to map onto.
    #[error("no teachers available for assignment")]
    NoTeachersAvailable,

    /// The entry id does not exist in this timetable.
    #[error("unknown timetable entry {id}")]
    UnknownEntry {
        /// Requested entry.
        id: EntryId,
    },
}
