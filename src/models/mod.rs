//! Timetable domain models.
//!
//! Provides the core data types for weekly class timetabling: the slot
//! grid, taught subjects, teachers with per-slot availability, class
//! groups, placed entries, and derived validation issues.
//!
//! # Identity
//!
//! | Type | Identity | Assigned by |
//! |------|----------|-------------|
//! | `Subject`, `Teacher`, `ClassGroup` | `id: String` | caller |
//! | `TimetableEntry` | `EntryId` | engine, never reused |
//! | `ValidationIssue` | `IssueKey` (rule + entities) | validation pass |

mod class;
mod entry;
mod issue;
mod slot;
mod subject;
mod teacher;

pub use class::ClassGroup;
pub use entry::{EntryId, TimetableEntry};
pub use issue::{IssueKey, RuleCode, Severity, ValidationIssue};
pub use slot::{SlotDomain, TimeSlot, Weekday};
pub use subject::Subject;
pub use teacher::Teacher;
