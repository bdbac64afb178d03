//! Weekly class timetable scheduling and validation.
//!
//! Assigns teachers to subjects, places weekly lectures into a day/period
//! grid, guards every fine-grained edit against the hard constraints, and
//! re-validates the evolving timetable against a fixed rule sequence.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Subject`, `Teacher`, `ClassGroup`,
//!   `TimeSlot`, `SlotDomain`, `TimetableEntry`, `ValidationIssue`
//! - **`timetable`**: The engine object — owns all state, applies guarded
//!   mutations, regenerates and revalidates
//! - **`scheduler`**: Teacher assignment and greedy day/period placement
//! - **`validation`**: The composable rule engine behind `revalidate`
//! - **`scoring`**: Distribution, workload, and difficulty metrics
//! - **`error`**: Structural rejection outcomes
//!
//! # Design
//!
//! The engine is deliberately best-effort: placement is a deterministic
//! greedy heuristic without backtracking, so tight inputs under-fill and
//! the shortfall surfaces as validation errors rather than solver
//! failures. All operations are synchronous and run to completion; the
//! library performs no I/O.
//!
//! # Example
//!
//! ```
//! use timegrid::Timetable;
//! use timegrid::models::{SlotDomain, Subject, Teacher};
//!
//! let domain = SlotDomain::weekdays(6);
//! let mut timetable = Timetable::new(domain.clone())
//!     .with_subject(Subject::new("math").with_name("Mathematics").with_weekly_lectures(5))
//!     .with_teacher(Teacher::new("kim").with_name("Ms. Kim").available_every_slot(&domain));
//!
//! let placed = timetable.generate_schedule().unwrap();
//! assert_eq!(placed, 5);
//! assert!(timetable.revalidate().is_empty());
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod models;
pub mod scheduler;
pub mod scoring;
pub mod timetable;
pub mod validation;

pub use error::ScheduleError;
pub use timetable::Timetable;
