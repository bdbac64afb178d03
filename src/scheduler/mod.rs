//! Teacher assignment and greedy lecture placement.
//!
//! Two stages turn seeded subjects and teachers into a filled grid:
//!
//! 1. [`assign_teachers`] maps every subject to one teacher, balancing
//!    load by remaining availability capacity.
//! 2. [`GreedyScheduler`] places lecture instances into day/period slots,
//!    spreading each subject's repeats across days.
//!
//! Both stages are deterministic and best-effort: an over-constrained
//! input yields a partial grid whose gaps the validation rules report,
//! never a panic or an unbounded search.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

mod assign;
mod greedy;

pub use assign::assign_teachers;
pub use greedy::{generate_schedule, GreedyScheduler, Placement};
