//! Teacher-subject assignment.
//!
//! Maps every subject to exactly one teacher before placement begins,
//! balancing load by remaining availability capacity.
//!
//! # Algorithm
//!
//! 1. Sort subjects by weekly lecture target, descending (stable: ties
//!    keep seeded order).
//! 2. Award each subject to the teacher with the highest remaining
//!    capacity. Capacity starts at the size of the teacher's availability
//!    set and drops by the subject's weekly target on every award; ties go
//!    to the earliest-seeded teacher.
//!
//! Single-pass list balancing: awards are never revisited, so the result
//! is balanced rather than optimal. Capacity may go negative when weekly
//! targets exceed availability; placement deals with that later.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies" (LPT list
//! scheduling, the same largest-first greedy family).

use std::collections::HashMap;

use crate::error::ScheduleError;
use crate::models::{Subject, Teacher};

/// Maps each subject id to one teacher id, balancing load by remaining
/// availability capacity.
///
/// Pure with respect to the timetable: the map touches no grid state.
/// Every subject receives a teacher, even when capacities run out.
///
/// # Errors
/// [`ScheduleError::NoTeachersAvailable`] when `teachers` is empty.
pub fn assign_teachers(
    subjects: &[Subject],
    teachers: &[Teacher],
) -> Result<HashMap<String, String>, ScheduleError> {
    if teachers.is_empty() {
        return Err(ScheduleError::NoTeachersAvailable);
    }

    // Heaviest subjects first; stable sort keeps seeded order on ties.
    let mut order: Vec<usize> = (0..subjects.len()).collect();
    order.sort_by(|&a, &b| subjects[b].weekly_lectures.cmp(&subjects[a].weekly_lectures));

    let mut capacity: Vec<i64> = teachers
        .iter()
        .map(|t| t.availability_count() as i64)
        .collect();
    let mut assignment = HashMap::with_capacity(subjects.len());

    for &subject_idx in &order {
        let subject = &subjects[subject_idx];

        let mut best = 0;
        for idx in 1..capacity.len() {
            if capacity[idx] > capacity[best] {
                best = idx;
            }
        }

        capacity[best] -= i64::from(subject.weekly_lectures);
        assignment.insert(subject.id.clone(), teachers[best].id.clone());
    }

    log::debug!(
        "assigned {} subjects across {} teachers",
        assignment.len(),
        teachers.len()
    );
    Ok(assignment)
}
