//! Greedy slot placement.
//!
//! Fills a weekly grid with lecture instances, spreading each subject's
//! repeats across days.
//!
//! # Algorithm
//!
//! 1. Sort subjects by weekly target, descending (stable: ties keep
//!    seeded order).
//! 2. Pass over that order repeatedly. Each pass places at most one
//!    lecture per below-target subject:
//!    - preferred day = the domain day holding the fewest lectures of
//!      this subject so far (ties: earliest day in domain order);
//!    - scan the preferred day's periods ascending, then the remaining
//!      days in domain order, and take the first slot that is unfilled,
//!      inside the teacher's availability, and not otherwise booked for
//!      the teacher;
//!    - a subject with no placeable slot stays short for this pass.
//! 3. Stop when every subject reached its target, or after `max_passes`
//!    passes. The ceiling is a termination bound for saturated inputs,
//!    not an error; unmet targets surface as validation issues later.
//!
//! Deterministic throughout: no randomness, every scan follows domain
//! order.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling", §3 (sequential
//! constructive methods).

use std::collections::{HashMap, HashSet};

use crate::error::ScheduleError;
use crate::models::{EntryId, SlotDomain, Subject, Teacher, TimeSlot, TimetableEntry, Weekday};

use super::assign_teachers;

/// Default pass ceiling, generous against pathological weekly targets.
const DEFAULT_MAX_PASSES: usize = 100;

/// One placement produced by the scheduler.
///
/// Scope-free: the caller materializes entries (and a class scope) from
/// these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Placed subject.
    pub subject_id: String,
    /// Teacher delivering the lecture.
    pub teacher_id: String,
    /// Grid coordinate.
    pub slot: TimeSlot,
}

/// Greedy deterministic day/period placement scheduler.
///
/// Best-effort: when the grid saturates before all weekly targets are
/// met, the shortfall is left for validation to report, never forced.
///
/// # Example
///
/// ```
/// use timegrid::models::{SlotDomain, Subject, Teacher};
/// use timegrid::scheduler::{assign_teachers, GreedyScheduler};
///
/// let domain = SlotDomain::weekdays(6);
/// let subjects = vec![Subject::new("math").with_weekly_lectures(3)];
/// let teachers = vec![Teacher::new("kim").available_every_slot(&domain)];
/// let assignment = assign_teachers(&subjects, &teachers).unwrap();
///
/// let placements = GreedyScheduler::new().schedule(&subjects, &teachers, &domain, &assignment);
/// assert_eq!(placements.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    max_passes: usize,
}

impl GreedyScheduler {
    /// Creates a scheduler with the default pass ceiling.
    pub fn new() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Sets the pass ceiling.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Schedules one grid with no outside teacher bookings.
    pub fn schedule(
        &self,
        subjects: &[Subject],
        teachers: &[Teacher],
        domain: &SlotDomain,
        assignment: &HashMap<String, String>,
    ) -> Vec<Placement> {
        self.schedule_with_occupancy(subjects, teachers, domain, assignment, &HashSet::new())
    }

    /// Schedules one grid, honoring teacher bookings made elsewhere.
    ///
    /// `occupied` holds (teacher id, slot) pairs already taken outside this
    /// grid; in multi-class use these are the placements of previously
    /// scheduled classes. Slots a teacher is booked into elsewhere are
    /// never reused for that teacher, while the grid itself starts empty.
    pub fn schedule_with_occupancy(
        &self,
        subjects: &[Subject],
        teachers: &[Teacher],
        domain: &SlotDomain,
        assignment: &HashMap<String, String>,
        occupied: &HashSet<(String, TimeSlot)>,
    ) -> Vec<Placement> {
        let teacher_by_id: HashMap<&str, &Teacher> =
            teachers.iter().map(|t| (t.id.as_str(), t)).collect();

        let mut order: Vec<usize> = (0..subjects.len()).collect();
        order.sort_by(|&a, &b| subjects[b].weekly_lectures.cmp(&subjects[a].weekly_lectures));

        let mut busy: HashMap<String, HashSet<TimeSlot>> = HashMap::new();
        for (teacher_id, slot) in occupied {
            busy.entry(teacher_id.clone()).or_default().insert(*slot);
        }

        let mut placements: Vec<Placement> = Vec::new();
        let mut filled: HashSet<TimeSlot> = HashSet::new();
        let mut placed: Vec<u32> = vec![0; subjects.len()];
        let mut day_counts: Vec<HashMap<Weekday, u32>> = vec![HashMap::new(); subjects.len()];

        for _pass in 0..self.max_passes {
            if all_targets_met(subjects, &placed) {
                break;
            }

            for &subject_idx in &order {
                let subject = &subjects[subject_idx];
                if placed[subject_idx] >= subject.weekly_lectures {
                    continue;
                }

                // Unassigned or dangling teachers leave the subject short;
                // validation reports the shortfall.
                let teacher = match assignment
                    .get(&subject.id)
                    .and_then(|id| teacher_by_id.get(id.as_str()))
                {
                    Some(&t) => t,
                    None => continue,
                };

                let slot =
                    match find_slot(domain, teacher, &day_counts[subject_idx], &filled, &busy) {
                        Some(s) => s,
                        None => continue,
                    };

                filled.insert(slot);
                busy.entry(teacher.id.clone()).or_default().insert(slot);
                *day_counts[subject_idx].entry(slot.day).or_insert(0) += 1;
                placed[subject_idx] += 1;
                log::trace!("placed '{}' with '{}' at {}", subject.id, teacher.id, slot);

                placements.push(Placement {
                    subject_id: subject.id.clone(),
                    teacher_id: teacher.id.clone(),
                    slot,
                });
            }
        }

        let shortfall: u32 = subjects
            .iter()
            .zip(&placed)
            .map(|(s, &p)| s.weekly_lectures.saturating_sub(p))
            .sum();
        if shortfall > 0 {
            log::debug!(
                "placement stopped with {shortfall} lectures unplaced ({} placed)",
                placements.len()
            );
        } else {
            log::debug!("placement complete: {} lectures", placements.len());
        }

        placements
    }
}

impl Default for GreedyScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Assigns teachers and fills a fresh single-class grid.
///
/// Convenience for callers without a [`Timetable`](crate::Timetable):
/// [`assign_teachers`] followed by [`GreedyScheduler::schedule`], with
/// entry ids numbered from 1 in placement order.
///
/// # Errors
/// [`ScheduleError::NoTeachersAvailable`] when `teachers` is empty.
pub fn generate_schedule(
    subjects: &[Subject],
    teachers: &[Teacher],
    domain: &SlotDomain,
) -> Result<Vec<TimetableEntry>, ScheduleError> {
    let assignment = assign_teachers(subjects, teachers)?;
    let placements = GreedyScheduler::new().schedule(subjects, teachers, domain, &assignment);
    Ok(placements
        .into_iter()
        .enumerate()
        .map(|(idx, p)| {
            TimetableEntry::new(EntryId::new(idx as u64 + 1), p.subject_id, p.teacher_id, p.slot)
        })
        .collect())
}

fn all_targets_met(subjects: &[Subject], placed: &[u32]) -> bool {
    subjects
        .iter()
        .zip(placed)
        .all(|(s, &p)| p >= s.weekly_lectures)
}

/// Finds the slot for one lecture: preferred day first, then the rest of
/// the week in domain order.
fn find_slot(
    domain: &SlotDomain,
    teacher: &Teacher,
    day_counts: &HashMap<Weekday, u32>,
    filled: &HashSet<TimeSlot>,
    busy: &HashMap<String, HashSet<TimeSlot>>,
) -> Option<TimeSlot> {
    // min_by_key keeps the first minimum, so ties resolve to the earliest
    // day in domain order.
    let preferred = domain
        .days()
        .iter()
        .copied()
        .min_by_key(|day| day_counts.get(day).copied().unwrap_or(0))?;

    if let Some(slot) = first_open_period(domain, preferred, teacher, filled, busy) {
        return Some(slot);
    }
    for &day in domain.days() {
        if day == preferred {
            continue;
        }
        if let Some(slot) = first_open_period(domain, day, teacher, filled, busy) {
            return Some(slot);
        }
    }
    None
}

fn first_open_period(
    domain: &SlotDomain,
    day: Weekday,
    teacher: &Teacher,
    filled: &HashSet<TimeSlot>,
    busy: &HashMap<String, HashSet<TimeSlot>>,
) -> Option<TimeSlot> {
    for period in domain.periods() {
        let slot = TimeSlot::new(day, period);
        if filled.contains(&slot) {
            continue;
        }
        if !teacher.is_available(slot) {
            continue;
        }
        if busy
            .get(teacher.id.as_str())
            .map_or(false, |slots| slots.contains(&slot))
        {
            continue;
        }
        return Some(slot);
    }
    None
}
