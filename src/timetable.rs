//! The timetable engine.
//!
//! [`Timetable`] owns every piece of scheduling state: the seeded
//! subjects, teachers, and class groups, the weekly grid, the placed
//! entries, and the last computed issue list. All reads and writes go
//! through its methods.
//!
//! # Mutation contract
//!
//! Mutations are synchronous and atomic: an operation either commits
//! fully or leaves the state untouched and reports why. Before any
//! commit the hard constraints are checked in a fixed order (slot
//! occupancy in the class scope, teacher availability, cross-scope
//! teacher booking); the first violation wins.
//!
//! Success only guarantees the hard constraints. Quality findings come
//! from [`revalidate`](Timetable::revalidate), which callers run after
//! each logical edit; the issue list changes only there, except that a
//! blocked [`move_entry`](Timetable::move_entry) appends one error
//! describing the refusal.
//!
//! [`load_entries`](Timetable::load_entries) bypasses the guards for
//! migrated or bulk data; the validation rules re-detect any violations
//! it introduces.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{
    ClassGroup, EntryId, IssueKey, RuleCode, SlotDomain, Subject, Teacher, TimeSlot,
    TimetableEntry, ValidationIssue,
};
use crate::scheduler::{self, GreedyScheduler};
use crate::scoring::QualityMetrics;
use crate::validation;

/// A weekly class timetable and the operations that evolve it.
///
/// # Example
///
/// ```
/// use timegrid::Timetable;
/// use timegrid::models::{SlotDomain, Subject, Teacher, TimeSlot, Weekday};
///
/// let domain = SlotDomain::weekdays(6);
/// let mut timetable = Timetable::new(domain.clone())
///     .with_subject(Subject::new("math").with_weekly_lectures(1))
///     .with_teacher(Teacher::new("kim").available_every_slot(&domain));
///
/// let id = timetable
///     .add_entry("math", "kim", TimeSlot::new(Weekday::Monday, 1), None)
///     .unwrap();
/// assert!(timetable.entry(id).is_some());
/// assert!(timetable.revalidate().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timetable {
    subjects: Vec<Subject>,
    teachers: Vec<Teacher>,
    classes: Vec<ClassGroup>,
    domain: SlotDomain,
    entries: Vec<TimetableEntry>,
    issues: Vec<ValidationIssue>,
    next_entry_id: u64,
}

impl Timetable {
    /// Creates an empty timetable over the given grid.
    pub fn new(domain: SlotDomain) -> Self {
        Self {
            subjects: Vec::new(),
            teachers: Vec::new(),
            classes: Vec::new(),
            domain,
            entries: Vec::new(),
            issues: Vec::new(),
            next_entry_id: 1,
        }
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a class group, switching the timetable to multi-class mode.
    pub fn with_class(mut self, class: ClassGroup) -> Self {
        self.classes.push(class);
        self
    }

    // ==================== Seeding ====================

    /// Replaces all subjects.
    pub fn set_subjects(&mut self, subjects: Vec<Subject>) {
        self.subjects = subjects;
    }

    /// Replaces all teachers.
    pub fn set_teachers(&mut self, teachers: Vec<Teacher>) {
        self.teachers = teachers;
    }

    /// Replaces all class groups.
    pub fn set_classes(&mut self, classes: Vec<ClassGroup>) {
        self.classes = classes;
    }

    // ==================== Read access ====================

    /// Seeded subjects.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Seeded teachers.
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// Seeded class groups.
    pub fn classes(&self) -> &[ClassGroup] {
        &self.classes
    }

    /// The weekly grid.
    pub fn domain(&self) -> &SlotDomain {
        &self.domain
    }

    /// All placed entries, in placement order.
    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    /// Issues from the last validation pass, plus any blocked moves since.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Looks up an entry by id.
    pub fn entry(&self, id: EntryId) -> Option<&TimetableEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The entry occupying a slot within a class scope, if any.
    pub fn entry_at(&self, scope: Option<&str>, slot: TimeSlot) -> Option<&TimetableEntry> {
        self.entries
            .iter()
            .find(|e| e.in_scope(scope) && e.slot == slot)
    }

    /// All entries taught by one teacher, across class scopes.
    pub fn entries_for_teacher(&self, teacher_id: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.teacher_id == teacher_id)
            .collect()
    }

    /// All entries of one subject, across class scopes.
    pub fn entries_for_subject(&self, subject_id: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.subject_id == subject_id)
            .collect()
    }

    /// Number of placed entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are placed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the current issue list holds any error.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }

    /// Quality metrics over the current entries.
    pub fn metrics(&self) -> QualityMetrics {
        QualityMetrics::calculate(&self.entries, &self.subjects, &self.teachers, &self.domain)
    }

    // ==================== Mutations ====================

    /// Places one lecture, guarding the hard constraints.
    ///
    /// Checks in order: the slot must be free within the class scope, the
    /// teacher must be available there, and the teacher must not already
    /// hold that slot in any scope. The first violated check is returned
    /// and nothing changes.
    pub fn add_entry(
        &mut self,
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
        slot: TimeSlot,
        class_id: Option<&str>,
    ) -> Result<EntryId, ScheduleError> {
        let subject_id = subject_id.into();
        let teacher_id = teacher_id.into();

        self.check_slot_free(class_id, slot, None)
            .map_err(|e| reject("add_entry", e))?;
        self.check_teacher_fit(&teacher_id, slot, None)
            .map_err(|e| reject("add_entry", e))?;

        let id = self.allocate_id();
        let mut entry = TimetableEntry::new(id, subject_id, teacher_id, slot);
        if let Some(class_id) = class_id {
            entry = entry.with_class(class_id);
        }
        self.entries.push(entry);
        Ok(id)
    }

    /// Deletes an entry; `None` when the id is unknown.
    ///
    /// Removal cannot violate any hard constraint.
    pub fn remove_entry(&mut self, id: EntryId) -> Option<TimetableEntry> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx))
    }

    /// Replaces an entry's subject and/or teacher, slot untouched.
    ///
    /// A changed teacher must fit the entry's existing slot (availability
    /// and cross-scope booking) before the update commits; a subject
    /// change is unconditional. Passing the current teacher id is not a
    /// change and skips the checks.
    pub fn update_entry(
        &mut self,
        id: EntryId,
        subject_id: Option<&str>,
        teacher_id: Option<&str>,
    ) -> Result<(), ScheduleError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(ScheduleError::UnknownEntry { id })
            .map_err(|e| reject("update_entry", e))?;

        if let Some(new_teacher) = teacher_id {
            if new_teacher != self.entries[idx].teacher_id {
                let slot = self.entries[idx].slot;
                self.check_teacher_fit(new_teacher, slot, Some(id))
                    .map_err(|e| reject("update_entry", e))?;
            }
        }

        let entry = &mut self.entries[idx];
        if let Some(subject_id) = subject_id {
            entry.subject_id = subject_id.to_string();
        }
        if let Some(teacher_id) = teacher_id {
            entry.teacher_id = teacher_id.to_string();
        }
        Ok(())
    }

    /// Moves an entry to a new slot, guarding the hard constraints.
    ///
    /// On success the slot is updated in place (identity and references
    /// unchanged) and `true` comes back. On refusal the grid is left
    /// untouched, `false` comes back, and one error-severity issue naming
    /// the blocking constraint is appended to [`issues`](Timetable::issues).
    pub fn move_entry(&mut self, id: EntryId, slot: TimeSlot) -> bool {
        let idx = match self.entries.iter().position(|e| e.id == id) {
            Some(idx) => idx,
            None => {
                self.push_move_blocked(id, slot, &ScheduleError::UnknownEntry { id });
                return false;
            }
        };
        let scope = self.entries[idx].class_id.clone();
        let teacher_id = self.entries[idx].teacher_id.clone();

        let check = self
            .check_slot_free(scope.as_deref(), slot, Some(id))
            .and_then(|()| self.check_teacher_fit(&teacher_id, slot, Some(id)));
        if let Err(cause) = check {
            self.push_move_blocked(id, slot, &cause);
            return false;
        }

        self.entries[idx].slot = slot;
        true
    }

    /// Replaces all entries wholesale, bypassing the mutation guards.
    ///
    /// Intended for migrated or bulk data; run
    /// [`revalidate`](Timetable::revalidate) afterwards to surface any
    /// violations. Id allocation is rebased past the largest loaded id so
    /// later entries never collide.
    pub fn load_entries(&mut self, entries: Vec<TimetableEntry>) {
        let max_id = entries.iter().map(|e| e.id.raw()).max().unwrap_or(0);
        self.next_entry_id = self.next_entry_id.max(max_id + 1);
        self.entries = entries;
        log::debug!("loaded {} entries wholesale", self.entries.len());
    }

    /// Removes every entry. Issue state is untouched until the next
    /// validation pass.
    pub fn clear_entries(&mut self) {
        self.entries.clear();
    }

    // ==================== Generation ====================

    /// Maps each seeded subject to a teacher, balancing load.
    ///
    /// # Errors
    /// [`ScheduleError::NoTeachersAvailable`] when no teachers are seeded.
    pub fn assign_teachers(&self) -> Result<HashMap<String, String>, ScheduleError> {
        scheduler::assign_teachers(&self.subjects, &self.teachers)
    }

    /// Regenerates the whole timetable and returns the number placed.
    ///
    /// Runs teacher assignment once, then fills each class scope in seeded
    /// order (or the single implicit scope) with the greedy scheduler,
    /// carrying teacher occupancy across scopes so no teacher is booked
    /// twice in one slot. Existing entries are discarded only after
    /// assignment succeeds; on error the state is untouched.
    ///
    /// Best-effort: saturated grids leave weekly targets short, which the
    /// next validation pass reports.
    pub fn generate_schedule(&mut self) -> Result<usize, ScheduleError> {
        let assignment = scheduler::assign_teachers(&self.subjects, &self.teachers)
            .map_err(|e| reject("generate_schedule", e))?;

        self.entries.clear();

        let scopes: Vec<Option<String>> = if self.classes.is_empty() {
            vec![None]
        } else {
            self.classes.iter().map(|c| Some(c.id.clone())).collect()
        };
        let scope_count = scopes.len();

        let greedy = GreedyScheduler::new();
        let mut occupied: HashSet<(String, TimeSlot)> = HashSet::new();
        for scope in scopes {
            let placements = greedy.schedule_with_occupancy(
                &self.subjects,
                &self.teachers,
                &self.domain,
                &assignment,
                &occupied,
            );
            for placement in placements {
                occupied.insert((placement.teacher_id.clone(), placement.slot));
                let id = self.allocate_id();
                let mut entry = TimetableEntry::new(
                    id,
                    placement.subject_id,
                    placement.teacher_id,
                    placement.slot,
                );
                if let Some(class_id) = &scope {
                    entry = entry.with_class(class_id.clone());
                }
                self.entries.push(entry);
            }
        }

        log::debug!(
            "generated {} entries across {scope_count} scope(s)",
            self.entries.len()
        );
        Ok(self.entries.len())
    }

    // ==================== Validation ====================

    /// Rebuilds the issue list from current state.
    ///
    /// Discards all previous issues, including blocked-move reports, and
    /// runs the standard rule sequence.
    pub fn revalidate(&mut self) -> &[ValidationIssue] {
        self.issues = validation::validate(
            &self.entries,
            &self.subjects,
            &self.teachers,
            &self.classes,
            &self.domain,
        );
        &self.issues
    }

    // ==================== Internals ====================

    fn allocate_id(&mut self) -> EntryId {
        let id = EntryId::new(self.next_entry_id);
        self.next_entry_id += 1;
        id
    }

    /// Hard constraint 1: at most one entry per slot within a scope.
    fn check_slot_free(
        &self,
        scope: Option<&str>,
        slot: TimeSlot,
        exclude: Option<EntryId>,
    ) -> Result<(), ScheduleError> {
        let taken = self
            .entries
            .iter()
            .any(|e| Some(e.id) != exclude && e.in_scope(scope) && e.slot == slot);
        if taken {
            return Err(ScheduleError::SlotOccupied { slot });
        }
        Ok(())
    }

    /// Hard constraints 2 and 3: the teacher exists, is available at the
    /// slot, and holds no other entry there in any scope.
    fn check_teacher_fit(
        &self,
        teacher_id: &str,
        slot: TimeSlot,
        exclude: Option<EntryId>,
    ) -> Result<(), ScheduleError> {
        let available = self
            .teachers
            .iter()
            .find(|t| t.id == teacher_id)
            .map_or(false, |t| t.is_available(slot));
        if !available {
            return Err(ScheduleError::TeacherUnavailable {
                teacher_id: teacher_id.to_string(),
                slot,
            });
        }

        let booked = self
            .entries
            .iter()
            .any(|e| Some(e.id) != exclude && e.teacher_id == teacher_id && e.slot == slot);
        if booked {
            return Err(ScheduleError::TeacherDoubleBooked {
                teacher_id: teacher_id.to_string(),
                slot,
            });
        }
        Ok(())
    }

    fn push_move_blocked(&mut self, id: EntryId, slot: TimeSlot, cause: &ScheduleError) {
        log::debug!("move_entry rejected: {cause}");
        self.issues.push(ValidationIssue::error(
            IssueKey::new(
                RuleCode::MoveBlocked,
                vec![id.to_string(), slot.to_string()],
            ),
            format!("cannot move entry {id} to {slot}: {cause}"),
        ));
    }
}

fn reject(op: &str, err: ScheduleError) -> ScheduleError {
    log::debug!("{op} rejected: {err}");
    err
}
