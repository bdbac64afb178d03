//! Built-in validation rules.
//!
//! # Categories
//!
//! - **Hard constraints** (errors): lecture counts, teacher double
//!   bookings, teacher availability, slot conflicts
//! - **Quality** (warnings): daily caps, consecutive runs, idle slots,
//!   distribution and workload suggestions
//!
//! # Severity Convention
//! A rule emits either errors or warnings, never both, except the lecture
//! count rule which classifies both shortfall and excess as errors.
//!
//! Evaluation order is fixed by [`Validator::standard`](super::Validator::standard);
//! each rule appends issues in deterministic entity order (seeded order
//! for subjects and teachers, slot order within a rule).

use std::collections::{BTreeMap, HashSet};

use crate::models::{EntryId, IssueKey, RuleCode, TimeSlot, ValidationIssue};
use crate::scoring::{QualityMetrics, WORKLOAD_BALANCE_LIMIT};

use super::{RuleContext, ValidationRule};

/// Prefixes entity lists with the class scope id, when scoped.
fn scope_key(scope: Option<&str>, rest: Vec<String>) -> Vec<String> {
    let mut entities = Vec::with_capacity(rest.len() + 1);
    if let Some(id) = scope {
        entities.push(id.to_string());
    }
    entities.extend(rest);
    entities
}

// ==================== Hard-constraint rules ====================

/// Weekly lecture count per subject (errors).
///
/// Every seeded subject must hold exactly its weekly target within each
/// class scope; both shortfall and excess are reported.
#[derive(Debug, Clone, Copy)]
pub struct LectureCount;

impl ValidationRule for LectureCount {
    fn name(&self) -> &'static str {
        "lecture-count"
    }

    fn check(&self, ctx: &RuleContext<'_>, issues: &mut Vec<ValidationIssue>) {
        for (scope, entries) in ctx.scopes() {
            for subject in ctx.subjects {
                let placed = entries.iter().filter(|e| e.subject_id == subject.id).count();
                let target = subject.weekly_lectures as usize;
                if placed < target {
                    issues.push(ValidationIssue::error(
                        IssueKey::new(
                            RuleCode::LectureShortfall,
                            scope_key(scope, vec![subject.id.clone()]),
                        ),
                        format!(
                            "'{}' has {placed} of {target} weekly lectures{}",
                            subject.display_name(),
                            ctx.scope_suffix(scope)
                        ),
                    ));
                } else if placed > target {
                    issues.push(ValidationIssue::error(
                        IssueKey::new(
                            RuleCode::LectureExcess,
                            scope_key(scope, vec![subject.id.clone()]),
                        ),
                        format!(
                            "'{}' has {placed} lectures, {target} planned{}",
                            subject.display_name(),
                            ctx.scope_suffix(scope)
                        ),
                    ));
                }
            }
        }
    }
}

/// Teacher double bookings across all class scopes (errors).
///
/// A teacher can hold at most one entry per slot. Each slot with k > 1
/// entries yields k - 1 errors, one per entry beyond the first.
#[derive(Debug, Clone, Copy)]
pub struct TeacherDoubleBooking;

impl ValidationRule for TeacherDoubleBooking {
    fn name(&self) -> &'static str {
        "teacher-double-booking"
    }

    fn check(&self, ctx: &RuleContext<'_>, issues: &mut Vec<ValidationIssue>) {
        for teacher in ctx.teachers {
            let mut by_slot: BTreeMap<TimeSlot, Vec<EntryId>> = BTreeMap::new();
            for entry in ctx.entries {
                if entry.teacher_id == teacher.id {
                    by_slot.entry(entry.slot).or_default().push(entry.id);
                }
            }
            for (slot, ids) in by_slot {
                for &extra in ids.iter().skip(1) {
                    issues.push(ValidationIssue::error(
                        IssueKey::new(
                            RuleCode::TeacherDoubleBooked,
                            vec![teacher.id.clone(), slot.to_string(), extra.to_string()],
                        ),
                        format!(
                            "teacher '{}' is double-booked at {slot}: entry {extra} overlaps {}",
                            teacher.display_name(),
                            ids[0]
                        ),
                    ));
                }
            }
        }
    }
}

/// Entries outside their teacher's availability (errors).
///
/// Entries referencing unknown teachers are skipped.
#[derive(Debug, Clone, Copy)]
pub struct TeacherAvailability;

impl ValidationRule for TeacherAvailability {
    fn name(&self) -> &'static str {
        "teacher-availability"
    }

    fn check(&self, ctx: &RuleContext<'_>, issues: &mut Vec<ValidationIssue>) {
        for entry in ctx.entries {
            let teacher = match ctx.teacher(&entry.teacher_id) {
                Some(t) => t,
                None => continue,
            };
            if !teacher.is_available(entry.slot) {
                issues.push(ValidationIssue::error(
                    IssueKey::new(
                        RuleCode::TeacherUnavailable,
                        vec![
                            teacher.id.clone(),
                            entry.slot.to_string(),
                            entry.id.to_string(),
                        ],
                    ),
                    format!(
                        "teacher '{}' is scheduled at {} outside their availability (entry {})",
                        teacher.display_name(),
                        entry.slot,
                        entry.id
                    ),
                ));
            }
        }
    }
}

/// Slots holding more than one lecture within a class scope (errors).
///
/// Guarded mutations cannot produce these; bulk-loaded entries can. Each
/// slot with k > 1 entries yields k - 1 errors.
#[derive(Debug, Clone, Copy)]
pub struct SlotConflicts;

impl ValidationRule for SlotConflicts {
    fn name(&self) -> &'static str {
        "slot-conflict"
    }

    fn check(&self, ctx: &RuleContext<'_>, issues: &mut Vec<ValidationIssue>) {
        for (scope, entries) in ctx.scopes() {
            let mut by_slot: BTreeMap<TimeSlot, Vec<EntryId>> = BTreeMap::new();
            for entry in entries {
                by_slot.entry(entry.slot).or_default().push(entry.id);
            }
            for (slot, ids) in by_slot {
                for &extra in ids.iter().skip(1) {
                    issues.push(ValidationIssue::error(
                        IssueKey::new(
                            RuleCode::SlotConflict,
                            scope_key(scope, vec![slot.to_string(), extra.to_string()]),
                        ),
                        format!(
                            "{slot} holds more than one lecture{}: entry {extra} overlaps {}",
                            ctx.scope_suffix(scope),
                            ids[0]
                        ),
                    ));
                }
            }
        }
    }
}

// ==================== Quality rules ====================

/// More than one lecture of a subject on one day (warnings).
///
/// Subjects whose weekly target exceeds the number of domain days cannot
/// avoid repeats and are exempt.
#[derive(Debug, Clone, Copy)]
pub struct DailySubjectCap;

impl ValidationRule for DailySubjectCap {
    fn name(&self) -> &'static str {
        "daily-cap"
    }

    fn check(&self, ctx: &RuleContext<'_>, issues: &mut Vec<ValidationIssue>) {
        let day_count = ctx.domain.days().len();
        for (scope, entries) in ctx.scopes() {
            for subject in ctx.subjects {
                if subject.weekly_lectures as usize > day_count {
                    continue;
                }
                for &day in ctx.domain.days() {
                    let lectures = entries
                        .iter()
                        .filter(|e| e.subject_id == subject.id && e.slot.day == day)
                        .count();
                    if lectures > 1 {
                        issues.push(ValidationIssue::warning(
                            IssueKey::new(
                                RuleCode::DailyCap,
                                scope_key(
                                    scope,
                                    vec![subject.id.clone(), day.as_str().to_string()],
                                ),
                            ),
                            format!(
                                "'{}' has {lectures} lectures on {day}{}",
                                subject.display_name(),
                                ctx.scope_suffix(scope)
                            ),
                        ));
                    }
                }
            }
        }
    }
}

/// Three or more consecutive periods of one subject (warnings).
///
/// One warning per maximal run. When duplicated periods make the grid
/// ambiguous, the first entry in list order represents the period; the
/// slot-conflict rule reports the duplication itself.
#[derive(Debug, Clone, Copy)]
pub struct ConsecutiveRuns;

impl ValidationRule for ConsecutiveRuns {
    fn name(&self) -> &'static str {
        "consecutive-run"
    }

    fn check(&self, ctx: &RuleContext<'_>, issues: &mut Vec<ValidationIssue>) {
        for (scope, entries) in ctx.scopes() {
            for &day in ctx.domain.days() {
                let mut by_period: BTreeMap<u8, &str> = BTreeMap::new();
                for entry in entries {
                    if entry.slot.day == day {
                        by_period
                            .entry(entry.slot.period)
                            .or_insert(entry.subject_id.as_str());
                    }
                }

                let sequence: Vec<(u8, &str)> = by_period.into_iter().collect();
                let mut i = 0;
                while i < sequence.len() {
                    let (start, subject_id) = sequence[i];
                    let mut len = 1;
                    while i + len < sequence.len()
                        && sequence[i + len].0 as u16 == start as u16 + len as u16
                        && sequence[i + len].1 == subject_id
                    {
                        len += 1;
                    }
                    if len >= 3 {
                        issues.push(ValidationIssue::warning(
                            IssueKey::new(
                                RuleCode::ConsecutiveRun,
                                scope_key(
                                    scope,
                                    vec![
                                        subject_id.to_string(),
                                        day.as_str().to_string(),
                                        start.to_string(),
                                    ],
                                ),
                            ),
                            format!(
                                "'{}' runs {len} periods in a row on {day} starting P{start}{}",
                                ctx.subject_name(subject_id),
                                ctx.scope_suffix(scope)
                            ),
                        ));
                    }
                    i += len;
                }
            }
        }
    }
}

/// Empty slots while weekly targets are unmet (warning per scope).
#[derive(Debug, Clone, Copy)]
pub struct IdleSlots;

impl ValidationRule for IdleSlots {
    fn name(&self) -> &'static str {
        "idle-slots"
    }

    fn check(&self, ctx: &RuleContext<'_>, issues: &mut Vec<ValidationIssue>) {
        for (scope, entries) in ctx.scopes() {
            let filled: HashSet<TimeSlot> = entries.iter().map(|e| e.slot).collect();
            let empty = ctx.domain.iter().filter(|slot| !filled.contains(slot)).count();
            if empty == 0 {
                continue;
            }
            let unmet = ctx.subjects.iter().any(|subject| {
                let placed = entries.iter().filter(|e| e.subject_id == subject.id).count();
                placed < subject.weekly_lectures as usize
            });
            if unmet {
                issues.push(ValidationIssue::warning(
                    IssueKey::new(RuleCode::IdleSlots, scope_key(scope, Vec::new())),
                    format!(
                        "{empty} empty slots remain while weekly targets are unmet{}",
                        ctx.scope_suffix(scope)
                    ),
                ));
            }
        }
    }
}

/// Distribution, workload, and difficult-day suggestions (warnings).
///
/// Thresholds live in [`crate::scoring`]; this rule only translates the
/// computed metrics into issues.
#[derive(Debug, Clone, Copy)]
pub struct Suggestions;

impl ValidationRule for Suggestions {
    fn name(&self) -> &'static str {
        "suggestions"
    }

    fn check(&self, ctx: &RuleContext<'_>, issues: &mut Vec<ValidationIssue>) {
        let metrics = QualityMetrics::calculate(ctx.entries, ctx.subjects, ctx.teachers, ctx.domain);

        if metrics.distribution_below_target() {
            issues.push(ValidationIssue::warning(
                IssueKey::new(RuleCode::UnevenDistribution, Vec::new()),
                format!(
                    "subject distribution {:.2} is below target {:.2}; repeats cluster on few days",
                    metrics.distribution_total,
                    metrics.distribution_target()
                ),
            ));
        }

        if metrics.workload_imbalanced() {
            issues.push(ValidationIssue::warning(
                IssueKey::new(RuleCode::WorkloadImbalance, Vec::new()),
                format!(
                    "teacher workloads are uneven (spread {:.2} exceeds {:.2})",
                    metrics.workload_std_dev, WORKLOAD_BALANCE_LIMIT
                ),
            ));
        }

        for &day in &metrics.difficult_day_overloads {
            issues.push(ValidationIssue::warning(
                IssueKey::new(
                    RuleCode::DifficultDayOverload,
                    vec![day.as_str().to_string()],
                ),
                format!("{day} is overloaded with difficult subjects"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassGroup, SlotDomain, Subject, Teacher, TimetableEntry, Weekday};

    fn make_entry(id: u64, subject: &str, teacher: &str, day: Weekday, period: u8) -> TimetableEntry {
        TimetableEntry::new(EntryId::new(id), subject, teacher, TimeSlot::new(day, period))
    }

    fn run_rule<R: ValidationRule>(
        rule: R,
        entries: &[TimetableEntry],
        subjects: &[Subject],
        teachers: &[Teacher],
        classes: &[ClassGroup],
        domain: &SlotDomain,
    ) -> Vec<ValidationIssue> {
        let ctx = RuleContext::new(entries, subjects, teachers, classes, domain);
        let mut issues = Vec::new();
        rule.check(&ctx, &mut issues);
        issues
    }

    #[test]
    fn test_lecture_count_shortfall_and_excess() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![
            Subject::new("math").with_name("Mathematics").with_weekly_lectures(3),
            Subject::new("art").with_weekly_lectures(1),
        ];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "art", "kim", Weekday::Monday, 2),
            make_entry(3, "art", "kim", Weekday::Tuesday, 2),
        ];

        let issues = run_rule(LectureCount, &entries, &subjects, &[], &[], &domain);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].rule(), RuleCode::LectureShortfall);
        assert!(issues[0].message.contains("'Mathematics' has 1 of 3"));
        assert_eq!(issues[1].rule(), RuleCode::LectureExcess);
        assert!(issues[1].message.contains("'art' has 2 lectures, 1 planned"));
    }

    #[test]
    fn test_lecture_count_exact_target_is_silent() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("math").with_weekly_lectures(2)];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Tuesday, 1),
        ];

        let issues = run_rule(LectureCount, &entries, &subjects, &[], &[], &domain);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_double_booking_one_error_per_extra_entry() {
        let domain = SlotDomain::weekdays(6);
        let teachers = vec![Teacher::new("kim").available_every_slot(&domain)];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "eng", "kim", Weekday::Monday, 1),
            make_entry(3, "art", "kim", Weekday::Monday, 1),
        ];

        let issues = run_rule(TeacherDoubleBooking, &entries, &[], &teachers, &[], &domain);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.rule() == RuleCode::TeacherDoubleBooked));
        assert!(issues[0].key.entities.contains(&"#2".to_string()));
        assert!(issues[1].key.entities.contains(&"#3".to_string()));
    }

    #[test]
    fn test_double_booking_spans_class_scopes() {
        let domain = SlotDomain::weekdays(6);
        let teachers = vec![Teacher::new("kim").available_every_slot(&domain)];
        let classes = vec![ClassGroup::new("5a"), ClassGroup::new("5b")];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1).with_class("5a"),
            make_entry(2, "math", "kim", Weekday::Monday, 1).with_class("5b"),
        ];

        let issues = run_rule(TeacherDoubleBooking, &entries, &[], &teachers, &classes, &domain);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule(), RuleCode::TeacherDoubleBooked);
    }

    #[test]
    fn test_availability_flags_out_of_set_entries() {
        let domain = SlotDomain::weekdays(6);
        let teachers = vec![Teacher::new("kim")
            .with_name("Ms. Kim")
            .with_slot(Weekday::Monday, 1)];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Monday, 2),
        ];

        let issues = run_rule(TeacherAvailability, &entries, &[], &teachers, &[], &domain);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule(), RuleCode::TeacherUnavailable);
        assert!(issues[0].message.contains("Ms. Kim"));
        assert!(issues[0].message.contains("Monday P2"));
    }

    #[test]
    fn test_availability_skips_unknown_teachers() {
        let domain = SlotDomain::weekdays(6);
        let entries = vec![make_entry(1, "math", "ghost", Weekday::Monday, 1)];
        let issues = run_rule(TeacherAvailability, &entries, &[], &[], &[], &domain);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_slot_conflicts_within_scope_only() {
        let domain = SlotDomain::weekdays(6);
        let classes = vec![ClassGroup::new("5a"), ClassGroup::new("5b")];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1).with_class("5a"),
            make_entry(2, "eng", "lee", Weekday::Monday, 1).with_class("5a"),
            make_entry(3, "art", "cho", Weekday::Monday, 1).with_class("5b"),
        ];

        let issues = run_rule(SlotConflicts, &entries, &[], &[], &classes, &domain);
        // 5a's duplicate is one error; 5b shares the slot only across scopes.
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule(), RuleCode::SlotConflict);
        assert!(issues[0].key.entities.contains(&"5a".to_string()));
    }

    #[test]
    fn test_daily_cap_flags_repeats() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("math").with_weekly_lectures(2)];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Monday, 3),
        ];

        let issues = run_rule(DailySubjectCap, &entries, &subjects, &[], &[], &domain);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule(), RuleCode::DailyCap);
        assert!(issues[0].key.entities.contains(&"Monday".to_string()));
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_daily_cap_exempts_unspreadable_targets() {
        let domain = SlotDomain::weekdays(6);
        // Six weekly lectures cannot fit five days at one per day.
        let subjects = vec![Subject::new("math").with_weekly_lectures(6)];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Monday, 2),
        ];

        let issues = run_rule(DailySubjectCap, &entries, &subjects, &[], &[], &domain);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_consecutive_run_warns_once_per_maximal_run() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("math").with_name("Mathematics").with_weekly_lectures(4)];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Monday, 2),
            make_entry(3, "math", "kim", Weekday::Monday, 3),
            make_entry(4, "math", "kim", Weekday::Monday, 4),
        ];

        let issues = run_rule(ConsecutiveRuns, &entries, &subjects, &[], &[], &domain);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("4 periods in a row"));
        assert!(issues[0].message.contains("starting P1"));
    }

    #[test]
    fn test_two_periods_or_gapped_runs_are_fine() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("math").with_weekly_lectures(3)];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Monday, 2),
            make_entry(3, "math", "kim", Weekday::Monday, 4), // gap at P3
        ];

        let issues = run_rule(ConsecutiveRuns, &entries, &subjects, &[], &[], &domain);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_separate_runs_warn_separately() {
        let domain = SlotDomain::weekdays(8);
        let subjects = vec![Subject::new("math").with_weekly_lectures(6)];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Monday, 2),
            make_entry(3, "math", "kim", Weekday::Monday, 3),
            make_entry(4, "math", "kim", Weekday::Monday, 5),
            make_entry(5, "math", "kim", Weekday::Monday, 6),
            make_entry(6, "math", "kim", Weekday::Monday, 7),
        ];

        let issues = run_rule(ConsecutiveRuns, &entries, &subjects, &[], &[], &domain);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].key.entities.contains(&"1".to_string()));
        assert!(issues[1].key.entities.contains(&"5".to_string()));
    }

    #[test]
    fn test_run_of_mixed_subjects_is_fine() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![
            Subject::new("math").with_weekly_lectures(2),
            Subject::new("eng").with_weekly_lectures(1),
        ];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "eng", "lee", Weekday::Monday, 2),
            make_entry(3, "math", "kim", Weekday::Monday, 3),
        ];

        let issues = run_rule(ConsecutiveRuns, &entries, &subjects, &[], &[], &domain);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_idle_slots_needs_both_gaps_and_shortfall() {
        let subjects = vec![Subject::new("math").with_weekly_lectures(2)];

        // Gaps and a shortfall: warn.
        let domain = SlotDomain::weekdays(6);
        let entries = vec![make_entry(1, "math", "kim", Weekday::Monday, 1)];
        let issues = run_rule(IdleSlots, &entries, &subjects, &[], &[], &domain);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule(), RuleCode::IdleSlots);

        // Gaps but targets met: silent.
        let met = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Tuesday, 1),
        ];
        let issues = run_rule(IdleSlots, &met, &subjects, &[], &[], &domain);
        assert!(issues.is_empty());

        // Shortfall but a full grid: silent.
        let tiny = SlotDomain::new(vec![Weekday::Monday], 1);
        let full = vec![make_entry(1, "math", "kim", Weekday::Monday, 1)];
        let issues = run_rule(IdleSlots, &full, &subjects, &[], &[], &tiny);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_suggestions_uneven_distribution() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("math").with_weekly_lectures(4)];
        let teachers = vec![Teacher::new("kim").available_every_slot(&domain)];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Monday, 2),
            make_entry(3, "math", "kim", Weekday::Monday, 3),
            make_entry(4, "math", "kim", Weekday::Monday, 4),
        ];

        let issues = run_rule(Suggestions, &entries, &subjects, &teachers, &[], &domain);
        assert!(issues
            .iter()
            .any(|i| i.rule() == RuleCode::UnevenDistribution));
    }

    #[test]
    fn test_suggestions_workload_imbalance() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("math").with_weekly_lectures(5)];
        let teachers = vec![
            Teacher::new("kim").available_every_slot(&domain),
            Teacher::new("lee").available_every_slot(&domain),
        ];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Tuesday, 1),
            make_entry(3, "math", "kim", Weekday::Wednesday, 1),
            make_entry(4, "math", "kim", Weekday::Thursday, 1),
            make_entry(5, "math", "kim", Weekday::Friday, 1),
        ];

        let issues = run_rule(Suggestions, &entries, &subjects, &teachers, &[], &domain);
        assert!(issues.iter().any(|i| i.rule() == RuleCode::WorkloadImbalance));
    }

    #[test]
    fn test_suggestions_difficult_day_overload() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("math").with_weekly_lectures(4)];
        let teachers = vec![Teacher::new("kim").available_every_slot(&domain)];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Monday, 2),
            make_entry(3, "math", "kim", Weekday::Tuesday, 1),
            make_entry(4, "math", "kim", Weekday::Wednesday, 1),
        ];

        let issues = run_rule(Suggestions, &entries, &subjects, &teachers, &[], &domain);
        let overloads: Vec<&ValidationIssue> = issues
            .iter()
            .filter(|i| i.rule() == RuleCode::DifficultDayOverload)
            .collect();
        assert_eq!(overloads.len(), 1);
        assert!(overloads[0].key.entities.contains(&"Monday".to_string()));
    }
}
