//! Rule-based timetable validation.
//!
//! Re-derives the full issue list from current state: validation is a pure
//! function of (entries, subjects, teachers, classes, domain). Rules run
//! in a fixed sequence and issues keep emission order, so repeated passes
//! over unchanged state produce identical lists.
//!
//! Hard-constraint violations come out as errors, quality findings as
//! warnings, both from the same pass. Entries referencing unknown
//! subjects, teachers, or classes are skipped by the affected rules;
//! validation itself never fails.
//!
//! # Class scopes
//!
//! Grid-local rules (lecture counts, daily caps, slot conflicts, runs,
//! idle slots) evaluate once per class scope: the declared classes in
//! seeded order, an implicit scope for unscoped entries, and any stray
//! scope ids found only on entries, sorted last. Teacher rules and the
//! quality suggestions look across all scopes at once.
//!
//! # Usage
//!
//! ```
//! use timegrid::models::{SlotDomain, Subject, Teacher};
//! use timegrid::validation::validate;
//!
//! let domain = SlotDomain::weekdays(6);
//! let subjects = vec![Subject::new("math").with_weekly_lectures(2)];
//! let teachers = vec![Teacher::new("kim").available_every_slot(&domain)];
//!
//! // Nothing placed yet: the weekly target is unmet.
//! let issues = validate(&[], &subjects, &teachers, &[], &domain);
//! assert!(issues.iter().any(|i| i.is_error()));
//! ```

pub mod rules;

use std::collections::HashMap;
use std::fmt::Debug;

use crate::models::{
    ClassGroup, SlotDomain, Subject, Teacher, TimetableEntry, ValidationIssue,
};

/// A validation rule: examines one state snapshot and appends findings.
///
/// Rules must be deterministic and must not depend on issues emitted by
/// earlier rules; the validator only concatenates their output in
/// sequence order.
pub trait ValidationRule: Send + Sync + Debug {
    /// Rule name (stable, kebab-case).
    fn name(&self) -> &'static str;

    /// Appends this rule's findings for the given state.
    fn check(&self, ctx: &RuleContext<'_>, issues: &mut Vec<ValidationIssue>);
}

/// Precomputed view of one validation pass's input.
///
/// Built once per pass; rules read from it and never mutate state.
pub struct RuleContext<'a> {
    /// All placed entries.
    pub entries: &'a [TimetableEntry],
    /// Seeded subjects.
    pub subjects: &'a [Subject],
    /// Seeded teachers.
    pub teachers: &'a [Teacher],
    /// Seeded class groups.
    pub classes: &'a [ClassGroup],
    /// The weekly grid.
    pub domain: &'a SlotDomain,
    scopes: Vec<Option<String>>,
    by_scope: Vec<Vec<&'a TimetableEntry>>,
    subject_index: HashMap<&'a str, &'a Subject>,
    teacher_index: HashMap<&'a str, &'a Teacher>,
    class_index: HashMap<&'a str, &'a ClassGroup>,
}

impl<'a> RuleContext<'a> {
    /// Builds the context, partitioning entries by class scope.
    pub fn new(
        entries: &'a [TimetableEntry],
        subjects: &'a [Subject],
        teachers: &'a [Teacher],
        classes: &'a [ClassGroup],
        domain: &'a SlotDomain,
    ) -> Self {
        let subject_index = subjects.iter().map(|s| (s.id.as_str(), s)).collect();
        let teacher_index = teachers.iter().map(|t| (t.id.as_str(), t)).collect();
        let class_index = classes.iter().map(|c| (c.id.as_str(), c)).collect();

        // Scope order: the implicit scope (always present without classes,
        // otherwise only when unscoped entries exist), declared classes in
        // seeded order, then stray scope ids sorted.
        let mut scopes: Vec<Option<String>> = Vec::new();
        if classes.is_empty() || entries.iter().any(|e| e.class_id.is_none()) {
            scopes.push(None);
        }
        scopes.extend(classes.iter().map(|c| Some(c.id.clone())));
        let mut stray: Vec<String> = entries
            .iter()
            .filter_map(|e| e.class_id.as_deref())
            .filter(|id| !classes.iter().any(|c| c.id == *id))
            .map(str::to_string)
            .collect();
        stray.sort();
        stray.dedup();
        scopes.extend(stray.into_iter().map(Some));

        let by_scope: Vec<Vec<&'a TimetableEntry>> = scopes
            .iter()
            .map(|scope| {
                entries
                    .iter()
                    .filter(|e| e.in_scope(scope.as_deref()))
                    .collect()
            })
            .collect();

        Self {
            entries,
            subjects,
            teachers,
            classes,
            domain,
            scopes,
            by_scope,
            subject_index,
            teacher_index,
            class_index,
        }
    }

    /// Class scopes in evaluation order, each with its entries.
    pub fn scopes(&self) -> impl Iterator<Item = (Option<&str>, &[&'a TimetableEntry])> + '_ {
        self.scopes
            .iter()
            .zip(&self.by_scope)
            .map(|(scope, entries)| (scope.as_deref(), entries.as_slice()))
    }

    /// Looks up a seeded subject by id.
    pub fn subject(&self, id: &str) -> Option<&'a Subject> {
        self.subject_index.get(id).copied()
    }

    /// Looks up a seeded teacher by id.
    pub fn teacher(&self, id: &str) -> Option<&'a Teacher> {
        self.teacher_index.get(id).copied()
    }

    /// Display name for a subject id, tolerating dangling references.
    pub fn subject_name<'b>(&'b self, id: &'b str) -> &'b str {
        self.subject(id).map(Subject::display_name).unwrap_or(id)
    }

    /// Message suffix naming the class scope; empty for the implicit one.
    pub fn scope_suffix(&self, scope: Option<&str>) -> String {
        match scope {
            None => String::new(),
            Some(id) => match self.class_index.get(id) {
                Some(class) => format!(" in class '{}'", class.display_name()),
                None => format!(" in class '{id}'"),
            },
        }
    }
}

/// Ordered validation pipeline.
///
/// [`Validator::standard`] wires the built-in sequence; [`Validator::with_rule`]
/// appends further rules behind it.
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    /// Creates an empty validator.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The built-in rule sequence, in evaluation order.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(rules::LectureCount)
            .with_rule(rules::DailySubjectCap)
            .with_rule(rules::TeacherDoubleBooking)
            .with_rule(rules::TeacherAvailability)
            .with_rule(rules::SlotConflicts)
            .with_rule(rules::ConsecutiveRuns)
            .with_rule(rules::IdleSlots)
            .with_rule(rules::Suggestions)
    }

    /// Appends a rule.
    pub fn with_rule<R: ValidationRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Runs every rule in order and returns the combined issue list.
    pub fn run(&self, ctx: &RuleContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for rule in &self.rules {
            let before = issues.len();
            rule.check(ctx, &mut issues);
            log::trace!(
                "rule '{}' added {} issue(s)",
                rule.name(),
                issues.len() - before
            );
        }
        issues
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Validates a timetable with the standard rule sequence.
///
/// Pure and idempotent: identical input yields an identical issue list,
/// in rule order.
pub fn validate(
    entries: &[TimetableEntry],
    subjects: &[Subject],
    teachers: &[Teacher],
    classes: &[ClassGroup],
    domain: &SlotDomain,
) -> Vec<ValidationIssue> {
    let ctx = RuleContext::new(entries, subjects, teachers, classes, domain);
    let issues = Validator::standard().run(&ctx);
    let errors = issues.iter().filter(|i| i.is_error()).count();
    log::debug!(
        "validation found {errors} error(s), {} warning(s)",
        issues.len() - errors
    );
    issues
}
