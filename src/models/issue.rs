//! Validation issue model.
//!
//! Issues are derived findings, never stored facts: every validation pass
//! discards the previous list and rebuilds it from current state. Identity
//! is structural (the emitting rule plus the entities involved), so equal
//! findings compare equal across passes without relying on message text.

use serde::{Deserialize, Serialize};

/// Issue severity.
///
/// Errors mark hard-constraint violations or unmet weekly targets; the
/// timetable is not usable as-is. Warnings mark quality problems that a
/// caller may choose to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Stable lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// The rule an issue originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCode {
    /// A subject has fewer placed lectures than its weekly target.
    LectureShortfall,
    /// A subject has more placed lectures than its weekly target.
    LectureExcess,
    /// A subject appears more than once on one day.
    DailyCap,
    /// A teacher holds two entries in the same slot.
    TeacherDoubleBooked,
    /// An entry sits outside its teacher's availability.
    TeacherUnavailable,
    /// Two entries of one class scope share a slot.
    SlotConflict,
    /// One subject fills three or more consecutive periods.
    ConsecutiveRun,
    /// The grid has empty slots while weekly targets are unmet.
    IdleSlots,
    /// Subjects cluster on few days instead of spreading out.
    UnevenDistribution,
    /// Teacher workloads diverge too far from each other.
    WorkloadImbalance,
    /// A day carries too many lectures of difficult subjects.
    DifficultDayOverload,
    /// A requested move was blocked by a hard constraint.
    MoveBlocked,
}

impl RuleCode {
    /// Stable kebab-case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCode::LectureShortfall => "lecture-shortfall",
            RuleCode::LectureExcess => "lecture-excess",
            RuleCode::DailyCap => "daily-cap",
            RuleCode::TeacherDoubleBooked => "teacher-double-booked",
            RuleCode::TeacherUnavailable => "teacher-unavailable",
            RuleCode::SlotConflict => "slot-conflict",
            RuleCode::ConsecutiveRun => "consecutive-run",
            RuleCode::IdleSlots => "idle-slots",
            RuleCode::UnevenDistribution => "uneven-distribution",
            RuleCode::WorkloadImbalance => "workload-imbalance",
            RuleCode::DifficultDayOverload => "difficult-day-overload",
            RuleCode::MoveBlocked => "move-blocked",
        }
    }
}

/// Structural identity of an issue.
///
/// Two issues about the same finding carry the same key even when their
/// message text differs, so callers can diff issue lists across passes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueKey {
    /// Originating rule.
    pub rule: RuleCode,
    /// Involved entities in rule-defined order (ids, slot labels, days).
    pub entities: Vec<String>,
}

impl IssueKey {
    /// Creates a key.
    pub fn new(rule: RuleCode, entities: Vec<String>) -> Self {
        Self { rule, entities }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Structural identity.
    pub key: IssueKey,
    /// Severity classification.
    pub severity: Severity,
    /// Human-readable description naming the entities involved.
    pub message: String,
}

impl ValidationIssue {
    /// Creates an error-severity issue.
    pub fn error(key: IssueKey, message: impl Into<String>) -> Self {
        Self {
            key,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Creates a warning-severity issue.
    pub fn warning(key: IssueKey, message: impl Into<String>) -> Self {
        Self {
            key,
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Whether this issue is error severity.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Originating rule.
    #[inline]
    pub fn rule(&self) -> RuleCode {
        self.key.rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_factories() {
        let err = ValidationIssue::error(
            IssueKey::new(RuleCode::SlotConflict, vec!["5a".into()]),
            "two lectures share a slot",
        );
        assert!(err.is_error());
        assert_eq!(err.rule(), RuleCode::SlotConflict);

        let warn = ValidationIssue::warning(
            IssueKey::new(RuleCode::IdleSlots, vec![]),
            "empty slots remain",
        );
        assert!(!warn.is_error());
        assert_eq!(warn.severity, Severity::Warning);
    }

    #[test]
    fn test_key_identity_ignores_message() {
        let key = IssueKey::new(RuleCode::DailyCap, vec!["math".into(), "Monday".into()]);
        let a = ValidationIssue::warning(key.clone(), "first wording");
        let b = ValidationIssue::warning(key.clone(), "second wording");
        assert_eq!(a.key, b.key);
        assert_ne!(a, b); // full issues still differ by message
    }

    #[test]
    fn test_labels() {
        assert_eq!(Severity::Error.as_str(), "error");
        assert_eq!(RuleCode::TeacherDoubleBooked.as_str(), "teacher-double-booked");
        assert_eq!(RuleCode::UnevenDistribution.as_str(), "uneven-distribution");
    }
}
