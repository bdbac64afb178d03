//! Timetable quality metrics.
//!
//! Computes the statistical measures behind the improvement suggestions:
//! how evenly each subject spreads across the week, how balanced teacher
//! workloads are, and which days overload difficult subjects.
//!
//! # Metrics
//!
//! | Metric | Definition | Direction |
//! |--------|-----------|-----------|
//! | Distribution score | per subject `1 / (1 + σ)` of its per-day counts | higher is better |
//! | Workload spread | population σ of per-teacher entry counts | lower is better |
//! | Difficult-day overload | days with more difficult lectures than difficult subjects | fewer is better |
//!
//! Subjects with a weekly target of one cannot be spread and are left out
//! of distribution scoring. A subject counts as difficult from
//! [`DIFFICULT_WEEKLY_MIN`] weekly lectures up.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling", §2 (soft
//! constraints).

use std::collections::{HashMap, HashSet};

use crate::models::{SlotDomain, Subject, Teacher, TimetableEntry, Weekday};

/// Distribution threshold: a total below `0.7 × qualifying subjects`
/// suggests uneven spread.
pub const DISTRIBUTION_TARGET_RATIO: f64 = 0.7;

/// Workload σ above this suggests unbalanced teacher loads.
pub const WORKLOAD_BALANCE_LIMIT: f64 = 2.0;

/// Weekly-lecture count from which a subject counts as difficult.
pub const DIFFICULT_WEEKLY_MIN: u32 = 4;

/// Quality measures over one timetable.
#[derive(Debug, Clone)]
pub struct QualityMetrics {
    /// Per-subject distribution score, `1 / (1 + σ)` of per-day counts.
    /// Subjects with `weekly_lectures > 1` only.
    pub distribution_by_subject: HashMap<String, f64>,
    /// Sum of the per-subject distribution scores.
    pub distribution_total: f64,
    /// Number of subjects that qualified for distribution scoring.
    pub qualifying_subjects: usize,
    /// Entry count per seeded teacher (zeros included).
    pub workload_by_teacher: HashMap<String, usize>,
    /// Population standard deviation of the workload counts.
    pub workload_std_dev: f64,
    /// Days carrying more difficult-subject lectures than there are
    /// difficult subjects.
    pub difficult_day_overloads: Vec<Weekday>,
}

impl QualityMetrics {
    /// Computes all measures from the current entries.
    ///
    /// Entries referencing unknown subjects or teachers are skipped, the
    /// same tolerance the validation rules apply.
    pub fn calculate(
        entries: &[TimetableEntry],
        subjects: &[Subject],
        teachers: &[Teacher],
        domain: &SlotDomain,
    ) -> Self {
        // Per-subject per-day lecture counts.
        let mut day_counts: HashMap<&str, HashMap<Weekday, u32>> = HashMap::new();
        for entry in entries {
            *day_counts
                .entry(entry.subject_id.as_str())
                .or_default()
                .entry(entry.slot.day)
                .or_insert(0) += 1;
        }

        let mut distribution_by_subject = HashMap::new();
        let mut distribution_total = 0.0;
        let mut qualifying_subjects = 0;

        for subject in subjects.iter().filter(|s| s.weekly_lectures > 1) {
            qualifying_subjects += 1;
            let counts: Vec<f64> = domain
                .days()
                .iter()
                .map(|day| {
                    day_counts
                        .get(subject.id.as_str())
                        .and_then(|per_day| per_day.get(day))
                        .copied()
                        .unwrap_or(0) as f64
                })
                .collect();
            let score = 1.0 / (1.0 + population_std_dev(&counts));
            distribution_total += score;
            distribution_by_subject.insert(subject.id.clone(), score);
        }

        // Workloads over seeded teachers only; dangling references drop out.
        let mut workload_by_teacher: HashMap<String, usize> =
            teachers.iter().map(|t| (t.id.clone(), 0)).collect();
        for entry in entries {
            if let Some(count) = workload_by_teacher.get_mut(&entry.teacher_id) {
                *count += 1;
            }
        }
        let loads: Vec<f64> = teachers
            .iter()
            .map(|t| workload_by_teacher[&t.id] as f64)
            .collect();
        let workload_std_dev = population_std_dev(&loads);

        let difficult: HashSet<&str> = subjects
            .iter()
            .filter(|s| s.weekly_lectures >= DIFFICULT_WEEKLY_MIN)
            .map(|s| s.id.as_str())
            .collect();
        let mut difficult_day_overloads = Vec::new();
        for &day in domain.days() {
            let lectures = entries
                .iter()
                .filter(|e| e.slot.day == day && difficult.contains(e.subject_id.as_str()))
                .count();
            if lectures > difficult.len() {
                difficult_day_overloads.push(day);
            }
        }

        Self {
            distribution_by_subject,
            distribution_total,
            qualifying_subjects,
            workload_by_teacher,
            workload_std_dev,
            difficult_day_overloads,
        }
    }

    /// Target the distribution total is measured against.
    pub fn distribution_target(&self) -> f64 {
        DISTRIBUTION_TARGET_RATIO * self.qualifying_subjects as f64
    }

    /// Whether the distribution total falls below the target.
    pub fn distribution_below_target(&self) -> bool {
        self.distribution_total < self.distribution_target()
    }

    /// Whether teacher workloads spread wider than the balance limit.
    pub fn workload_imbalanced(&self) -> bool {
        self.workload_std_dev > WORKLOAD_BALANCE_LIMIT
    }
}

/// Population standard deviation (dividing by N). Empty input yields 0.
fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, TimeSlot};

    fn make_entry(id: u64, subject: &str, teacher: &str, day: Weekday, period: u8) -> TimetableEntry {
        TimetableEntry::new(EntryId::new(id), subject, teacher, TimeSlot::new(day, period))
    }

    #[test]
    fn test_population_std_dev() {
        assert!((population_std_dev(&[]) - 0.0).abs() < 1e-10);
        assert!((population_std_dev(&[2.0, 2.0]) - 0.0).abs() < 1e-10);
        assert!((population_std_dev(&[4.0, 0.0]) - 2.0).abs() < 1e-10);
        let expected = (2.0f64 / 3.0).sqrt();
        assert!((population_std_dev(&[1.0, 2.0, 3.0]) - expected).abs() < 1e-10);
    }

    #[test]
    fn test_even_spread_scores_one() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("math").with_weekly_lectures(5)];
        let teachers = vec![Teacher::new("kim")];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Tuesday, 1),
            make_entry(3, "math", "kim", Weekday::Wednesday, 1),
            make_entry(4, "math", "kim", Weekday::Thursday, 1),
            make_entry(5, "math", "kim", Weekday::Friday, 1),
        ];

        let metrics = QualityMetrics::calculate(&entries, &subjects, &teachers, &domain);
        assert_eq!(metrics.qualifying_subjects, 1);
        assert!((metrics.distribution_by_subject["math"] - 1.0).abs() < 1e-10);
        assert!((metrics.distribution_total - 1.0).abs() < 1e-10);
        assert!(!metrics.distribution_below_target());
    }

    #[test]
    fn test_clustered_subject_scores_low() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("math").with_weekly_lectures(4)];
        let teachers = vec![Teacher::new("kim")];
        // All four lectures on Monday: counts [4,0,0,0,0], σ = 1.6.
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Monday, 2),
            make_entry(3, "math", "kim", Weekday::Monday, 3),
            make_entry(4, "math", "kim", Weekday::Monday, 4),
        ];

        let metrics = QualityMetrics::calculate(&entries, &subjects, &teachers, &domain);
        let expected = 1.0 / 2.6;
        assert!((metrics.distribution_by_subject["math"] - expected).abs() < 1e-10);
        assert!(metrics.distribution_below_target());
    }

    #[test]
    fn test_single_lecture_subjects_do_not_qualify() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("art").with_weekly_lectures(1)];
        let teachers = vec![Teacher::new("kim")];
        let entries = vec![make_entry(1, "art", "kim", Weekday::Monday, 1)];

        let metrics = QualityMetrics::calculate(&entries, &subjects, &teachers, &domain);
        assert_eq!(metrics.qualifying_subjects, 0);
        assert!(metrics.distribution_by_subject.is_empty());
        assert!((metrics.distribution_total - 0.0).abs() < 1e-10);
        // Target is zero, so an empty total is not below it.
        assert!(!metrics.distribution_below_target());
    }

    #[test]
    fn test_unplaced_qualifying_subject_scores_one() {
        // Zero lectures are perfectly even; the shortfall is a lecture-count
        // finding, not a distribution one.
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("math").with_weekly_lectures(3)];
        let teachers = vec![Teacher::new("kim")];

        let metrics = QualityMetrics::calculate(&[], &subjects, &teachers, &domain);
        assert!((metrics.distribution_by_subject["math"] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_workload_counts_include_idle_teachers() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("math").with_weekly_lectures(4)];
        let teachers = vec![Teacher::new("kim"), Teacher::new("lee")];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Tuesday, 1),
            make_entry(3, "math", "kim", Weekday::Wednesday, 1),
            make_entry(4, "math", "kim", Weekday::Thursday, 1),
        ];

        let metrics = QualityMetrics::calculate(&entries, &subjects, &teachers, &domain);
        assert_eq!(metrics.workload_by_teacher["kim"], 4);
        assert_eq!(metrics.workload_by_teacher["lee"], 0);
        // Loads [4, 0]: σ = 2.0, right at the limit, not beyond it.
        assert!((metrics.workload_std_dev - 2.0).abs() < 1e-10);
        assert!(!metrics.workload_imbalanced());
    }

    #[test]
    fn test_workload_beyond_limit_is_imbalanced() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("math").with_weekly_lectures(5)];
        let teachers = vec![Teacher::new("kim"), Teacher::new("lee")];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Tuesday, 1),
            make_entry(3, "math", "kim", Weekday::Wednesday, 1),
            make_entry(4, "math", "kim", Weekday::Thursday, 1),
            make_entry(5, "math", "kim", Weekday::Friday, 1),
        ];

        let metrics = QualityMetrics::calculate(&entries, &subjects, &teachers, &domain);
        // Loads [5, 0]: σ = 2.5.
        assert!((metrics.workload_std_dev - 2.5).abs() < 1e-10);
        assert!(metrics.workload_imbalanced());
    }

    #[test]
    fn test_difficult_day_overload() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![
            Subject::new("math").with_weekly_lectures(4), // difficult
            Subject::new("art").with_weekly_lectures(2),  // not difficult
        ];
        let teachers = vec![Teacher::new("kim")];
        let entries = vec![
            make_entry(1, "math", "kim", Weekday::Monday, 1),
            make_entry(2, "math", "kim", Weekday::Monday, 2),
            make_entry(3, "art", "kim", Weekday::Monday, 3),
            make_entry(4, "math", "kim", Weekday::Tuesday, 1),
        ];

        let metrics = QualityMetrics::calculate(&entries, &subjects, &teachers, &domain);
        // Monday holds 2 difficult lectures against 1 difficult subject;
        // the art lecture does not count.
        assert_eq!(metrics.difficult_day_overloads, vec![Weekday::Monday]);
    }

    #[test]
    fn test_no_difficult_subjects_means_no_overloads() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("art").with_weekly_lectures(3)];
        let teachers = vec![Teacher::new("kim")];
        let entries = vec![
            make_entry(1, "art", "kim", Weekday::Monday, 1),
            make_entry(2, "art", "kim", Weekday::Monday, 2),
            make_entry(3, "art", "kim", Weekday::Monday, 3),
        ];

        let metrics = QualityMetrics::calculate(&entries, &subjects, &teachers, &domain);
        assert!(metrics.difficult_day_overloads.is_empty());
    }

    #[test]
    fn test_dangling_references_are_skipped() {
        let domain = SlotDomain::weekdays(6);
        let subjects = vec![Subject::new("math").with_weekly_lectures(2)];
        let teachers = vec![Teacher::new("kim")];
        let entries = vec![make_entry(1, "ghost-subject", "ghost-teacher", Weekday::Monday, 1)];

        let metrics = QualityMetrics::calculate(&entries, &subjects, &teachers, &domain);
        assert_eq!(metrics.workload_by_teacher.len(), 1);
        assert_eq!(metrics.workload_by_teacher["kim"], 0);
        assert!(!metrics.distribution_by_subject.contains_key("ghost-subject"));
    }
}
