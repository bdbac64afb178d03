//! Time slot and weekly grid models.
//!
//! A slot is a (day, period) coordinate in a fixed weekly grid. Slots are
//! plain values: they appear inside teacher availability sets and as the
//! grid coordinates of placed lectures.
//!
//! # Ordering
//! Slots order by day first (calendar order), then period ascending. Slot
//! sets and grid scans therefore iterate deterministically.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A weekday, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven weekdays in calendar order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// English day name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (day, period) coordinate in the weekly grid.
///
/// Periods are 1-based within a day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeSlot {
    /// Day of week.
    pub day: Weekday,
    /// Period within the day (1-based).
    pub period: u8,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(day: Weekday, period: u8) -> Self {
        Self { day, period }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} P{}", self.day, self.period)
    }
}

/// The weekly day/period grid a timetable is placed into.
///
/// Owns the ordered day list and the period count per day. Every grid scan
/// in the crate iterates day-major: days in the domain's order, periods
/// ascending within each day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDomain {
    days: Vec<Weekday>,
    periods_per_day: u8,
}

impl SlotDomain {
    /// Creates a domain from an ordered day list and a period count.
    pub fn new(days: Vec<Weekday>, periods_per_day: u8) -> Self {
        Self {
            days,
            periods_per_day,
        }
    }

    /// Standard Monday through Friday school week.
    pub fn weekdays(periods_per_day: u8) -> Self {
        Self::new(Weekday::ALL[..5].to_vec(), periods_per_day)
    }

    /// Days in domain order.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Number of periods in each day.
    #[inline]
    pub fn periods_per_day(&self) -> u8 {
        self.periods_per_day
    }

    /// Periods of one day, ascending.
    pub fn periods(&self) -> std::ops::RangeInclusive<u8> {
        1..=self.periods_per_day
    }

    /// Whether a slot lies inside this grid.
    pub fn contains(&self, slot: TimeSlot) -> bool {
        slot.period >= 1 && slot.period <= self.periods_per_day && self.days.contains(&slot.day)
    }

    /// Total number of slots in the grid.
    pub fn slot_count(&self) -> usize {
        self.days.len() * self.periods_per_day as usize
    }

    /// All slots, day-major.
    pub fn iter(&self) -> impl Iterator<Item = TimeSlot> + '_ {
        self.days
            .iter()
            .flat_map(move |&day| self.periods().map(move |period| TimeSlot::new(day, period)))
    }
}
