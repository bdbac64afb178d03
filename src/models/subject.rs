//! Subject model.
//!
//! A subject is one taught course with a weekly lecture target. Subjects
//! are seeded up front and referenced by id from placed entries.

use serde::{Deserialize, Serialize};

/// A course to be taught a fixed number of times per week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Number of lectures to place per week.
    pub weekly_lectures: u32,
}

impl Subject {
    /// Creates a subject with no name and a zero weekly target.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            weekly_lectures: 0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the weekly lecture target.
    pub fn with_weekly_lectures(mut self, weekly_lectures: u32) -> Self {
        self.weekly_lectures = weekly_lectures;
        self
    }

    /// Name used in human-readable messages; falls back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
