//! Class group model.
//!
//! A class group scopes a timetable grid: each group fills its own weekly
//! grid, while teachers are shared across all groups. A timetable with no
//! class groups operates on a single implicit grid.

use serde::{Deserialize, Serialize};

/// A group of students sharing one weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassGroup {
    /// Unique class identifier.
    pub id: String,
    /// Human-readable name (e.g. "5A").
    pub name: String,
}

impl ClassGroup {
    /// Creates a class group with no name.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
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
