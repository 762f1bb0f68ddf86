use serde::{Deserialize, Serialize};
use std::fmt;

/// A single course-registration request.
///
/// The record is read-only once built: rules and observers only ever see it
/// through a shared reference, and there are no setters.
///
/// Negative credit loads cannot be expressed. An empty `name` is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Student {
    name: String,
    credit_load: u32,
    has_prerequisite: bool,
}

impl Student {
    /// Creates a new registration request.
    ///
    /// # Example
    ///
    /// ```rust
    /// use campus_domain::student::Student;
    ///
    /// let student = Student::new("Andi", 20, true);
    /// assert_eq!(student.credit_load(), 20);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, credit_load: u32, has_prerequisite: bool) -> Self {
        Self { name: name.into(), credit_load, has_prerequisite }
    }

    /// Student identifier used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Credit units requested for the term.
    #[must_use]
    pub const fn credit_load(&self) -> u32 {
        self.credit_load
    }

    /// Whether the prerequisite coursework has been completed.
    #[must_use]
    pub const fn has_prerequisite(&self) -> bool {
        self.has_prerequisite
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} credits)", self.name, self.credit_load)
    }
}
