use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle for a course stored in a ledger. Never reused within a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CourseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(CourseId)
    }
}

/// A recorded course. Only the ledger constructs these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    id: CourseId,
    name: String,
    grade_points: f64,
    grade_label: String,
    credits: f64,
}

impl Course {
    pub(crate) fn new(
        id: CourseId,
        name: String,
        grade_points: f64,
        grade_label: String,
        credits: f64,
    ) -> Self {
        Self {
            id,
            name,
            grade_points,
            grade_label,
            credits,
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade_points(&self) -> f64 {
        self.grade_points
    }

    pub fn grade_label(&self) -> &str {
        &self.grade_label
    }

    pub fn credits(&self) -> f64 {
        self.credits
    }

    /// Grade points weighted by credit hours.
    pub fn quality_points(&self) -> f64 {
        self.grade_points * self.credits
    }
}

/// Grade and credits that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub grade_label: String,
    pub grade_points: f64,
    pub credits: f64,
}

/// Derived totals over a ledger. `gpa` is unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    pub gpa: f64,
    pub total_credits: f64,
    pub course_count: usize,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.course_count == 0
    }

    /// GPA rounded half away from zero to `precision` decimal places.
    pub fn rounded_gpa(&self, precision: usize) -> f64 {
        let factor = 10f64.powi(precision as i32);
        (self.gpa * factor).round() / factor
    }

    pub fn format_gpa(&self, precision: usize) -> String {
        format!("{:.*}", precision, self.rounded_gpa(precision))
    }
}
