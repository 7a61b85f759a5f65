use crate::core::{ConfigProvider, Course, CourseId, GradeTable, Summary, ValidatedInput};
use crate::utils::error::ValidationError;

pub const DEFAULT_PLACEHOLDER_NAME: &str = "N/A";

/// Largest accepted credit-hour value. Keeps the weighted sums finite.
pub const MAX_CREDITS: f64 = 1e6;

/// Ordered list of recorded courses and the totals derived from it.
///
/// Courses are only ever appended by [`CourseLedger::add`] or dropped whole
/// by [`CourseLedger::remove`]; ids come from a counter that never rewinds.
#[derive(Debug, Clone)]
pub struct CourseLedger {
    courses: Vec<Course>,
    grade_table: GradeTable,
    placeholder_name: String,
    next_id: u64,
}

impl CourseLedger {
    pub fn new() -> Self {
        Self::with_grade_table(GradeTable::standard())
    }

    pub fn with_grade_table(grade_table: GradeTable) -> Self {
        Self {
            courses: Vec::new(),
            grade_table,
            placeholder_name: DEFAULT_PLACEHOLDER_NAME.to_string(),
            next_id: 1,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::with_grade_table(config.grade_table()).with_placeholder(config.placeholder_name())
    }

    /// Name stored for courses entered without one.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder_name = placeholder.into();
        self
    }

    /// Checks a grade selection and raw credit hours without touching the ledger.
    pub fn validate(
        &self,
        grade_selected: &str,
        credits_raw: &str,
    ) -> Result<ValidatedInput, ValidationError> {
        let grade = self
            .grade_table
            .lookup(grade_selected)
            .ok_or(ValidationError::MissingGrade)?;

        let credits = parse_credits(credits_raw)?;

        Ok(ValidatedInput {
            grade_label: grade.label.clone(),
            grade_points: grade.points,
            credits,
        })
    }

    pub fn add(
        &mut self,
        name: &str,
        grade_key: &str,
        credits_raw: &str,
    ) -> Result<Course, ValidationError> {
        let input = match self.validate(grade_key, credits_raw) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!(
                    grade = grade_key,
                    credits = credits_raw,
                    "Rejected course input: {}",
                    e
                );
                return Err(e);
            }
        };

        let name = match name.trim() {
            "" => self.placeholder_name.clone(),
            trimmed => trimmed.to_string(),
        };

        let id = CourseId(self.next_id);
        self.next_id += 1;

        let course = Course::new(id, name, input.grade_points, input.grade_label, input.credits);
        tracing::debug!(
            id = %course.id(),
            grade = course.grade_label(),
            credits = course.credits(),
            "Added course '{}'",
            course.name()
        );
        self.courses.push(course.clone());
        Ok(course)
    }

    pub fn remove(&mut self, id: CourseId) -> bool {
        match self.courses.iter().position(|course| course.id() == id) {
            Some(index) => {
                let removed = self.courses.remove(index);
                tracing::debug!(id = %id, "Removed course '{}'", removed.name());
                true
            }
            None => {
                tracing::debug!(id = %id, "No course to remove");
                false
            }
        }
    }

    pub fn summary(&self) -> Summary {
        let (quality_points, total_credits) = self
            .courses
            .iter()
            .fold((0.0, 0.0), |(qp, cr), course| {
                (qp + course.quality_points(), cr + course.credits())
            });

        let gpa = if total_credits > 0.0 {
            quality_points / total_credits
        } else {
            0.0
        };

        Summary {
            gpa,
            total_credits,
            course_count: self.courses.len(),
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == id)
    }

    pub fn grade_table(&self) -> &GradeTable {
        &self.grade_table
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Default for CourseLedger {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_credits(raw: &str) -> Result<f64, ValidationError> {
    let credits: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidCredits)?;

    if !credits.is_finite() || credits <= 0.0 || credits > MAX_CREDITS {
        return Err(ValidationError::InvalidCredits);
    }
    Ok(credits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grade::GradeEntry;

    #[test]
    fn test_validate_accepts_known_grade_and_positive_credits() {
        let ledger = CourseLedger::new();
        let input = ledger.validate("b+", " 3.5 ").unwrap();
        assert_eq!(input.grade_label, "B+");
        assert_eq!(input.grade_points, 3.3);
        assert_eq!(input.credits, 3.5);
    }

    #[test]
    fn test_validate_missing_grade_checked_first() {
        let ledger = CourseLedger::new();
        assert_eq!(
            ledger.validate("", "abc"),
            Err(ValidationError::MissingGrade)
        );
        assert_eq!(
            ledger.validate("Z", "3"),
            Err(ValidationError::MissingGrade)
        );
    }

    #[test]
    fn test_validate_rejects_bad_credits() {
        let ledger = CourseLedger::new();
        for raw in ["", "  ", "abc", "0", "-1", "0.0", "NaN", "inf", "3 credits"] {
            assert_eq!(
                ledger.validate("A", raw),
                Err(ValidationError::InvalidCredits),
                "credits {:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_validate_rejects_credits_above_limit() {
        let ledger = CourseLedger::new();
        assert!(ledger.validate("A", "1000000").is_ok());
        for raw in ["1000000.5", "1e7", "1e308"] {
            assert_eq!(
                ledger.validate("A", raw),
                Err(ValidationError::InvalidCredits)
            );
        }
    }

    #[test]
    fn test_summary_stays_finite_at_credit_limit() {
        let mut ledger = CourseLedger::new();
        assert_eq!(
            ledger.add("Big", "A", "1e308").unwrap_err(),
            ValidationError::InvalidCredits
        );
        ledger.add("Thesis", "B", "1e6").unwrap();
        ledger.add("Practicum", "B", "1e6").unwrap();

        let summary = ledger.summary();
        assert!(summary.gpa.is_finite());
        assert_eq!(summary.format_gpa(2), "3.00");
        assert_eq!(summary.total_credits, 2e6);
    }

    #[test]
    fn test_add_uses_placeholder_for_blank_name() {
        let mut ledger = CourseLedger::new();
        let course = ledger.add("   ", "A", "3").unwrap();
        assert_eq!(course.name(), "N/A");

        let mut custom = CourseLedger::new().with_placeholder("Untitled");
        assert_eq!(custom.add("", "A", "3").unwrap().name(), "Untitled");
    }

    #[test]
    fn test_add_trims_name_and_canonicalizes_label() {
        let mut ledger = CourseLedger::new();
        let course = ledger.add("  Physics  ", "c-", "4").unwrap();
        assert_eq!(course.name(), "Physics");
        assert_eq!(course.grade_label(), "C-");
        assert_eq!(course.grade_points(), 1.7);
        assert_eq!(course.credits(), 4.0);
    }

    #[test]
    fn test_ids_are_monotonic_and_not_reused() {
        let mut ledger = CourseLedger::new();
        let first = ledger.add("One", "A", "1").unwrap().id();
        let second = ledger.add("Two", "B", "1").unwrap().id();
        assert!(ledger.remove(second));
        let third = ledger.add("Three", "C", "1").unwrap().id();

        assert_eq!(first, CourseId(1));
        assert_eq!(second, CourseId(2));
        assert_eq!(third, CourseId(3));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut ledger = CourseLedger::new();
        ledger.add("One", "A", "3").unwrap();
        let before = ledger.summary();
        assert!(!ledger.remove(CourseId(99)));
        assert_eq!(ledger.summary(), before);
    }

    #[test]
    fn test_get_and_insertion_order() {
        let mut ledger = CourseLedger::new();
        let a = ledger.add("Art", "A", "2").unwrap().id();
        let b = ledger.add("Biology", "B", "3").unwrap().id();
        let names: Vec<&str> = ledger.courses().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Art", "Biology"]);
        assert_eq!(ledger.get(b).unwrap().name(), "Biology");
        assert!(ledger.remove(a));
        assert!(ledger.get(a).is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_custom_grade_table() {
        let table = GradeTable::new(vec![
            GradeEntry::new("Pass", 4.0),
            GradeEntry::new("Fail", 0.0),
        ]);
        let mut ledger = CourseLedger::with_grade_table(table);
        ledger.add("Seminar", "pass", "2").unwrap();
        assert_eq!(
            ledger.add("Lab", "A", "2").unwrap_err(),
            ValidationError::MissingGrade
        );
        assert_eq!(ledger.summary().gpa, 4.0);
    }
}
