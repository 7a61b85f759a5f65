use crate::core::{Course, CourseLedger, GradeTable, Summary};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

pub const EMPTY_LIST_MESSAGE: &str = "No courses added yet.";
pub const EMPTY_SUMMARY_MESSAGE: &str = "Add courses to calculate your GPA";

/// Summary as shown to users, with the GPA already rounded.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub gpa: f64,
    pub total_credits: f64,
    pub course_count: usize,
}

impl SummaryView {
    pub fn new(summary: &Summary, precision: usize) -> Self {
        Self {
            gpa: summary.rounded_gpa(precision),
            total_credits: summary.total_credits,
            course_count: summary.course_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LedgerReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub courses: &'a [Course],
    pub summary: SummaryView,
}

impl<'a> LedgerReport<'a> {
    pub fn new(ledger: &'a CourseLedger, precision: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            courses: ledger.courses(),
            summary: SummaryView::new(&ledger.summary(), precision),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn render_course_table(courses: &[Course]) -> String {
    if courses.is_empty() {
        return format!("{}\n", EMPTY_LIST_MESSAGE);
    }

    let name_width = courses
        .iter()
        .map(|course| course.name().chars().count())
        .max()
        .unwrap_or(0)
        .max("Course".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<name_width$}  {:<5}  {:>7}",
        "ID", "Course", "Grade", "Credits"
    );
    for course in courses {
        let _ = writeln!(
            out,
            "{:>4}  {:<name_width$}  {:<5}  {:>7}",
            course.id(),
            course.name(),
            course.grade_label(),
            course.credits()
        );
    }
    out
}

pub fn render_summary(summary: &Summary, precision: usize) -> String {
    if summary.is_empty() {
        return format!("{}\n", EMPTY_SUMMARY_MESSAGE);
    }
    format!(
        "Your current GPA is: {}\nTotal Credits: {}\n",
        summary.format_gpa(precision),
        summary.total_credits
    )
}

pub fn render_grade_table(table: &GradeTable) -> String {
    let mut out = String::new();
    for entry in table.entries() {
        let _ = writeln!(out, "{:<3} {:.1}", entry.label, entry.points);
    }
    out
}
