use serde::{Deserialize, Serialize};

/// One row of the grade table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEntry {
    pub label: String,
    pub points: f64,
}

impl GradeEntry {
    pub fn new(label: impl Into<String>, points: f64) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

/// Fixed letter -> grade point mapping, kept in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeTable {
    entries: Vec<GradeEntry>,
}

const STANDARD_SCALE: [(&str, f64); 11] = [
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("F", 0.0),
];

impl GradeTable {
    pub fn new(entries: Vec<GradeEntry>) -> Self {
        Self { entries }
    }

    /// The 4.0 scale with plus/minus steps.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_SCALE
                .iter()
                .map(|(label, points)| GradeEntry::new(*label, *points))
                .collect(),
        )
    }

    /// Resolves a selection key. Surrounding whitespace and ASCII case are ignored.
    pub fn lookup(&self, key: &str) -> Option<&GradeEntry> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.label.eq_ignore_ascii_case(key))
    }

    pub fn entries(&self) -> &[GradeEntry] {
        &self.entries
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for GradeTable {
    fn default() -> Self {
        Self::standard()
    }
}
