pub mod import;
pub mod ledger;
pub mod report;

pub use crate::domain::grade::{GradeEntry, GradeTable};
pub use crate::domain::model::{Course, CourseId, Summary, ValidatedInput};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
pub use ledger::CourseLedger;
