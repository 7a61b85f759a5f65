pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use app::{Calculator, OutputFormat, Session};
pub use config::TomlConfig;
pub use self::core::{
    ConfigProvider, Course, CourseId, CourseLedger, GradeEntry, GradeTable, Summary,
};
pub use utils::error::{LedgerError, Result, ValidationError};
