pub mod calc;
pub mod session;

pub use calc::{Calculator, OutputFormat};
pub use session::{Session, SessionCommand};
