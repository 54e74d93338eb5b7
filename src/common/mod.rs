pub mod error;
pub mod logging;
pub mod result;

pub use error::ClonerError;
pub use logging::{init_logging, LoggingConfig};
pub use result::{ClonerResult, ClonerResultExt, OptionExt};
