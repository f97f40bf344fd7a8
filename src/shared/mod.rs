pub mod error;
pub mod result;

pub use error::{AdminError, ExitCode};
pub use result::Result;
