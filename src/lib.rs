pub mod config;
pub mod demangle;
pub mod error;
pub mod language;

pub use demangle::{DecodeError, DemangleOptions, DemangleResult, DemangleStatus, UnderscorePolicy};
pub use error::{Error, Result};
pub use language::Language;
