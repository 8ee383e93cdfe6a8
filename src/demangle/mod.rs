//! Demangling outcomes and the facilities that produce them.
//!
//! Three sources of demangled text exist:
//!
//! - **Itanium** (`itanium`): the C++ ABI demangler, present with the `itanium` feature.
//! - **rustc** (`rustc`): the external Rust demangler, present with the `rust-demangle` feature.
//! - **Legacy** (`legacy`): the fallback for legacy Rust symbols, layered on the Itanium output.

pub mod itanium;
pub mod legacy;
#[cfg(feature = "rust-demangle")]
pub mod rustc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a single demangle attempt.
///
/// `Failure` and `NotAttempted` both mean "show the mangled name"; they differ only in
/// whether a demangler actually ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemangleResult {
    /// Fully demangled text. Never partial.
    Success(String),
    /// A demangler ran and could not produce a name.
    Failure,
    /// No demangling was attempted for this language or build.
    NotAttempted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemangleStatus {
    Success,
    Failure,
    NotAttempted,
}

impl DemangleResult {
    pub fn status(&self) -> DemangleStatus {
        match self {
            DemangleResult::Success(_) => DemangleStatus::Success,
            DemangleResult::Failure => DemangleStatus::Failure,
            DemangleResult::NotAttempted => DemangleStatus::NotAttempted,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DemangleResult::Success(_))
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            DemangleResult::Success(name) => Some(name),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            DemangleResult::Success(name) => Some(name),
            _ => None,
        }
    }

    /// The demangled name, or `mangled` when there is none.
    pub fn unwrap_or(self, mangled: &str) -> String {
        self.into_option().unwrap_or_else(|| mangled.to_string())
    }
}

impl std::fmt::Display for DemangleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemangleStatus::Success => write!(f, "success"),
            DemangleStatus::Failure => write!(f, "failure"),
            DemangleStatus::NotAttempted => write!(f, "not_attempted"),
        }
    }
}

/// What the legacy decoder does with an underscore outside an escape token.
///
/// The legacy encoding reserves `_` as a marker without a documented transformation, so
/// neither choice reconstructs the original identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnderscorePolicy {
    /// Fail decoding.
    #[default]
    Reject,
    /// Emit nothing and keep scanning. Known to lose underscores from identifiers.
    Drop,
}

impl std::str::FromStr for UnderscorePolicy {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(UnderscorePolicy::Reject),
            "drop" => Ok(UnderscorePolicy::Drop),
            other => Err(crate::Error::Usage(format!(
                "underscore policy must be 'reject' or 'drop', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemangleOptions {
    pub underscore: UnderscorePolicy,
}

impl DemangleOptions {
    pub fn with_underscore(underscore: UnderscorePolicy) -> Self {
        Self { underscore }
    }
}

/// Why the legacy Rust fallback rejected a name. Offsets are byte offsets into the
/// path being decoded (the text before `::h<hash>`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("not a legacy Rust name: missing '::h<16 hex digits>' suffix")]
    NotLegacyShaped,

    #[error("escape opened at offset {offset} has no closing '$'")]
    UnterminatedEscape { offset: usize },

    #[error("unknown escape token '${token}$' at offset {offset}")]
    UnknownEscape { token: String, offset: usize },

    #[error("bare underscore at offset {offset}")]
    BareUnderscore { offset: usize },

    #[error("no '$' opens an escape at offset {offset}")]
    MissingEscapeMarker { offset: usize },
}
