//! Fallback demangler for legacy Rust symbols.
//!
//! Legacy Rust mangling is Itanium C++ mangling with two extra layers: characters outside
//! the identifier alphabet are written as `$token$` escapes, and every path ends in a
//! `::h<16 hex digits>` content hash. Demangling runs the Itanium demangler, strips the
//! hash, then decodes the escapes.

mod decoder;
pub mod escape;

pub use decoder::decode_escapes;
pub use escape::{lookup, scan_token, EscapeToken, ESCAPE_TOKENS};

use std::sync::LazyLock;

use regex::Regex;

use super::{itanium, DecodeError, DemangleOptions, DemangleResult};

static LEGACY_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_.:$]+)::h([0-9a-f]{16})$").expect("legacy shape pattern is valid")
});

/// Itanium output of a legacy Rust symbol, split at the hash suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyPath<'a> {
    /// Still-escaped path, e.g. `foo$u20$bar`.
    pub path: &'a str,
    /// The 16 lowercase hex digits after `::h`.
    pub hash: &'a str,
}

/// Split Itanium output into path and hash, or `None` if it is not legacy-Rust shaped.
pub fn split_hash(cpp_demangled: &str) -> Option<LegacyPath<'_>> {
    let caps = LEGACY_SHAPE.captures(cpp_demangled)?;
    Some(LegacyPath {
        path: caps.get(1)?.as_str(),
        hash: caps.get(2)?.as_str(),
    })
}

/// Turn Itanium output such as `foo$u20$bar::h0123456789abcdef` into `foo bar`.
pub fn demangle_cpp_output(
    cpp_demangled: &str,
    options: &DemangleOptions,
) -> Result<String, DecodeError> {
    let legacy = split_hash(cpp_demangled).ok_or(DecodeError::NotLegacyShaped)?;
    tracing::trace!("legacy path '{}' hash {}", legacy.path, legacy.hash);
    decode_escapes(legacy.path, options.underscore)
}

/// Full fallback pipeline: Itanium demangle, hash strip, escape decode.
///
/// A missing Itanium facility yields `NotAttempted`; every other problem is `Failure`.
pub fn demangle(mangled: &str, options: &DemangleOptions) -> DemangleResult {
    let cpp_demangled = match itanium::demangle(mangled) {
        DemangleResult::Success(name) => name,
        other => return other,
    };

    match demangle_cpp_output(&cpp_demangled, options) {
        Ok(name) => DemangleResult::Success(name),
        Err(e) => {
            tracing::debug!("legacy Rust decode failed for '{}': {}", mangled, e);
            DemangleResult::Failure
        }
    }
}
