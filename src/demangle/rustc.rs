//! External Rust demangler facility (`rust-demangle` feature).
//!
//! Handles both legacy (`_ZN...17h<hash>E`) and v0 (`_R...`) symbols. The hash suffix is
//! omitted so the output has the same shape as the legacy fallback decoder's.

use super::DemangleResult;

/// Demangle with `rustc-demangle`. The `::h<hash>` suffix is left out on purpose.
pub fn demangle(mangled: &str) -> DemangleResult {
    match rustc_demangle::try_demangle(mangled) {
        Ok(demangled) => DemangleResult::Success(format!("{:#}", demangled)),
        Err(_) => {
            tracing::debug!("rustc-demangle rejected '{}'", mangled);
            DemangleResult::Failure
        }
    }
}
