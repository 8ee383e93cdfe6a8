//! Itanium C++ ABI demangler facility.
//!
//! Without the `itanium` feature every call reports `NotAttempted`, the same as a
//! platform that ships no C++ demangler.

use super::DemangleResult;

#[cfg(feature = "itanium")]
pub fn demangle(mangled: &str) -> DemangleResult {
    use cpp_demangle::Symbol as CppSymbol;

    let symbol = match CppSymbol::new(mangled) {
        Ok(symbol) => symbol,
        Err(e) => {
            tracing::debug!("Itanium parse failed for '{}': {}", mangled, e);
            return DemangleResult::Failure;
        }
    };

    match symbol.demangle(&cpp_demangle::DemangleOptions::default()) {
        Ok(demangled) => DemangleResult::Success(demangled),
        Err(e) => {
            tracing::debug!("Itanium formatting failed for '{}': {}", mangled, e);
            DemangleResult::Failure
        }
    }
}

#[cfg(not(feature = "itanium"))]
pub fn demangle(_mangled: &str) -> DemangleResult {
    DemangleResult::NotAttempted
}

/// Whether this build carries the Itanium demangler.
pub const fn available() -> bool {
    cfg!(feature = "itanium")
}
