//! Per-language name handling.
//!
//! A [`Language`] answers two questions about the names a compilation unit produces:
//! how a scope's name and an inner name join into one qualified name, and how a single
//! mangled name turns into a readable one. The set of languages is closed; callers that
//! need shared, identity-comparable handles use the singletons in [`registry`].

pub mod dwarf;
pub mod registry;

pub use registry::{ASSEMBLER, CPLUSPLUS, JAVA, RUST, SWIFT};

use serde::{Deserialize, Serialize};

use crate::demangle::{self, DemangleOptions, DemangleResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[serde(rename = "cpp", alias = "c++")]
    CPlusPlus,
    Java,
    Swift,
    Rust,
    Assembler,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::CPlusPlus,
        Language::Java,
        Language::Swift,
        Language::Rust,
        Language::Assembler,
    ];

    /// Stable lowercase identifier, accepted back by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Language::CPlusPlus => "cpp",
            Language::Java => "java",
            Language::Swift => "swift",
            Language::Rust => "rust",
            Language::Assembler => "assembler",
        }
    }

    /// False only for assembler, whose units carry no language-level functions.
    pub fn has_functions(&self) -> bool {
        !matches!(self, Language::Assembler)
    }

    /// Scope separator, or `None` where names never nest.
    pub fn separator(&self) -> Option<&'static str> {
        match self {
            Language::CPlusPlus => Some("::"),
            Language::Java | Language::Swift | Language::Rust => Some("."),
            Language::Assembler => None,
        }
    }

    /// Join `parent` and `name`. An empty parent yields `name`; assembler ignores the parent.
    pub fn make_qualified_name(&self, parent: &str, name: &str) -> String {
        match self.separator() {
            Some(separator) if !parent.is_empty() => {
                let mut qualified = String::with_capacity(parent.len() + separator.len() + name.len());
                qualified.push_str(parent);
                qualified.push_str(separator);
                qualified.push_str(name);
                qualified
            }
            _ => name.to_string(),
        }
    }

    pub fn demangle_name(&self, mangled: &str) -> DemangleResult {
        self.demangle_name_with(mangled, &DemangleOptions::default())
    }

    pub fn demangle_name_with(&self, mangled: &str, options: &DemangleOptions) -> DemangleResult {
        match self {
            Language::CPlusPlus => demangle::itanium::demangle(mangled),
            // No Java demangler exists; callers keep the mangled name.
            Language::Java => DemangleResult::NotAttempted,
            // No in-process Swift demangler. The mangled form carries more than a joined
            // qualified name would, and can be post-processed with swift-demangle.
            Language::Swift => DemangleResult::Success(mangled.to_string()),
            Language::Rust => demangle_rust(mangled, options),
            Language::Assembler => DemangleResult::NotAttempted,
        }
    }

    /// Demangled name when there is one, the mangled name otherwise.
    pub fn demangle_or_mangled(&self, mangled: &str) -> String {
        self.demangle_name(mangled).unwrap_or(mangled)
    }

    /// The process-wide shared instance for this language.
    pub fn singleton(self) -> &'static Language {
        registry::get(self)
    }

    pub fn from_dwarf_lang(lang: gimli::DwLang) -> Option<&'static Language> {
        dwarf::from_dwarf_lang(lang)
    }
}

#[cfg(feature = "rust-demangle")]
fn demangle_rust(mangled: &str, _options: &DemangleOptions) -> DemangleResult {
    demangle::rustc::demangle(mangled)
}

#[cfg(not(feature = "rust-demangle"))]
fn demangle_rust(mangled: &str, options: &DemangleOptions) -> DemangleResult {
    demangle::legacy::demangle(mangled, options)
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "c++" | "cpp" | "cplusplus" | "cxx" => Ok(Language::CPlusPlus),
            "java" => Ok(Language::Java),
            "swift" => Ok(Language::Swift),
            "rust" => Ok(Language::Rust),
            "asm" | "assembler" => Ok(Language::Assembler),
            _ => Err(crate::Error::UnknownLanguage(s.to_string())),
        }
    }
}
