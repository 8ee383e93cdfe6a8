use gimli::DwLang;

use super::{registry, Language};

/// Map a compilation unit's `DW_AT_language` to the language that names its symbols.
///
/// C and Objective-C units share the C++ joiner and demangler. Returns `None` for languages
/// outside the five handled here; the caller picks a default.
pub fn from_dwarf_lang(lang: DwLang) -> Option<&'static Language> {
    let language = match lang {
        gimli::DW_LANG_C89
        | gimli::DW_LANG_C
        | gimli::DW_LANG_C99
        | gimli::DW_LANG_C11
        | gimli::DW_LANG_C_plus_plus
        | gimli::DW_LANG_C_plus_plus_03
        | gimli::DW_LANG_C_plus_plus_11
        | gimli::DW_LANG_C_plus_plus_14
        | gimli::DW_LANG_ObjC
        | gimli::DW_LANG_ObjC_plus_plus => Language::CPlusPlus,
        gimli::DW_LANG_Java => Language::Java,
        gimli::DW_LANG_Swift => Language::Swift,
        gimli::DW_LANG_Rust => Language::Rust,
        gimli::DW_LANG_Mips_Assembler => Language::Assembler,
        _ => return None,
    };
    Some(registry::get(language))
}
