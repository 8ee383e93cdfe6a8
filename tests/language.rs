use symlang::demangle::legacy::{self, ESCAPE_TOKENS};
use symlang::language::registry;
use symlang::{DecodeError, DemangleOptions, DemangleResult, Language, UnderscorePolicy};

#[test]
fn test_empty_parent_for_every_language() {
    for language in registry::all() {
        assert_eq!(language.make_qualified_name("", "name"), "name");
    }
}

#[test]
fn test_qualified_names_per_language() {
    assert_eq!(registry::CPLUSPLUS.make_qualified_name("a", "b"), "a::b");
    assert_eq!(registry::JAVA.make_qualified_name("a", "b"), "a.b");
    assert_eq!(registry::SWIFT.make_qualified_name("a", "b"), "a.b");
    assert_eq!(registry::RUST.make_qualified_name("a", "b"), "a.b");
    assert_eq!(registry::ASSEMBLER.make_qualified_name("a", "b"), "b");
}

#[test]
fn test_joining_extends_existing_qualified_name() {
    let cpp = &registry::CPLUSPLUS;
    let ab = cpp.make_qualified_name("a", "b");
    assert_eq!(cpp.make_qualified_name(&ab, "c"), "a::b::c");
}

#[test]
fn test_has_functions_only_false_for_assembler() {
    for language in registry::all() {
        assert_eq!(language.has_functions(), *language != Language::Assembler);
    }
}

#[test]
fn test_every_escape_token_round_trips() {
    assert_eq!(ESCAPE_TOKENS.len(), 18);
    for (token, ch) in ESCAPE_TOKENS {
        let decoded = legacy::decode_escapes(&format!("${}$", token), UnderscorePolicy::Reject);
        assert_eq!(decoded, Ok(ch.to_string()));
    }
}

#[test]
fn test_unknown_and_unterminated_escapes_fail() {
    assert!(matches!(
        legacy::decode_escapes("$zz$", UnderscorePolicy::Reject),
        Err(DecodeError::UnknownEscape { .. })
    ));
    assert_eq!(
        legacy::decode_escapes("$u20", UnderscorePolicy::Reject),
        Err(DecodeError::UnterminatedEscape { offset: 0 })
    );
}

#[test]
fn test_legacy_end_to_end_from_cpp_output() {
    let options = DemangleOptions::default();
    assert_eq!(
        legacy::demangle_cpp_output("foo$u20$bar::h0123456789abcdef", &options),
        Ok("foo bar".to_string())
    );
    assert_eq!(
        legacy::demangle_cpp_output("foo$u20$bar", &options),
        Err(DecodeError::NotLegacyShaped)
    );
}

#[test]
fn test_multi_char_token_consumed_whole() {
    assert_eq!(
        legacy::decode_escapes("a$u20$20", UnderscorePolicy::Reject),
        Ok("a 20".to_string())
    );
}

#[test]
fn test_swift_identity() {
    for name in ["$s4main3FooV3baryyF", "_TtC4main3Foo", "x"] {
        assert_eq!(
            registry::SWIFT.demangle_name(name),
            DemangleResult::Success(name.to_string())
        );
    }
}

#[test]
fn test_singletons_shared_between_threads() {
    let expected = registry::lookup("rust").unwrap() as *const Language as usize;
    let seen = std::thread::spawn(|| registry::lookup("rust").unwrap() as *const Language as usize)
        .join()
        .unwrap();
    assert_eq!(seen, expected);
}

#[cfg(all(feature = "itanium", not(feature = "rust-demangle")))]
#[test]
fn test_rust_fallback_through_language() {
    let rust = Language::Rust.singleton();
    assert_eq!(
        rust.demangle_name("_ZN4test7example17h1234567890abcdefE"),
        DemangleResult::Success("test::example".to_string())
    );
    assert_eq!(rust.demangle_name("garbage"), DemangleResult::Failure);
}

#[cfg(feature = "itanium")]
#[test]
fn test_dwarf_unit_language_drives_demangling() {
    let language = Language::from_dwarf_lang(gimli::DW_LANG_C_plus_plus).unwrap();
    let demangled = language.demangle_or_mangled("_ZN4test7exampleEv");
    assert!(demangled.contains("test::example"), "got '{}'", demangled);
}
