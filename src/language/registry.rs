//! Process-wide language singletons.
//!
//! Each language has exactly one `'static` instance, built at compile time and never
//! mutated, so handles can be shared across threads and compared with `std::ptr::eq`.

use super::Language;

pub static CPLUSPLUS: Language = Language::CPlusPlus;
pub static JAVA: Language = Language::Java;
pub static SWIFT: Language = Language::Swift;
pub static RUST: Language = Language::Rust;
pub static ASSEMBLER: Language = Language::Assembler;

/// The shared instance for `language`.
pub fn get(language: Language) -> &'static Language {
    match language {
        Language::CPlusPlus => &CPLUSPLUS,
        Language::Java => &JAVA,
        Language::Swift => &SWIFT,
        Language::Rust => &RUST,
        Language::Assembler => &ASSEMBLER,
    }
}

pub fn all() -> [&'static Language; 5] {
    Language::ALL.map(get)
}

/// Find a singleton by any name `Language::from_str` accepts.
pub fn lookup(name: &str) -> Option<&'static Language> {
    name.parse::<Language>().ok().map(get)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_is_stable() {
        for language in Language::ALL {
            assert!(std::ptr::eq(get(language), get(language)));
            assert_eq!(*get(language), language);
        }
    }

    #[test]
    fn test_singletons_are_distinct() {
        let handles = all();
        for (i, a) in handles.iter().enumerate() {
            for b in &handles[i + 1..] {
                assert!(!std::ptr::eq(*a, *b));
            }
        }
    }

    #[test]
    fn test_lookup_returns_shared_instance() {
        assert!(std::ptr::eq(lookup("rust").unwrap(), &RUST));
        assert!(std::ptr::eq(lookup("C++").unwrap(), &CPLUSPLUS));
        assert!(std::ptr::eq(lookup("asm").unwrap(), &ASSEMBLER));
        assert!(std::ptr::eq(Language::Java.singleton(), &JAVA));
        assert!(lookup("kotlin").is_none());
    }

    #[test]
    fn test_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| get(Language::Swift) as *const Language as usize))
            .collect();
        let expected = &SWIFT as *const Language as usize;
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
