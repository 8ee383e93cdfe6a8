use crate::demangle::DecodeError;

/// Every `$token$` the legacy mangler emits, with the character it stands for.
pub const ESCAPE_TOKENS: [(&str, char); 18] = [
    ("C", ','),
    ("SP", '@'),
    ("BP", '*'),
    ("RF", '&'),
    ("LT", '<'),
    ("GT", '>'),
    ("LP", '('),
    ("RP", ')'),
    ("u20", ' '),
    ("u22", '\\'),
    ("u27", '\''),
    ("u2b", '+'),
    ("u3b", ';'),
    ("u5b", '['),
    ("u5d", ']'),
    ("u7b", '{'),
    ("u7d", '}'),
    ("u7e", '~'),
];

pub const ESCAPE_MARKER: char = '$';

/// Resolve the text between two `$` markers. Case-sensitive.
pub fn lookup(token: &str) -> Option<char> {
    ESCAPE_TOKENS
        .iter()
        .find(|(text, _)| *text == token)
        .map(|&(_, ch)| ch)
}

/// A resolved escape token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeToken<'a> {
    pub text: &'a str,
    pub ch: char,
    /// Byte index just past the closing `$`.
    pub end: usize,
}

/// Scan the token whose opening `$` sits at `open`.
///
/// The token runs to the next `$`; the returned `end` is where literal scanning resumes.
/// `open` must index a `$` on a character boundary.
pub fn scan_token(input: &str, open: usize) -> Result<EscapeToken<'_>, DecodeError> {
    if !input.get(open..).is_some_and(|s| s.starts_with(ESCAPE_MARKER)) {
        return Err(DecodeError::MissingEscapeMarker { offset: open });
    }
    let start = open + ESCAPE_MARKER.len_utf8();
    let rest = input
        .get(start..)
        .ok_or(DecodeError::UnterminatedEscape { offset: open })?;
    let len = rest
        .find(ESCAPE_MARKER)
        .ok_or(DecodeError::UnterminatedEscape { offset: open })?;

    let text = &rest[..len];
    let ch = lookup(text).ok_or_else(|| DecodeError::UnknownEscape {
        token: text.to_string(),
        offset: open,
    })?;

    Ok(EscapeToken {
        text,
        ch,
        end: start + len + ESCAPE_MARKER.len_utf8(),
    })
}
