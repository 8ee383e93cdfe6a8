use super::escape::{scan_token, ESCAPE_MARKER};
use crate::demangle::{DecodeError, UnderscorePolicy};

const RESERVED_MARKER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Copying characters through.
    Literal,
    /// Positioned on the `$` that opens a token.
    Escape { open: usize },
}

/// Decode `$token$` escapes in a legacy Rust path.
///
/// Either the whole input decodes or an error is returned; partial output is never
/// produced. Scanning only finishes in the literal state, so input that ends inside a
/// token is an error.
pub fn decode_escapes(input: &str, underscore: UnderscorePolicy) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;
    let mut state = State::Literal;

    loop {
        state = match state {
            State::Literal => {
                let Some(ch) = input[pos..].chars().next() else {
                    break;
                };
                match ch {
                    ESCAPE_MARKER => State::Escape { open: pos },
                    RESERVED_MARKER => {
                        if underscore == UnderscorePolicy::Reject {
                            return Err(DecodeError::BareUnderscore { offset: pos });
                        }
                        pos += RESERVED_MARKER.len_utf8();
                        State::Literal
                    }
                    _ => {
                        out.push(ch);
                        pos += ch.len_utf8();
                        State::Literal
                    }
                }
            }
            State::Escape { open } => {
                let token = scan_token(input, open)?;
                out.push(token.ch);
                pos = token.end;
                State::Literal
            }
        };
    }

    Ok(out)
}
