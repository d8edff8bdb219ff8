//! Session cookie decoder.
//!
//! Grammar of the cookie value:
//!
//! ```text
//! cookie  := '{' [ entry ( sep entry )* ] '}'
//! sep     := '|' | ','
//! entry   := token ':' token
//! token   := char*          ; '*' inside a token is a literal ':'
//! char    := any except '{' '}' '|' ',' ':' '"' '\' and control characters
//! ```
//!
//! Decoding runs in two passes: [`tokenize`] does all delimiter
//! substitution, then the parser interprets the tokens as key/value data.

use crate::cookie::errors::DecodeError;
use crate::cookie::types::SessionRecord;
use std::collections::BTreeMap;
use std::iter::Peekable;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Open,
    Close,
    ItemSep,
    KeyValueSep,
    Text(String),
}

type Tokens = Peekable<std::vec::IntoIter<(usize, Token)>>;

fn tokenize(raw: &str) -> Result<Vec<(usize, Token)>, DecodeError> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut text_start = 0;

    for (position, ch) in raw.char_indices() {
        let token = match ch {
            '{' => Token::Open,
            '}' => Token::Close,
            '|' | ',' => Token::ItemSep,
            ':' => Token::KeyValueSep,
            '"' | '\\' => return Err(DecodeError::UnexpectedCharacter { ch, position }),
            c if c < '\u{20}' => return Err(DecodeError::UnexpectedCharacter { ch, position }),
            c => {
                if text.is_empty() {
                    text_start = position;
                }
                text.push(if c == '*' { ':' } else { c });
                continue;
            }
        };

        if !text.is_empty() {
            tokens.push((text_start, Token::Text(std::mem::take(&mut text))));
        }
        tokens.push((position, token));
    }

    if !text.is_empty() {
        tokens.push((text_start, Token::Text(text)));
    }

    Ok(tokens)
}

/// Consume a text token if one is next; an absent token is the empty string.
fn take_text(tokens: &mut Tokens) -> String {
    match tokens.next_if(|(_, token)| matches!(token, Token::Text(_))) {
        Some((_, Token::Text(text))) => text,
        _ => String::new(),
    }
}

fn parse_entry(tokens: &mut Tokens, entry: usize) -> Result<(String, String), DecodeError> {
    let key = take_text(tokens);

    match tokens.peek() {
        Some((_, Token::KeyValueSep)) => {
            tokens.next();
        }
        Some((_, Token::ItemSep | Token::Close)) if key.is_empty() => {
            return Err(DecodeError::EmptyEntry { entry });
        }
        Some((_, Token::ItemSep | Token::Close)) => {
            return Err(DecodeError::MissingSeparator { entry });
        }
        Some((position, _)) => {
            return Err(DecodeError::UnexpectedCharacter {
                ch: '{',
                position: *position,
            });
        }
        None => return Err(DecodeError::MissingCloseBrace),
    }

    let value = take_text(tokens);
    Ok((key, value))
}

/// Decode a raw session cookie value into a [`SessionRecord`].
///
/// Inputs of at most one character decode to an empty record. Anything else
/// that does not follow the grammar is a [`DecodeError`]; callers must not
/// treat it as an empty session.
pub fn decode(raw: &str) -> Result<SessionRecord, DecodeError> {
    if raw.chars().nth(1).is_none() {
        return Ok(SessionRecord::default());
    }

    let mut tokens = tokenize(raw)?.into_iter().peekable();

    if !matches!(tokens.next(), Some((_, Token::Open))) {
        return Err(DecodeError::MissingOpenBrace);
    }

    let mut fields = BTreeMap::new();

    if tokens.next_if(|(_, token)| *token == Token::Close).is_none() {
        let mut entry = 0;
        loop {
            let (key, value) = parse_entry(&mut tokens, entry)?;
            fields.insert(key, value);

            match tokens.next() {
                Some((_, Token::ItemSep)) => entry += 1,
                Some((_, Token::Close)) => break,
                Some((_, Token::KeyValueSep)) => return Err(DecodeError::ExtraSeparator { entry }),
                Some((position, _)) => {
                    return Err(DecodeError::UnexpectedCharacter { ch: '{', position });
                }
                None => return Err(DecodeError::MissingCloseBrace),
            }
        }
    }

    if let Some((position, _)) = tokens.next() {
        return Err(DecodeError::TrailingInput { position });
    }

    Ok(SessionRecord::from(fields))
}
