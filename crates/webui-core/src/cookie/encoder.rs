use crate::cookie::errors::EncodeError;
use crate::cookie::types::SessionRecord;

fn push_token(out: &mut String, key: &str, token: &str) -> Result<(), EncodeError> {
    for ch in token.chars() {
        match ch {
            ':' => out.push('*'),
            '{' | '}' | '|' | ',' | '"' | '\\' | '*' => {
                return Err(EncodeError::Unrepresentable {
                    key: key.to_string(),
                    ch,
                });
            }
            c if c < '\u{20}' => {
                return Err(EncodeError::Unrepresentable {
                    key: key.to_string(),
                    ch: c,
                });
            }
            c => out.push(c),
        }
    }
    Ok(())
}

/// Encode a session record in the cookie grammar, fields in key order.
///
/// Output always decodes back to an equal record.
pub fn encode(record: &SessionRecord) -> Result<String, EncodeError> {
    let mut out = String::from("{");

    for (index, (key, value)) in record.iter().enumerate() {
        if index > 0 {
            out.push('|');
        }
        push_token(&mut out, key, key)?;
        out.push(':');
        push_token(&mut out, key, value)?;
    }

    out.push('}');
    Ok(out)
}
