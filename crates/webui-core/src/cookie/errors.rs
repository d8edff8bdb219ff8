use crate::errors::WebUiError;

/// The cookie value does not follow the session cookie grammar.
///
/// Positions are byte offsets into the raw cookie text; entry indexes are
/// zero-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Malformed cookie grammar: value must start with '{{'")]
    MissingOpenBrace,

    #[error("Malformed cookie grammar: missing closing '}}'")]
    MissingCloseBrace,

    #[error("Malformed cookie grammar: unexpected '{ch}' at offset {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("Malformed cookie grammar: entry {entry} has no ':' separator")]
    MissingSeparator { entry: usize },

    #[error("Malformed cookie grammar: entry {entry} has more than one ':' separator")]
    ExtraSeparator { entry: usize },

    #[error("Malformed cookie grammar: entry {entry} is empty")]
    EmptyEntry { entry: usize },

    #[error("Malformed cookie grammar: unexpected input after '}}' at offset {position}")]
    TrailingInput { position: usize },
}

impl WebUiError for DecodeError {
    fn error_code(&self) -> &'static str {
        match self {
            DecodeError::MissingOpenBrace => "COOKIE_MISSING_OPEN_BRACE",
            DecodeError::MissingCloseBrace => "COOKIE_MISSING_CLOSE_BRACE",
            DecodeError::UnexpectedCharacter { .. } => "COOKIE_UNEXPECTED_CHARACTER",
            DecodeError::MissingSeparator { .. } => "COOKIE_MISSING_SEPARATOR",
            DecodeError::ExtraSeparator { .. } => "COOKIE_EXTRA_SEPARATOR",
            DecodeError::EmptyEntry { .. } => "COOKIE_EMPTY_ENTRY",
            DecodeError::TrailingInput { .. } => "COOKIE_TRAILING_INPUT",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

/// A session record holds text the cookie grammar cannot carry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("Cannot encode '{ch}' in session field '{key}'")]
    Unrepresentable { key: String, ch: char },
}

impl WebUiError for EncodeError {
    fn error_code(&self) -> &'static str {
        match self {
            EncodeError::Unrepresentable { .. } => "COOKIE_UNREPRESENTABLE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
