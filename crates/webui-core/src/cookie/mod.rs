//! Session cookie decoding and encoding.

pub mod encoder;
pub mod errors;
pub mod parser;
pub mod types;

pub use encoder::encode;
pub use errors::{DecodeError, EncodeError};
pub use parser::decode;
pub use types::SessionRecord;
