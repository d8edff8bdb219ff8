//! HTTP seam: request/response types, the backend API envelope and the
//! [`Transport`] trait the host provides.

pub mod errors;
pub mod transport;
pub mod types;

pub use errors::{ProtocolError, TransportError};
pub use transport::{Transport, get_envelope};
pub use types::{ApiEnvelope, ApiHeader, HttpRequest, HttpResponse, STATUS_SUCCESS};
