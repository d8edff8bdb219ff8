//! Session authentication probe.

pub mod errors;
pub mod probe;
pub mod types;

pub use errors::ProbeError;
pub use probe::SessionProbe;
pub use types::{AuthPayload, AuthStatus, AuthenticationResult};
