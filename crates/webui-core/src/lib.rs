//! webui-core: Core library for the instances web UI
//!
//! This library decodes the session cookie, probes the authentication
//! endpoint for an avatar and drives a live table of remote instances.
//! It talks to the outside world only through the [`http::Transport`] and
//! [`page::Page`] traits, so the CLI and the tests plug in their own.
//!
//! # Main Entry Points
//!
//! - [`bootstrap`] - Page-load sequence: cookie, probe, table
//! - [`cookie`] - Session cookie codec
//! - [`auth`] - Session authentication probe
//! - [`instances`] - Instance list fetching and ordering
//! - [`view`] - Reactive instance table
//! - [`config`] - Configuration management

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod cookie;
pub mod errors;
pub mod events;
pub mod http;
pub mod instances;
pub mod logging;
pub mod page;
pub mod view;

#[cfg(test)]
mod testing;

// Re-export commonly used types at crate root for convenience
pub use auth::{AuthenticationResult, ProbeError, SessionProbe};
pub use bootstrap::{AppContext, bootstrap};
pub use config::WebUiConfig;
pub use cookie::{DecodeError, EncodeError, SessionRecord};
pub use errors::{ConfigError, WebUiError, WebUiResult};
pub use http::{HttpRequest, HttpResponse, ProtocolError, Transport, TransportError};
pub use instances::{FetchError, Instance, InstanceDataSource, InstanceList, InstanceSnapshot};
pub use page::{MemoryPage, Page};
pub use view::{
    FetchResolution, RenderedTable, ResponseOrdering, Row, TableProps, TableView, ViewPhase,
};

// Re-export logging initialization
pub use logging::init_logging;
