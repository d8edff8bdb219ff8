//! # Configuration System
//!
//! Hierarchical TOML configuration for the web UI.
//!
//! ## Configuration Hierarchy
//!
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.webui/config.toml`
//! 3. **Project config** - `./.webui/config.toml`
//! 4. **Environment** - `WEBUI_COOKIE_NAME`, `WEBUI_AUTH_ENDPOINT`,
//!    `WEBUI_INSTANCES_ENDPOINT`, `WEBUI_REFRESH_INTERVAL_SECS`
//! 5. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use webui_core::config::WebUiConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WebUiConfig::load_hierarchy()?;
//!     println!("polling {}", config.instances_endpoint());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{AuthConfig, HttpConfig, InstancesConfig, SessionConfig, ViewConfig, WebUiConfig};
pub use validation::validate_config;

impl WebUiConfig {
    /// Load configuration from the config file hierarchy and environment.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
