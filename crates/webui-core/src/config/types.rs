//! Configuration type definitions for the web UI.
//!
//! Every field is optional so that a partial config file only overrides
//! what it names. Accessor methods resolve unset fields to the defaults in
//! [`crate::config::defaults`].
//!
//! # Example Configuration
//!
//! ```toml
//! [session]
//! cookie_name = "webui-sess"
//!
//! [auth]
//! endpoint = "http://192.168.99.100:8080/authenticated"
//!
//! [instances]
//! endpoint = "http://localhost/ec2/instances/"
//! refresh_interval_secs = 5
//! ordering = "issue"
//!
//! [view]
//! container = "data"
//!
//! [http]
//! max_response_mb = 100
//! ```

use crate::config::defaults;
use crate::view::ResponseOrdering;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration loaded from TOML config files and the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WebUiConfig {
    /// Session cookie settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Authentication probe settings
    #[serde(default)]
    pub auth: AuthConfig,

    /// Instance list endpoint and refresh behavior
    #[serde(default)]
    pub instances: InstancesConfig,

    /// Where and how the view is mounted
    #[serde(default)]
    pub view: ViewConfig,

    /// HTTP transport limits
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Name of the session cookie. Default: `webui-sess`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Endpoint answering whether the current session is authenticated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InstancesConfig {
    /// Endpoint returning the instance list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Polling interval in seconds for `webui view --watch`. Without
    /// `--watch` the table only refreshes on mount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval_secs: Option<u64>,

    /// How overlapping fetch responses are applied. Default: arrival order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<ResponseOrdering>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ViewConfig {
    /// Id of the container the table is mounted into. Default: `data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,

    /// Scheme prepended to the protocol-relative avatar path. Default: `https:`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_scheme: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HttpConfig {
    /// Maximum accepted response body size in megabytes. Default: 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_response_mb: Option<u64>,

    /// Whether to advertise gzip support. Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gzip: Option<bool>,
}

impl WebUiConfig {
    pub fn cookie_name(&self) -> &str {
        self.session
            .cookie_name
            .as_deref()
            .unwrap_or(defaults::DEFAULT_COOKIE_NAME)
    }

    pub fn auth_endpoint(&self) -> &str {
        self.auth
            .endpoint
            .as_deref()
            .unwrap_or(defaults::DEFAULT_AUTH_ENDPOINT)
    }

    pub fn instances_endpoint(&self) -> &str {
        self.instances
            .endpoint
            .as_deref()
            .unwrap_or(defaults::DEFAULT_INSTANCES_ENDPOINT)
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        self.instances
            .refresh_interval_secs
            .map(Duration::from_secs)
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.instances.ordering.unwrap_or_default()
    }

    pub fn container(&self) -> &str {
        self.view
            .container
            .as_deref()
            .unwrap_or(defaults::DEFAULT_CONTAINER)
    }

    pub fn avatar_scheme(&self) -> &str {
        self.view
            .avatar_scheme
            .as_deref()
            .unwrap_or(defaults::DEFAULT_AVATAR_SCHEME)
    }

    pub fn max_response_bytes(&self) -> u64 {
        self.http
            .max_response_mb
            .unwrap_or(defaults::DEFAULT_MAX_RESPONSE_MB)
            .saturating_mul(1024 * 1024)
    }

    pub fn gzip(&self) -> bool {
        self.http.gzip.unwrap_or(true)
    }

    /// Copy of this config with every unset field filled from the defaults.
    ///
    /// Used to show the effective configuration; the refresh interval stays
    /// unset because "no polling" is itself the default.
    pub fn resolved(&self) -> WebUiConfig {
        WebUiConfig {
            session: SessionConfig {
                cookie_name: Some(self.cookie_name().to_string()),
            },
            auth: AuthConfig {
                endpoint: Some(self.auth_endpoint().to_string()),
            },
            instances: InstancesConfig {
                endpoint: Some(self.instances_endpoint().to_string()),
                refresh_interval_secs: self.instances.refresh_interval_secs,
                ordering: Some(self.ordering()),
            },
            view: ViewConfig {
                container: Some(self.container().to_string()),
                avatar_scheme: Some(self.avatar_scheme().to_string()),
            },
            http: HttpConfig {
                max_response_mb: Some(
                    self.http
                        .max_response_mb
                        .unwrap_or(defaults::DEFAULT_MAX_RESPONSE_MB),
                ),
                gzip: Some(self.gzip()),
            },
        }
    }
}
