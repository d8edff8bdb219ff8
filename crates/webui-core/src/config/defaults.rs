//! Default values for configuration fields.

/// Cookie holding the encoded session record.
pub const DEFAULT_COOKIE_NAME: &str = "webui-sess";

/// Authentication service endpoint, queried with credentials included.
pub const DEFAULT_AUTH_ENDPOINT: &str = "http://192.168.99.100:8080/authenticated";

/// Instance list endpoint served by the web UI backend.
pub const DEFAULT_INSTANCES_ENDPOINT: &str = "http://localhost/ec2/instances/";

/// Container id the table view is mounted into.
pub const DEFAULT_CONTAINER: &str = "data";

/// The auth service returns protocol-relative image paths (`//host/path`).
pub const DEFAULT_AVATAR_SCHEME: &str = "https:";

pub const DEFAULT_MAX_RESPONSE_MB: u64 = 100;

/// Interval used by `--watch` when no refresh interval is configured.
pub const DEFAULT_WATCH_INTERVAL_SECS: u64 = 5;
