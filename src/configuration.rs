//
// Default configuration and default values:
//


/// Application name, used for the config directory and file names:
pub const APP_NAME: &str = "expirybot";

/// Domain list file name (inside the config directory):
pub const DOMAINS_FILE_NAME: &str = "expirybot.conf";

/// Optional JSON settings file name (inside the config directory):
pub const SETTINGS_FILE_NAME: &str = "expirybot.json";


/// Default warning threshold in days
pub const DEFAULT_THRESHOLD: i64 = 14;

/// Timeout in seconds for the DNS lookup and, separately, for the TLS dial
pub const CHECK_TIMEOUT: u64 = 10;

/// Maximum number of concurrent domain checks
pub const MAX_CONCURRENT_CHECKS: usize = 10;

/// Maximum number of DNS lookup threads alive at once (timed out ones included)
pub const MAX_PENDING_LOOKUPS: usize = 4 * MAX_CONCURRENT_CHECKS;

/// Port used for TLS connections
pub const HTTPS_PORT: u16 = 443;

/// Log filter used when neither RUST_LOG nor the settings file define one
pub const DEFAULT_LOG_LEVEL: &str = "warn";


/// Hint printed when there is nothing to check
pub const NO_DOMAINS_MESSAGE: &str =
    "No domains configured to check, add a new domain with: expirybot --add domain.com[,threshold]";
