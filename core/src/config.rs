//! # Generator Configuration
//!
//! The four values the URL generator interpolates. They are process-wide
//! constants, set once at startup; nothing is read from the command line
//! or the environment.

/// Default first value substituted into the address prefix (inclusive).
pub const DEFAULT_START_IP: i64 = 120;
/// Default last value substituted into the address prefix (inclusive).
pub const DEFAULT_END_IP: i64 = 138;
/// Default IPv4 address prefix the range is appended to.
pub const DEFAULT_BASE_IP_PREFIX: &str = "172.18.50.";
/// Default port every generated URL points at.
pub const DEFAULT_PORT: i64 = 8080;

/// Inputs of one generation run.
///
/// The fields are deliberately plain integers and a plain string: the
/// generator interpolates them verbatim and never validates that the
/// prefix forms a syntactically valid IPv4 prefix or that the port lies
/// in 0-65535. An inverted range (`end_ip < start_ip`) is a valid
/// configuration and yields an empty pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// First value substituted into the prefix.
    pub start_ip: i64,
    /// Last value substituted into the prefix, inclusive.
    pub end_ip: i64,
    /// Leading portion of every generated address, e.g. `"172.18.50."`.
    pub base_ip_prefix: String,
    /// Port appended to every generated address.
    pub port: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_ip: DEFAULT_START_IP,
            end_ip: DEFAULT_END_IP,
            base_ip_prefix: DEFAULT_BASE_IP_PREFIX.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
