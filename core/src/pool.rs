//! # Backend URL Pool
//!
//! The URL list generator.
//!
//! Maps an inclusive integer range through the `http://<prefix><i>:<port>`
//! rule and keeps the result as an ordered pool. The pool also owns the
//! textual rendering printed under the `backend_urls = ` label, which is
//! what relay operators paste into the relay configuration.

use std::fmt;

use tracing::info;

use crate::config::Config;

/// An ordered, immutable pool of backend URLs.
///
/// Element `k` (0-indexed) is fully determined by the generating
/// [`Config`]: `http://<base_ip_prefix><start_ip + k>:<port>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendPool {
    urls: Vec<String>,
}

impl BackendPool {
    /// Expands `[start_ip, end_ip]` into URLs, in ascending order.
    ///
    /// The interpolation is verbatim: whatever the prefix and port are,
    /// they end up in the URL unchanged. An inverted range produces an
    /// empty pool, not an error.
    pub fn generate(config: &Config) -> Self {
        info!(
            "Generating backend URLs for {}{}-{} on port {}",
            config.base_ip_prefix, config.start_ip, config.end_ip, config.port
        );

        let urls: Vec<String> = (config.start_ip..=config.end_ip)
            .map(|i| format!("http://{}{}:{}", config.base_ip_prefix, i, config.port))
            .collect();

        let len: usize = urls.len();
        let unit: &str = if len == 1 { "backend URL has" } else { "backend URLs have" };
        info!("{len} {unit} been generated");

        Self { urls }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// The generated URLs, in generation order.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    /// Consumes the pool, handing its URLs to whoever cycles them.
    pub fn into_urls(self) -> Vec<String> {
        self.urls
    }
}

/// Renders the pool as a bracketed, comma-separated list of single-quoted
/// URLs: `['http://172.18.50.120:8080', 'http://172.18.50.121:8080']`.
/// The empty pool renders as `[]`.
impl fmt::Display for BackendPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, url) in self.urls.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{url}'")?;
        }
        f.write_str("]")
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
