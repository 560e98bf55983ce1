//! Runtime configuration read from the environment.

use std::env;
use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `host:port` the HTTP server listens on.
    pub bind_addr: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Overlay `KOMBAT_BIND` and `KOMBAT_LOG` on the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(bind) = read_env::<std::net::SocketAddr>("KOMBAT_BIND") {
            config.bind_addr = bind.to_string();
        }
        if let Some(filter) = read_env::<String>("KOMBAT_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}
