//! Dev-environment detection.
//!
//! The site treats any hostname without a `www.` prefix anywhere in it as a
//! development host (localhost, staging slugs, preview deploys), and only
//! enables chatty mount logging there.

/// Environment variable the host sets to its serving hostname.
pub const HOSTNAME_VAR: &str = "SITE_HOSTNAME";

/// Returns `true` when `hostname` looks like a development host.
pub fn is_dev(hostname: &str) -> bool {
    !hostname.contains("www.")
}

/// The serving hostname, from [`HOSTNAME_VAR`]; `localhost` when unset.
pub fn hostname() -> String {
    std::env::var(HOSTNAME_VAR).unwrap_or_else(|_| "localhost".to_string())
}
