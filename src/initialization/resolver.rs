//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_ATTEMPTS;
use crate::error_handling::InitializationError;

/// Builds resolver options with the given per-query timeout.
fn resolver_opts(timeout_secs: u64) -> Result<ResolverOpts, InitializationError> {
    if timeout_secs == 0 {
        return Err(InitializationError::DnsResolverError(
            "timeout must be at least one second".to_string(),
        ));
    }

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(timeout_secs);
    opts.attempts = DNS_ATTEMPTS;
    // Domains are always queried as given, never with search suffixes
    opts.ndots = 0;
    Ok(opts)
}

/// Initializes the DNS resolver for TXT lookups.
///
/// Uses the system nameservers (`/etc/resolv.conf` on Unix). When the system
/// configuration cannot be read, falls back to hickory's default upstreams
/// (Google public DNS) and logs a warning.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if `timeout_secs` is zero.
pub fn init_resolver(timeout_secs: u64) -> Result<TokioAsyncResolver, InitializationError> {
    let opts = resolver_opts(timeout_secs)?;

    let config = match read_system_conf() {
        Ok((config, _system_opts)) => config,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration ({e}), using default nameservers");
            ResolverConfig::default()
        }
    };

    Ok(TokioAsyncResolver::tokio(config, opts))
}
