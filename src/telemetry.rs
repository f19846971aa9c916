//! Opt-in tracing setup for story hosts.
//!
//! Library code only emits `tracing` events. Hosts either call one of the
//! helpers below or install their own subscriber.

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default_filter("info")
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive.
///
/// `RUST_LOG` still wins when it is set and parses.
#[must_use]
pub fn init_tracing_with_default_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
