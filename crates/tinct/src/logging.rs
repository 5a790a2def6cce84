#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Re-exports the tracing macros this crate uses when the `tracing` feature
//! is enabled; provides no-op replacements when it is disabled. Either way
//! the macros are reachable as `crate::trace!` / `crate::debug!`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

// When tracing is not enabled, provide no-op macros
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }
}

/// Install a JSON-formatted global subscriber honoring `RUST_LOG`.
///
/// Intended for host programs that want production logging without wiring
/// tracing-subscriber themselves. Does nothing if a global subscriber is
/// already set.
#[cfg(feature = "tracing-json")]
pub fn init_json() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
