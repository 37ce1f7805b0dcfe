//! # Flexfail - error accumulation for batch and stream processing
//!
//! Wrap a unit of work in an [`ErrorCollector`] and choose what happens when it fails:
//!
//! - [`Strategy::Skip`]: discard the failure and keep going
//! - [`Strategy::TryAll`]: record the failure and keep going
//! - [`Strategy::FailFast`]: record the failure and stop the caller
//!
//! ## Usage
//!
//! ```rust
//! use flexfail::*;
//!
//! let collector = ErrorCollector::with_fn(
//!     |amount: i64| -> Result<i64, Raised<i64>> {
//!         if amount < 0 {
//!             return Err(Raised::flex(amount));
//!         }
//!         Ok(amount)
//!     },
//!     Strategy::FailFast,
//! );
//!
//! let err = collector.run_all([10, 20, -30, -40, 50]).unwrap_err();
//! assert!(err.is_fail_fast());
//! assert_eq!(collector.errors()[0].data(), &-30);
//! ```

/// Initialize logging with default settings.
///
/// Installs a `tracing` subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// Re-export the core crate
pub use flexfail_core as core;
pub use flexfail_core::{
    collect, process_batch, BatchError, CollectorConfig, CollectorError, ConfigError, Decorated,
    ErrorCollector, FailFast, FlexFail, Raised, Scope, Strategy, Unbound,
};
