//! # flexfail-core
//!
//! An error-accumulation primitive for batch and stream processing: an [`ErrorCollector`] wraps a
//! unit of work and, per its [`Strategy`], skips failures, collects them all, or stops at the
//! first one.
pub mod batch;
pub mod collector;
pub mod config;
pub mod decorate;
pub mod error;
pub mod scope;
pub mod strategy;

pub use batch::{process_batch, BatchError};
pub use collector::{ErrorCollector, Unbound};
pub use config::{CollectorConfig, ConfigError};
pub use decorate::{collect, Decorated};
pub use error::{CollectorError, FailFast, FlexFail, Raised};
pub use scope::Scope;
pub use strategy::Strategy;
