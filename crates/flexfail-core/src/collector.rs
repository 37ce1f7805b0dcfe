//! The error collector: wraps a unit of work and applies a [`Strategy`] to its failures.
//!
//! Every invocation surface (direct [`call`], [`scope`] and [`decorate`]) funnels into the same
//! dispatch routine, so strategy and autowrap semantics are identical whichever one is used.
//!
//! [`call`]: ErrorCollector::call
//! [`scope`]: ErrorCollector::scope
//! [`decorate`]: ErrorCollector::decorate
use crate::config::CollectorConfig;
use crate::error::{CollectorError, FailFast, FlexFail, Raised};
use crate::strategy::Strategy;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use uuid::Uuid;

/// Function slot of a collector constructed without a function.
///
/// Such a collector has no [`call`](ErrorCollector::call); use it through
/// [`scope`](ErrorCollector::scope) or [`decorate`](ErrorCollector::decorate).
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbound;

/// Accumulates failures of a unit of work according to a [`Strategy`].
///
/// # Example
///
/// ```rust
/// use flexfail_core::*;
///
/// fn process_check(amount: i64) -> Result<i64, Raised<i64>> {
///     if amount < 0 {
///         return Err(Raised::flex(amount));
///     }
///     Ok(amount)
/// }
///
/// let collector = ErrorCollector::with_fn(process_check, Strategy::TryAll);
/// let processed = collector.run_all([10, 20, -30, -40, 50]).unwrap();
///
/// assert_eq!(processed, vec![10, 20, 50]);
/// let rejected: Vec<i64> = collector.errors().iter().map(|e| *e.data()).collect();
/// assert_eq!(rejected, vec![-30, -40]);
/// ```
///
/// A collector is `Sync` whenever its function is, so worker threads can share one instance by
/// reference. The function runs outside the lock; only appending to the error list is serialized.
pub struct ErrorCollector<E, F = Unbound> {
    func: F,
    config: CollectorConfig,
    run_id: Uuid,
    errors: Mutex<Vec<Arc<FlexFail<E>>>>,
}

impl<E> ErrorCollector<E, Unbound> {
    /// Create a collector without a function, for scoped or decorator usage.
    pub fn new(strategy: Strategy) -> Self {
        Self::from_config(CollectorConfig::new(strategy))
    }

    /// Create a collector without a function from a full configuration.
    pub fn from_config(config: CollectorConfig) -> Self {
        ErrorCollector::build(Unbound, config)
    }
}

impl<E, F> ErrorCollector<E, F> {
    /// Create a collector wrapping `func`, with autowrap enabled.
    ///
    /// The payload type `E` is taken from `func`'s signature.
    pub fn with_fn<I, O>(func: F, strategy: Strategy) -> Self
    where
        F: Fn(I) -> Result<O, Raised<E>>,
    {
        Self::build(func, CollectorConfig::new(strategy))
    }

    /// Create a collector wrapping `func` from a full configuration.
    pub fn with_fn_and_config<I, O>(func: F, config: CollectorConfig) -> Self
    where
        F: Fn(I) -> Result<O, Raised<E>>,
    {
        Self::build(func, config)
    }

    fn build(func: F, config: CollectorConfig) -> Self {
        let run_id = Uuid::new_v4();
        tracing::debug!(%run_id, strategy = %config.strategy, autowrap = config.autowrap, "ErrorCollector: created");
        ErrorCollector {
            func,
            config,
            run_id,
            errors: Mutex::new(Vec::new()),
        }
    }

    /// Enable or disable autowrapping of foreign errors.
    pub fn with_autowrap(mut self, autowrap: bool) -> Self {
        self.config.autowrap = autowrap;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    pub fn autowrap(&self) -> bool {
        self.config.autowrap
    }

    pub fn config(&self) -> CollectorConfig {
        self.config
    }

    /// Identifier of this collector's run, as reported in tracing events.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Invoke the wrapped function on `input` and apply the strategy to its outcome.
    ///
    /// Returns `Ok(Some(output))` on success and `Ok(None)` when a failure was skipped or
    /// collected. `Err` carries the fail-fast signal, or a foreign error when autowrap is off.
    pub fn call<I, O>(&self, input: I) -> Result<Option<O>, CollectorError<E>>
    where
        F: Fn(I) -> Result<O, Raised<E>>,
    {
        self.dispatch((self.func)(input))
    }

    /// Call the wrapped function for every input in order, keeping the successful outputs.
    ///
    /// Stops at the first escalation; inputs after it are never processed.
    pub fn run_all<I, O, T>(&self, inputs: T) -> Result<Vec<O>, CollectorError<E>>
    where
        T: IntoIterator<Item = I>,
        F: Fn(I) -> Result<O, Raised<E>>,
    {
        let mut outputs = Vec::new();
        for input in inputs {
            if let Some(output) = self.call(input)? {
                outputs.push(output);
            }
        }
        Ok(outputs)
    }

    /// Apply taxonomy recognition, autowrap and the strategy to the outcome of one invocation.
    pub(crate) fn dispatch<O>(
        &self,
        outcome: Result<O, Raised<E>>,
    ) -> Result<Option<O>, CollectorError<E>> {
        let failure = match outcome {
            Ok(output) => return Ok(Some(output)),
            Err(Raised::FailFast(signal)) => {
                tracing::debug!(run_id = %self.run_id, "ErrorCollector: passing fail-fast signal through");
                return Err(CollectorError::FailFast(signal));
            }
            Err(Raised::Other(e)) if !self.config.autowrap => {
                tracing::debug!(run_id = %self.run_id, "ErrorCollector: autowrap disabled, propagating foreign error");
                return Err(CollectorError::Uncollected(e));
            }
            Err(Raised::Other(e)) => FlexFail::new(e),
            Err(Raised::FlexFail(failure)) => failure,
        };

        tracing::debug!(run_id = %self.run_id, strategy = %self.config.strategy, "ErrorCollector: caught failure, applying strategy");
        if !self.config.strategy.records() {
            tracing::trace!(run_id = %self.run_id, "ErrorCollector: failure skipped");
            return Ok(None);
        }

        let collected = self.record(failure);
        match self.config.strategy {
            Strategy::FailFast => {
                tracing::warn!(run_id = %self.run_id, collected, "ErrorCollector: failure recorded, raising fail-fast signal");
                Err(CollectorError::FailFast(FailFast))
            }
            Strategy::Skip | Strategy::TryAll => Ok(None),
        }
    }

    /// Append a failure, returning the number of collected errors after the append.
    fn record(&self, failure: FlexFail<E>) -> usize {
        let mut errors = self.lock();
        errors.push(Arc::new(failure));
        errors.len()
    }

    // Only `push` and clones of the list run under the guard, so a poisoned lock still holds a
    // consistent list.
    fn lock(&self) -> MutexGuard<'_, Vec<Arc<FlexFail<E>>>> {
        self.errors.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The collected errors, in detection order.
    ///
    /// Returns a view taken at the time of the call; the lock is released before returning, so
    /// the collector stays fully usable while the view is held.
    pub fn errors(&self) -> Vec<Arc<FlexFail<E>>> {
        self.lock().clone()
    }

    /// The number of collected errors.
    pub fn len_errors(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if any error has been collected.
    pub fn has_errors(&self) -> bool {
        self.len_errors() > 0
    }

    /// Returns `true` if no error has been collected.
    pub fn is_success(&self) -> bool {
        !self.has_errors()
    }

    /// An owned copy of the collected errors.
    pub fn snapshot(&self) -> Vec<FlexFail<E>>
    where
        E: Clone,
    {
        self.lock().iter().map(|e| (**e).clone()).collect()
    }

    /// Consume the collector, returning the collected errors.
    ///
    /// Entries still referenced by a view from [`errors`](Self::errors) stay shared.
    pub fn into_errors(self) -> Vec<Arc<FlexFail<E>>> {
        self.errors
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E, F> fmt::Debug for ErrorCollector<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("ErrorCollector");
        debug
            .field("run_id", &self.run_id)
            .field("strategy", &self.config.strategy)
            .field("autowrap", &self.config.autowrap);
        match self.errors.try_lock() {
            Ok(errors) => debug.field("errors", &errors.len()),
            Err(TryLockError::Poisoned(poisoned)) => {
                debug.field("errors", &poisoned.into_inner().len())
            }
            Err(TryLockError::WouldBlock) => debug.field("errors", &format_args!("<locked>")),
        };
        debug.finish()
    }
}
