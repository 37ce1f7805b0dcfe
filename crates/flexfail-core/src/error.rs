//! Error taxonomy recognised by the collector.
//!
//! A unit of work under collection fails with [`Raised`], which tells the collector what kind of
//! failure it is looking at:
//!
//! - [`FlexFail`]: an expected, domain-level failure carrying an arbitrary payload. These are the
//!   errors a collector accumulates.
//! - [`FailFast`]: the control-flow signal emitted once the fail-fast strategy has recorded its
//!   error. It is never collected, only passed through.
//! - anything else ([`Raised::Other`]): a foreign error, wrapped into a [`FlexFail`] when autowrap
//!   is enabled and propagated untouched otherwise.
use thiserror::Error;

/// A collectable failure carrying an opaque payload.
///
/// The payload is stored exactly as given; it is moved in and never copied or stringified, so a
/// foreign error wrapped by the collector is the very value that was raised.
///
/// ```rust
/// use flexfail_core::FlexFail;
/// let failure = FlexFail::new(vec![1, 2, 3]);
/// assert_eq!(failure.data(), &vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("collectable failure: {data:?}")]
pub struct FlexFail<E> {
    data: E,
}

impl<E> FlexFail<E> {
    /// Wrap a payload into a collectable failure.
    pub fn new(data: E) -> Self {
        FlexFail { data }
    }

    /// The payload this failure was constructed with.
    pub fn data(&self) -> &E {
        &self.data
    }

    /// Consume the failure, returning its payload.
    pub fn into_data(self) -> E {
        self.data
    }
}

/// Signal raised by a fail-fast collector after it recorded its single error.
///
/// Carries nothing: the cause lives in the collector's error list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("fail-fast strategy triggered")]
pub struct FailFast;

/// Everything a function under collection may fail with.
#[derive(Debug)]
pub enum Raised<E> {
    /// A collectable failure.
    FlexFail(FlexFail<E>),
    /// A fail-fast signal coming from a nested collector.
    FailFast(FailFast),
    /// An error outside the taxonomy.
    Other(E),
}

impl<E> Raised<E> {
    /// Shorthand for raising a collectable failure with the given payload.
    pub fn flex(data: E) -> Self {
        Raised::FlexFail(FlexFail::new(data))
    }

    /// Whether this is one of the two taxonomy kinds ([`FlexFail`] or [`FailFast`]).
    pub fn is_taxonomy(&self) -> bool {
        !matches!(self, Raised::Other(_))
    }
}

impl<E> From<FlexFail<E>> for Raised<E> {
    fn from(failure: FlexFail<E>) -> Self {
        Raised::FlexFail(failure)
    }
}

impl<E> From<FailFast> for Raised<E> {
    fn from(signal: FailFast) -> Self {
        Raised::FailFast(signal)
    }
}

// Lets a nested collector's escalation flow into an outer one with `?`, keeping its kind.
impl<E> From<CollectorError<E>> for Raised<E> {
    fn from(error: CollectorError<E>) -> Self {
        match error {
            CollectorError::FailFast(signal) => Raised::FailFast(signal),
            CollectorError::Uncollected(e) => Raised::Other(e),
        }
    }
}

/// Errors that escape a collector invocation.
#[derive(Debug, Error)]
pub enum CollectorError<E> {
    /// The fail-fast strategy fired (or a nested collector's signal passed through).
    #[error(transparent)]
    FailFast(#[from] FailFast),
    /// A foreign error propagated as-is because autowrap is disabled.
    #[error("uncollected error: {0:?}")]
    Uncollected(E),
}

impl<E> CollectorError<E> {
    /// Returns true if this is the fail-fast signal.
    pub fn is_fail_fast(&self) -> bool {
        matches!(self, CollectorError::FailFast(_))
    }

    /// The foreign error, if this escalation is an autowrap-off passthrough.
    pub fn into_uncollected(self) -> Option<E> {
        match self {
            CollectorError::Uncollected(e) => Some(e),
            CollectorError::FailFast(_) => None,
        }
    }
}
