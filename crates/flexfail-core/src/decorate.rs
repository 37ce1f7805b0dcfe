//! Decorator usage: turn any function into one whose failures land in a collector.
use crate::collector::ErrorCollector;
use crate::error::{CollectorError, Raised};

/// Decorate `func` with `collector`.
///
/// # Example
///
/// ```rust
/// use flexfail_core::*;
///
/// let collector = ErrorCollector::new(Strategy::TryAll);
/// let half = collect(&collector, |n: u32| -> Result<u32, Raised<u32>> {
///     if n % 2 == 1 {
///         return Err(Raised::flex(n));
///     }
///     Ok(n / 2)
/// });
///
/// assert_eq!(half.call(4).unwrap(), Some(2));
/// assert_eq!(half.call(5).unwrap(), None);
/// assert_eq!(collector.errors()[0].data(), &5);
/// ```
pub fn collect<E, F, G>(collector: &ErrorCollector<E, F>, func: G) -> Decorated<'_, E, F, G> {
    collector.decorate(func)
}

/// A function whose failures are handled by a collector. Created by
/// [`ErrorCollector::decorate`] or [`collect`].
pub struct Decorated<'c, E, F, G> {
    collector: &'c ErrorCollector<E, F>,
    func: G,
}

impl<E, F, G> Decorated<'_, E, F, G> {
    /// Invoke the decorated function; same contract as [`ErrorCollector::call`].
    pub fn call<I, O>(&self, input: I) -> Result<Option<O>, CollectorError<E>>
    where
        G: Fn(I) -> Result<O, Raised<E>>,
    {
        self.collector.dispatch((self.func)(input))
    }

    /// The collector this function reports to.
    pub fn collector(&self) -> &ErrorCollector<E, F> {
        self.collector
    }
}

impl<E, F> ErrorCollector<E, F> {
    /// Wrap `func` so that each call is dispatched through this collector.
    ///
    /// The decorated function shares this collector's strategy, autowrap setting and error list;
    /// the collector's own function, if any, is left untouched.
    pub fn decorate<G>(&self, func: G) -> Decorated<'_, E, F, G> {
        Decorated {
            collector: self,
            func,
        }
    }
}
