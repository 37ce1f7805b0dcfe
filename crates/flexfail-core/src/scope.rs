//! Scoped-block usage: route the failure of an inline block through a collector.
use crate::collector::ErrorCollector;
use crate::error::{CollectorError, Raised};

/// A protected region opened with [`ErrorCollector::enter`].
///
/// The region's outcome is handed to [`exit`](Scope::exit), which applies the collector's
/// strategy exactly as a direct call would.
#[must_use = "a scope does nothing until `exit` is called with the block's outcome"]
pub struct Scope<'c, E, F> {
    collector: &'c ErrorCollector<E, F>,
}

impl<E, F> Scope<'_, E, F> {
    /// Close the region, routing its outcome through the collector.
    pub fn exit(self, outcome: Result<(), Raised<E>>) -> Result<(), CollectorError<E>> {
        self.collector.dispatch(outcome).map(|_| ())
    }
}

impl<E, F> ErrorCollector<E, F> {
    /// Open a protected region.
    pub fn enter(&self) -> Scope<'_, E, F> {
        Scope { collector: self }
    }

    /// Run `block` as a protected region.
    ///
    /// ```rust
    /// use flexfail_core::*;
    ///
    /// let collector = ErrorCollector::new(Strategy::TryAll);
    /// for n in [1, -2, 3, -4] {
    ///     collector
    ///         .scope(|| {
    ///             if n < 0 {
    ///                 return Err(Raised::flex(n));
    ///             }
    ///             Ok(())
    ///         })
    ///         .unwrap();
    /// }
    /// assert_eq!(collector.len_errors(), 2);
    /// ```
    pub fn scope<B>(&self, block: B) -> Result<(), CollectorError<E>>
    where
        B: FnOnce() -> Result<(), Raised<E>>,
    {
        let scope = self.enter();
        scope.exit(block())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_enter_exit_matches_scope() {
        let collector = ErrorCollector::new(Strategy::TryAll);
        collector.enter().exit(Err(Raised::flex("first"))).unwrap();
        collector.scope(|| Err(Raised::flex("second"))).unwrap();
        collector.enter().exit(Ok(())).unwrap();

        let collected: Vec<&str> = collector.errors().iter().map(|e| *e.data()).collect();
        assert_eq!(collected, vec!["first", "second"]);
    }

    #[test]
    fn test_block_stops_at_first_failure() {
        // the whole loop is one region: the first failure leaves it
        let collector = ErrorCollector::new(Strategy::TryAll);
        let mut visited = Vec::new();
        collector
            .scope(|| {
                for n in 0..10 {
                    visited.push(n);
                    if n == 3 {
                        return Err(Raised::flex(n));
                    }
                }
                Ok(())
            })
            .unwrap();
        assert_eq!(visited, vec![0, 1, 2, 3]);
        assert_eq!(collector.len_errors(), 1);
    }

    #[test]
    fn test_fail_fast_scope_raises_signal() {
        let collector = ErrorCollector::new(Strategy::FailFast);
        let err = collector.scope(|| Err(Raised::Other("boom"))).unwrap_err();
        assert!(matches!(err, CollectorError::FailFast(FailFast)));
        assert_eq!(collector.errors()[0].data(), &"boom");
    }
}
