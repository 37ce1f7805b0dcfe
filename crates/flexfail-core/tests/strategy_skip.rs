mod helpers;

use flexfail_core::*;
use helpers::{data_incorrect, square};
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_skip_strategy_using_scope() {
    helpers::init_tracing();
    let collector = ErrorCollector::new(Strategy::Skip);
    collector
        .scope(|| {
            for n in 0..10 {
                if n >= 0 {
                    return Err(Raised::Other(format!("{n} is not negative")));
                }
            }
            Ok(())
        })
        .unwrap();
    assert!(collector.errors().is_empty());
}

#[test]
fn test_skip_strategy_using_decorator() {
    let collector = ErrorCollector::new(Strategy::Skip);
    let attempted = AtomicUsize::new(0);
    let check = collector.decorate(|n: i32| -> Result<(), Raised<String>> {
        attempted.fetch_add(1, Ordering::SeqCst);
        if n >= 0 {
            return Err(Raised::Other(format!("{n} is not negative")));
        }
        Ok(())
    });

    for n in 0..10 {
        assert_eq!(check.call(n).unwrap(), None);
    }

    assert_eq!(attempted.load(Ordering::SeqCst), 10);
    assert!(collector.errors().is_empty());
}

#[test]
fn test_skip_strategy_discards_taxonomy_failures() {
    let collector = ErrorCollector::with_fn(square, Strategy::Skip);
    let outputs = collector.run_all(data_incorrect()).unwrap();
    assert_eq!(outputs, vec![0, 1, 4, 25, 36, 81]);
    assert!(collector.is_success());
    assert!(collector.into_errors().is_empty());
}
