//! Processes a list of checkouts under each strategy. Negative amounts can't be processed.
//!
//! Run with `RUST_LOG=flexfail_core=debug cargo run --example checkouts` to see the collector's
//! decisions.
use flexfail::*;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct CheckoutRejected {
    description: &'static str,
    amount: f64,
}

fn process_check(amount: f64) -> Result<(), Raised<CheckoutRejected>> {
    if amount < 0.0 {
        return Err(Raised::flex(CheckoutRejected {
            description: "Checkout amount was below zero!",
            amount,
        }));
    }
    println!("Check with amount {amount}$ was successfully processed!");
    Ok(())
}

const CHECKOUTS: [f64; 5] = [10.0, 20.0, -30.0, -40.0, 50.0];

fn process_all(strategy: Strategy) {
    let collector = ErrorCollector::with_fn(process_check, strategy);
    for amount in CHECKOUTS {
        if let Err(e) = collector.call(amount) {
            println!("Stopped: {e}");
            break;
        }
    }
    println!("Collected errors:");
    for error in collector.errors().iter() {
        println!("{:?}", error.data());
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    flexfail::init();

    println!("#################### Strategy: `skip` (just skipping unprocessable data)");
    process_all(Strategy::Skip);

    println!("#################### Strategy: `fail_fast` (abort if at least one error occurs)");
    process_all(Strategy::FailFast);

    println!("#################### Strategy: `try_all` (try to process all the data and, therefore, collect all the errors)");
    process_all(Strategy::TryAll);

    println!("#################### Parallel `try_all` over worker tasks");
    let config = CollectorConfig::from_json(r#"{ "strategy": "try_all" }"#)?;
    let collector = Arc::new(ErrorCollector::with_fn_and_config(process_check, config));
    let processed = process_batch(Arc::clone(&collector), CHECKOUTS.to_vec(), 2).await?;
    println!("Processed {} checkouts, rejected:", processed.len());
    for error in collector.errors().iter() {
        let rejected = error.data();
        println!("{} ({})", rejected.description, rejected.amount);
    }
    Ok(())
}
