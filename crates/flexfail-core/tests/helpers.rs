#![allow(dead_code)]

use flexfail_core::Raised;
use std::sync::{Arc, Once};
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt().with_env_filter(filter).with_test_writer().init();
    });
}

/// A foreign error, outside the collector's taxonomy.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct RuntimeError(pub String);

pub fn runtime_errors(n: usize) -> Vec<Arc<RuntimeError>> {
    (0..n)
        .map(|i| Arc::new(RuntimeError(format!("Error #{i}"))))
        .collect()
}

pub const NOT_A_NUMBER: &str = "Value is not a number!";
pub const BELOW_ZERO: &str = "Value is below zero!";

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub value: Value,
    pub err: &'static str,
}

/// Totally correct input.
pub fn data_correct() -> Vec<Value> {
    (0..10).map(Value::Int).collect()
}

/// Partially correct input: one non-number and three negatives.
pub fn data_incorrect() -> Vec<Value> {
    let mut res = data_correct();
    for idx in [4, 7, 8] {
        if let Value::Int(n) = &mut res[idx] {
            *n = -*n;
        }
    }
    res[3] = Value::Text("some-string".to_string());
    res
}

/// The rejections expected for `data_incorrect`, in order.
pub fn data_errors() -> Vec<Rejection> {
    vec![
        Rejection {
            value: Value::Text("some-string".to_string()),
            err: NOT_A_NUMBER,
        },
        Rejection {
            value: Value::Int(-4),
            err: BELOW_ZERO,
        },
        Rejection {
            value: Value::Int(-7),
            err: BELOW_ZERO,
        },
        Rejection {
            value: Value::Int(-8),
            err: BELOW_ZERO,
        },
    ]
}

/// Squares a positive number, rejecting everything else.
pub fn square(value: Value) -> Result<i64, Raised<Rejection>> {
    match value {
        Value::Int(n) if n < 0 => Err(Raised::flex(Rejection {
            value: Value::Int(n),
            err: BELOW_ZERO,
        })),
        Value::Int(n) => Ok(n * n),
        other => Err(Raised::flex(Rejection {
            value: other,
            err: NOT_A_NUMBER,
        })),
    }
}
