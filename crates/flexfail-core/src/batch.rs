use crate::collector::ErrorCollector;
use crate::error::{CollectorError, Raised};
use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;
use tokio::task;

/// Errors that end a [`process_batch`] run.
#[derive(Debug, Error)]
pub enum BatchError<E> {
    /// An invocation escalated (fail-fast signal or uncollected error).
    #[error("{0}")]
    Collector(CollectorError<E>),
    /// A worker task was cancelled before it finished.
    #[error("Join error: {0}")]
    Join(String),
}

/// Run the collector's function over `inputs` on blocking worker tasks, `batch_size` at a time.
///
/// Successful outputs are returned in input order. Invocations within a batch run concurrently
/// and share the collector; an escalation from any of them ends the run once its batch has
/// joined, so with `FailFast` and `batch_size > 1` more than one error may be recorded.
/// A `batch_size` of zero is treated as one.
pub async fn process_batch<E, F, I, O>(
    collector: Arc<ErrorCollector<E, F>>,
    inputs: Vec<I>,
    batch_size: usize,
) -> Result<Vec<O>, BatchError<E>>
where
    E: Send + Sync + 'static,
    F: Fn(I) -> Result<O, Raised<E>> + Send + Sync + 'static,
    I: Send + 'static,
    O: Send + 'static,
{
    let batch_size = batch_size.max(1);
    let mut outputs = Vec::with_capacity(inputs.len());
    let mut inputs = inputs.into_iter().peekable();

    while inputs.peek().is_some() {
        let mut tasks = Vec::with_capacity(batch_size);
        for input in inputs.by_ref().take(batch_size) {
            let collector = Arc::clone(&collector);
            tasks.push(task::spawn_blocking(move || collector.call(input)));
        }

        let mut escalation = None;
        for res in join_all(tasks).await {
            match res {
                Ok(Ok(Some(o))) => outputs.push(o),
                Ok(Ok(None)) => {}
                Ok(Err(e)) => {
                    escalation.get_or_insert(e);
                }
                Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
                Err(e) => return Err(BatchError::Join(e.to_string())),
            }
        }
        if let Some(e) = escalation {
            tracing::debug!(run_id = %collector.run_id(), error = %BatchErrorKind(&e), "process_batch: stopping after escalation");
            return Err(e.into());
        }
    }

    tracing::debug!(run_id = %collector.run_id(), outputs = outputs.len(), "process_batch: completed");
    Ok(outputs)
}

impl<E> From<CollectorError<E>> for BatchError<E> {
    fn from(error: CollectorError<E>) -> Self {
        BatchError::Collector(error)
    }
}

// Display for logging without requiring `E: Debug`.
struct BatchErrorKind<'a, E>(&'a CollectorError<E>);

impl<E> std::fmt::Display for BatchErrorKind<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            CollectorError::FailFast(_) => f.write_str("fail-fast"),
            CollectorError::Uncollected(_) => f.write_str("uncollected"),
        }
    }
}
