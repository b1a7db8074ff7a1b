//! Live re-resolution of a request as its inputs change.
//!
//! The host application publishes the request being edited and the selected
//! environment on `watch` channels. Every change on either channel produces
//! a fresh [`EffectiveRequest`] built from the latest value of both.

use std::sync::Arc;

use materia_domain::{EffectiveRequest, Environment, Request};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::assembler::EffectiveRequestAssembler;
use crate::error::ApplicationResult;
use crate::ports::GlobalVariables;

/// Number of resolved requests buffered for a slow consumer.
const BUFFER: usize = 16;

/// Stream of effective requests; stops the background task when dropped.
#[derive(Debug)]
pub struct EffectiveRequestStream {
    receiver: mpsc::Receiver<EffectiveRequest>,
    task: JoinHandle<()>,
}

impl EffectiveRequestStream {
    /// Waits for the next effective request.
    ///
    /// Returns `None` once both input channels are closed and every buffered
    /// value has been received.
    pub async fn next(&mut self) -> Option<EffectiveRequest> {
        self.receiver.recv().await
    }
}

impl Drop for EffectiveRequestStream {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Re-runs `assembler` whenever `requests` or `environments` changes.
///
/// The first value is emitted immediately for the current pair. Input
/// changes that arrive while the consumer is behind are coalesced: only the
/// latest request and environment are resolved.
///
/// # Errors
///
/// Returns [`crate::ApplicationError::NoRuntime`] when called outside a
/// tokio runtime.
pub fn resolve_stream<G>(
    assembler: Arc<EffectiveRequestAssembler<G>>,
    mut requests: watch::Receiver<Request>,
    mut environments: watch::Receiver<Environment>,
) -> ApplicationResult<EffectiveRequestStream>
where
    G: GlobalVariables + 'static,
{
    let handle = Handle::try_current()?;
    let (sender, receiver) = mpsc::channel(BUFFER);

    let task = handle.spawn(async move {
        let mut requests_open = true;
        let mut environments_open = true;

        loop {
            let effective = {
                let request = requests.borrow_and_update();
                let environment = environments.borrow_and_update();
                assembler.resolve(&request, &environment)
            };

            if sender.send(effective).await.is_err() {
                return;
            }

            loop {
                if !requests_open && !environments_open {
                    tracing::debug!("request and environment sources closed, ending stream");
                    return;
                }

                tokio::select! {
                    changed = requests.changed(), if requests_open => {
                        if changed.is_ok() {
                            break;
                        }
                        requests_open = false;
                    }
                    changed = environments.changed(), if environments_open => {
                        if changed.is_ok() {
                            break;
                        }
                        environments_open = false;
                    }
                    () = sender.closed() => return,
                }
            }
        }
    });

    Ok(EffectiveRequestStream { receiver, task })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NoGlobals;
    use std::time::Duration;

    fn assembler() -> Arc<EffectiveRequestAssembler<NoGlobals>> {
        Arc::new(EffectiveRequestAssembler::new(NoGlobals))
    }

    async fn next(stream: &mut EffectiveRequestStream) -> Option<EffectiveRequest> {
        tokio::time::timeout(Duration::from_secs(5), stream.next())
            .await
            .ok()
            .flatten()
    }

    #[tokio::test]
    async fn test_emits_initial_value() {
        let (_req_tx, req_rx) = watch::channel(Request::new("/{{id}}"));
        let (_env_tx, env_rx) = watch::channel(Environment::new("dev").with_variable("id", "1"));

        let mut stream = resolve_stream(assembler(), req_rx, env_rx)
            .unwrap_or_else(|e| unreachable!("inside runtime: {e}"));

        let first = next(&mut stream).await.map(|e| e.final_url);
        assert_eq!(first.as_deref(), Some("/1"));
    }

    #[tokio::test]
    async fn test_reemits_on_either_input() {
        let (req_tx, req_rx) = watch::channel(Request::new("/{{id}}"));
        let (env_tx, env_rx) = watch::channel(Environment::new("dev").with_variable("id", "1"));

        let mut stream = resolve_stream(assembler(), req_rx, env_rx)
            .unwrap_or_else(|e| unreachable!("inside runtime: {e}"));
        assert!(next(&mut stream).await.is_some());

        env_tx.send_replace(Environment::new("prod").with_variable("id", "2"));
        let second = next(&mut stream).await.map(|e| e.final_url);
        assert_eq!(second.as_deref(), Some("/2"));

        req_tx.send_replace(Request::new("/items/{{id}}"));
        let third = next(&mut stream).await.map(|e| e.final_url);
        assert_eq!(third.as_deref(), Some("/items/2"));
    }

    #[tokio::test]
    async fn test_ends_when_sources_close() {
        let (req_tx, req_rx) = watch::channel(Request::new("/"));
        let (env_tx, env_rx) = watch::channel(Environment::default());

        let mut stream = resolve_stream(assembler(), req_rx, env_rx)
            .unwrap_or_else(|e| unreachable!("inside runtime: {e}"));
        assert!(next(&mut stream).await.is_some());

        drop(req_tx);
        drop(env_tx);
        assert!(next(&mut stream).await.is_none());
    }

    #[test]
    fn test_requires_runtime() {
        let (_req_tx, req_rx) = watch::channel(Request::new("/"));
        let (_env_tx, env_rx) = watch::channel(Environment::default());

        assert!(resolve_stream(assembler(), req_rx, env_rx).is_err());
    }
}
