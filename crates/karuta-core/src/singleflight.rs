use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use karuta_types::RemoteEntry;
use tokio::sync::Mutex;

type SharedFetch = Shared<BoxFuture<'static, Option<RemoteEntry>>>;

/// Collapses concurrent lookups of one term into a single running future
#[derive(Clone, Default)]
pub struct InFlight {
    pending: Arc<Mutex<HashMap<String, SharedFetch>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `work` for `term`, unless an identical lookup is already pending;
    /// late callers await the pending one. The slot clears on settlement.
    pub async fn run<F>(&self, term: &str, work: F) -> Option<RemoteEntry>
    where
        F: Future<Output = Option<RemoteEntry>> + Send + 'static,
    {
        let fetch = {
            let mut pending = self.pending.lock().await;

            match pending.get(term) {
                Some(existing) => existing.clone(),
                None => {
                    let key = term.to_string();
                    let slot = Arc::clone(&self.pending);
                    let fetch: SharedFetch = async move {
                        let value = work.await;
                        // clear before anyone observes the outcome
                        slot.lock().await.remove(&key);
                        value
                    }
                    .boxed()
                    .shared();

                    pending.insert(term.to_string(), fetch.clone());
                    fetch
                }
            }
        };

        fetch.await
    }
}
