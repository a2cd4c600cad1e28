use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use super::error::ApiError;
use super::queries::Document;
use super::transport::Transport;
use crate::cache::ResponseCache;

/// Where a query may be answered from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Answer from the cache when the exact key is present, otherwise fetch
    /// and store.
    #[default]
    CacheFirst,
    /// Always fetch, then store.
    NetworkOnly,
}

#[derive(Debug, Clone)]
pub struct RefetchQuery {
    pub document: Document,
    pub variables: Value,
}

#[derive(Debug, Clone, Default)]
pub struct MutateOptions {
    /// Queries re-issued with `NetworkOnly` after the cache update.
    pub refetch: Vec<RefetchQuery>,
    /// Wait for the refetches instead of spawning them.
    pub await_refetch: bool,
}

impl MutateOptions {
    pub fn refetch(mut self, document: Document, variables: Value) -> Self {
        self.refetch.push(RefetchQuery {
            document,
            variables,
        });
        self
    }

    pub fn await_refetch(mut self, await_refetch: bool) -> Self {
        self.await_refetch = await_refetch;
        self
    }
}

/// GraphQL client with a shared response cache.
///
/// Clones share the transport, the cache and the request limit. Every
/// request holds a permit while it is on the wire, background refetches
/// included.
#[derive(Clone)]
pub struct GraphqlClient {
    transport: Arc<dyn Transport>,
    cache: ResponseCache,
    limiter: Arc<Semaphore>,
}

impl GraphqlClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_cache(transport, ResponseCache::new())
    }

    pub fn with_cache(transport: Arc<dyn Transport>, cache: ResponseCache) -> Self {
        Self {
            transport,
            cache,
            limiter: Arc::new(Semaphore::new(Semaphore::MAX_PERMITS)),
        }
    }

    /// Allow at most `permits` requests on the wire at once.
    pub fn with_request_limit(mut self, permits: usize) -> Self {
        self.limiter = Arc::new(Semaphore::new(permits.clamp(1, Semaphore::MAX_PERMITS)));
        self
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub async fn query(
        &self,
        document: &Document,
        variables: Value,
        policy: FetchPolicy,
    ) -> Result<Value, ApiError> {
        if policy == FetchPolicy::CacheFirst
            && let Some(data) = self.cache.read_query(document, &variables)
        {
            debug!(operation = document.operation, "Query answered from cache");
            return Ok(data);
        }

        let data = self.execute(document, &variables).await?;
        self.cache.write_query(document, &variables, data.clone());
        Ok(data)
    }

    /// Send a mutation.
    ///
    /// On success `update` runs synchronously against the cache with the
    /// mutation's data, and its return value is handed back alongside that
    /// data. The refetch queries run afterwards. On failure neither happens.
    pub async fn mutate<F, R>(
        &self,
        document: &Document,
        variables: Value,
        update: F,
        options: MutateOptions,
    ) -> Result<(Value, R), ApiError>
    where
        F: FnOnce(&ResponseCache, &Value) -> R,
    {
        let data = self.execute(document, &variables).await?;
        debug!(operation = document.operation, "Mutation succeeded");

        let updated = update(&self.cache, &data);

        for query in options.refetch {
            if options.await_refetch {
                self.refetch(query).await;
            } else {
                let client = self.clone();
                tokio::spawn(async move { client.refetch(query).await });
            }
        }

        Ok((data, updated))
    }

    async fn execute(&self, document: &Document, variables: &Value) -> Result<Value, ApiError> {
        let _permit = self
            .limiter
            .acquire()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.transport.execute(document, variables).await
    }

    async fn refetch(&self, query: RefetchQuery) {
        if let Err(e) = self
            .query(&query.document, query.variables, FetchPolicy::NetworkOnly)
            .await
        {
            warn!(operation = query.document.operation, error = %e, "Refetch failed");
        }
    }
}
