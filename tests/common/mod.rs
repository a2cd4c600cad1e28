#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use repostar::github::queries::Document;
use repostar::github::{ApiError, GraphqlClient, Transport};

/// Scripted transport. Responses are queued per operation; the last one
/// queued keeps being returned once the others are used up.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<HashMap<&'static str, VecDeque<Result<Value, ApiError>>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, operation: &'static str, result: Result<Value, ApiError>) {
        self.responses
            .lock()
            .unwrap()
            .entry(operation)
            .or_default()
            .push_back(result);
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(op, _)| op == operation)
            .count()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, document: &Document, variables: &Value) -> Result<Value, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push((document.operation.to_string(), variables.clone()));

        let mut responses = self.responses.lock().unwrap();
        let queue = responses.get_mut(document.operation);
        match queue {
            Some(q) if q.len() > 1 => q.pop_front().unwrap(),
            Some(q) if !q.is_empty() => q.front().cloned().unwrap(),
            _ => Err(ApiError::Network(format!(
                "no response scripted for {}",
                document.operation
            ))),
        }
    }
}

pub fn client_with(transport: &Arc<FakeTransport>) -> GraphqlClient {
    GraphqlClient::new(transport.clone())
}

/// `GetRepository` data for octo/demo with one issue.
pub fn demo_repository(star_count: u32, starred: bool) -> Value {
    json!({
        "repository": {
            "id": "R1",
            "name": "demo",
            "description": "A demo repository",
            "viewerHasStarred": starred,
            "stargazers": { "totalCount": star_count },
            "issues": {
                "edges": [
                    { "node": { "id": "I1", "title": "bug", "url": "u" } }
                ]
            }
        }
    })
}

pub fn add_star_response(star_count: u32) -> Value {
    json!({
        "addStar": {
            "starrable": { "stargazers": { "totalCount": star_count } }
        }
    })
}

/// Yield until `cond` holds, for fire-and-forget tasks on the test runtime.
pub async fn wait_until(cond: impl Fn() -> bool) -> bool {
    for _ in 0..200 {
        if cond() {
            return true;
        }
        tokio::task::yield_now().await;
    }
    cond()
}
