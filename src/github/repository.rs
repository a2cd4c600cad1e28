use serde_json::{Value, json};
use tracing::debug;

use super::client::{FetchPolicy, GraphqlClient, MutateOptions};
use super::error::ApiError;
use super::models::{RepositorySnapshot, SearchCriteria, Viewer};
use super::queries;
use crate::cache::ResponseCache;

pub async fn fetch_viewer(client: &GraphqlClient) -> Result<Viewer, ApiError> {
    let data = client
        .query(&queries::GET_VIEWER, json!({}), FetchPolicy::CacheFirst)
        .await?;
    let viewer = Viewer::from_response(&data)?;
    debug!(login = %viewer.login, "Fetched viewer");
    Ok(viewer)
}

pub async fn search_repository(
    client: &GraphqlClient,
    criteria: &SearchCriteria,
) -> Result<RepositorySnapshot, ApiError> {
    let data = client
        .query(
            &queries::GET_REPOSITORY,
            criteria.variables(),
            FetchPolicy::CacheFirst,
        )
        .await?;
    let snapshot = RepositorySnapshot::from_response(&data);
    debug!(
        repo = %criteria.full_name(),
        found = snapshot.is_present(),
        "Search complete"
    );
    Ok(snapshot)
}

/// Star a repository and patch the cached search result for `criteria`.
///
/// Returns the patched snapshot, or `None` when no cached result for exactly
/// those criteria holds `repository_id`. The search is refetched afterwards.
pub async fn star_repository(
    client: &GraphqlClient,
    repository_id: &str,
    criteria: &SearchCriteria,
    await_refetch: bool,
) -> Result<Option<RepositorySnapshot>, ApiError> {
    let variables = criteria.variables();
    let options = MutateOptions::default()
        .refetch(queries::GET_REPOSITORY, variables.clone())
        .await_refetch(await_refetch);

    let (_, patched) = client
        .mutate(
            &queries::ADD_STAR,
            json!({ "repositoryId": repository_id }),
            |cache, _| patch_starred(cache, &variables, repository_id),
            options,
        )
        .await?;

    debug!(
        repo = %criteria.full_name(),
        patched = patched.is_some(),
        "Star added"
    );
    Ok(patched)
}

fn patch_starred(
    cache: &ResponseCache,
    variables: &Value,
    repository_id: &str,
) -> Option<RepositorySnapshot> {
    let cached = cache.read_query(&queries::GET_REPOSITORY, variables)?;
    let snapshot = RepositorySnapshot::from_response(&cached);
    if snapshot.id != repository_id {
        debug!(
            cached = %snapshot.id,
            starred = %repository_id,
            "Cached search result is another repository, not patching"
        );
        return None;
    }
    let revised = snapshot.starred();
    cache.write_query(&queries::GET_REPOSITORY, variables, revised.to_response());
    Some(revised)
}
