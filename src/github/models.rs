use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::error::ApiError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub organization_name: String,
    pub repository_name: String,
}

impl SearchCriteria {
    pub fn new(organization_name: impl Into<String>, repository_name: impl Into<String>) -> Self {
        Self {
            organization_name: organization_name.into(),
            repository_name: repository_name.into(),
        }
    }

    /// Variables for `GetRepository`.
    pub fn variables(&self) -> Value {
        json!({
            "organizationName": self.organization_name,
            "repositoryName": self.repository_name,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.organization_name, self.repository_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
}

impl Viewer {
    pub fn from_response(data: &Value) -> Result<Self, ApiError> {
        let viewer = &data["viewer"];
        let login = viewer["login"]
            .as_str()
            .ok_or_else(|| ApiError::Decode("Response has no viewer login".to_string()))?;

        Ok(Self {
            login: login.to_string(),
            name: viewer["name"]
                .as_str()
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
            avatar_url: viewer["avatarUrl"].as_str().unwrap_or("").to_string(),
        })
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub url: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// Locally held copy of one repository as last displayed.
///
/// The default value has an empty `id`, which means no repository is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    pub id: String,
    pub name: String,
    pub description: String,
    pub viewer_has_starred: bool,
    pub star_count: u32,
    pub recent_issues: Vec<Issue>,
}

impl RepositorySnapshot {
    /// Decode the `data` member of a `GetRepository` response.
    ///
    /// Missing or null fields fall back to their defaults, and a null
    /// `repository` yields the empty snapshot.
    pub fn from_response(data: &Value) -> Self {
        let repo = &data["repository"];

        let recent_issues: Vec<Issue> = repo["issues"]["edges"]
            .as_array()
            .map(|edges| edges.iter().map(|edge| parse_issue(&edge["node"])).collect())
            .unwrap_or_default();

        Self {
            id: repo["id"].as_str().unwrap_or("").to_string(),
            name: repo["name"].as_str().unwrap_or("").to_string(),
            description: repo["description"].as_str().unwrap_or("").to_string(),
            viewer_has_starred: repo["viewerHasStarred"].as_bool().unwrap_or(false),
            star_count: repo["stargazers"]["totalCount"]
                .as_u64()
                .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
                .unwrap_or(0),
            recent_issues,
        }
    }

    /// Encode back into the `GetRepository` response shape for the cache.
    pub fn to_response(&self) -> Value {
        let edges: Vec<Value> = self
            .recent_issues
            .iter()
            .map(|issue| {
                json!({
                    "node": {
                        "id": issue.id,
                        "title": issue.title,
                        "url": issue.url,
                        "publishedAt": issue.published_at.map(|t| t.to_rfc3339()),
                    }
                })
            })
            .collect();

        json!({
            "repository": {
                "id": self.id,
                "name": self.name,
                "description": self.description,
                "viewerHasStarred": self.viewer_has_starred,
                "stargazers": { "totalCount": self.star_count },
                "issues": { "edges": edges },
            }
        })
    }

    pub fn is_present(&self) -> bool {
        !self.id.is_empty()
    }

    /// The snapshot as it looks once the viewer's star has landed.
    pub fn starred(&self) -> Self {
        Self {
            viewer_has_starred: true,
            star_count: self.star_count.saturating_add(1),
            ..self.clone()
        }
    }
}

fn parse_issue(node: &Value) -> Issue {
    Issue {
        id: node["id"].as_str().unwrap_or("").to_string(),
        title: node["title"].as_str().unwrap_or("").to_string(),
        url: node["url"].as_str().unwrap_or("").to_string(),
        published_at: node["publishedAt"]
            .as_str()
            .and_then(|s| s.parse().ok()),
    }
}
