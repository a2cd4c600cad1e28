use serde_json::json;

use repostar::github::models::{RepositorySnapshot, SearchCriteria, Viewer};

#[test]
fn test_parse_full_repository() {
    let data = json!({
        "repository": {
            "id": "R1",
            "name": "demo",
            "description": "Demo repo",
            "viewerHasStarred": false,
            "stargazers": { "totalCount": 5 },
            "issues": {
                "edges": [
                    { "node": { "id": "I1", "title": "bug", "url": "https://github.com/octo/demo/issues/1", "publishedAt": "2024-03-01T12:00:00Z" } },
                    { "node": { "id": "I2", "title": "feature", "url": "https://github.com/octo/demo/issues/2", "publishedAt": "2024-03-02T12:00:00Z" } }
                ]
            }
        }
    });

    let repo = RepositorySnapshot::from_response(&data);
    assert_eq!(repo.id, "R1");
    assert_eq!(repo.name, "demo");
    assert_eq!(repo.description, "Demo repo");
    assert!(!repo.viewer_has_starred);
    assert_eq!(repo.star_count, 5);
    assert_eq!(repo.recent_issues.len(), 2);
    assert_eq!(repo.recent_issues[0].title, "bug");
    assert_eq!(repo.recent_issues[1].id, "I2");
    assert_eq!(
        repo.recent_issues[0].published_at.unwrap().to_rfc3339(),
        "2024-03-01T12:00:00+00:00"
    );
    assert!(repo.is_present());
}

#[test]
fn test_missing_fields_default() {
    let data = json!({ "repository": { "id": "R1", "description": null } });

    let repo = RepositorySnapshot::from_response(&data);
    assert_eq!(repo.id, "R1");
    assert_eq!(repo.name, "");
    assert_eq!(repo.description, "");
    assert!(!repo.viewer_has_starred);
    assert_eq!(repo.star_count, 0);
    assert!(repo.recent_issues.is_empty());
}

#[test]
fn test_star_count_beyond_u32_saturates() {
    let data = json!({
        "repository": { "id": "R1", "stargazers": { "totalCount": 5_000_000_000u64 } }
    });
    let repo = RepositorySnapshot::from_response(&data);
    assert_eq!(repo.star_count, u32::MAX);
    assert_eq!(repo.starred().star_count, u32::MAX);
}

#[test]
fn test_null_repository_is_empty_snapshot() {
    let repo = RepositorySnapshot::from_response(&json!({ "repository": null }));
    assert_eq!(repo, RepositorySnapshot::default());
    assert!(!repo.is_present());
}

#[test]
fn test_issue_without_published_at() {
    let data = json!({
        "repository": {
            "id": "R1",
            "issues": { "edges": [ { "node": { "id": "I1", "title": "bug", "url": "u" } } ] }
        }
    });

    let repo = RepositorySnapshot::from_response(&data);
    assert_eq!(repo.recent_issues[0].url, "u");
    assert!(repo.recent_issues[0].published_at.is_none());
}

#[test]
fn test_starred_changes_flag_and_count_together() {
    let repo = RepositorySnapshot {
        id: "R1".into(),
        star_count: 5,
        ..Default::default()
    };

    let starred = repo.starred();
    assert!(starred.viewer_has_starred);
    assert_eq!(starred.star_count, 6);
    assert_eq!(starred.id, "R1");
}

#[test]
fn test_to_response_decodes_back() {
    let data = json!({
        "repository": {
            "id": "R1",
            "name": "demo",
            "description": "d",
            "viewerHasStarred": true,
            "stargazers": { "totalCount": 6 },
            "issues": { "edges": [ { "node": { "id": "I1", "title": "bug", "url": "u", "publishedAt": "2024-03-01T12:00:00Z" } } ] }
        }
    });

    let repo = RepositorySnapshot::from_response(&data);
    let encoded = repo.to_response();

    assert_eq!(encoded["repository"]["stargazers"]["totalCount"], 6);
    assert_eq!(encoded["repository"]["viewerHasStarred"], true);
    assert_eq!(RepositorySnapshot::from_response(&encoded), repo);
}

#[test]
fn test_viewer_display_name_falls_back_to_login() {
    let with_name = Viewer::from_response(&json!({
        "viewer": { "login": "octocat", "name": "The Octocat", "avatarUrl": "a" }
    }))
    .unwrap();
    assert_eq!(with_name.display_name(), "The Octocat");

    let without_name = Viewer::from_response(&json!({
        "viewer": { "login": "octocat", "name": "", "avatarUrl": "a" }
    }))
    .unwrap();
    assert_eq!(without_name.display_name(), "octocat");
}

#[test]
fn test_search_criteria_variables() {
    let criteria = SearchCriteria::new("octo", "demo");
    assert_eq!(
        criteria.variables(),
        json!({ "organizationName": "octo", "repositoryName": "demo" })
    );
    assert_eq!(criteria.full_name(), "octo/demo");
}
