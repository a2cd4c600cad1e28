/// A GraphQL document identified by its operation name.
///
/// The operation name is what the response cache keys on, so two documents
/// must never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Document {
    pub operation: &'static str,
    pub source: &'static str,
}

pub const GET_VIEWER: Document = Document {
    operation: "GetViewer",
    source: r#"
query GetViewer {
  viewer {
    login
    name
    avatarUrl
  }
}
"#,
};

pub const GET_REPOSITORY: Document = Document {
    operation: "GetRepository",
    source: r#"
query GetRepository($organizationName: String!, $repositoryName: String!) {
  repository(owner: $organizationName, name: $repositoryName) {
    id
    name
    description
    viewerHasStarred
    stargazers {
      totalCount
    }
    issues(last: 5) {
      edges {
        node {
          id
          title
          url
          publishedAt
        }
      }
    }
  }
}
"#,
};

pub const ADD_STAR: Document = Document {
    operation: "AddStar",
    source: r#"
mutation AddStar($repositoryId: ID!) {
  addStar(input: { starrableId: $repositoryId }) {
    starrable {
      stargazers {
        totalCount
      }
    }
  }
}
"#,
};
