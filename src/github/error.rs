use thiserror::Error;

/// Failure of a single GraphQL request.
///
/// Every variant displays as the bare message so it can be shown to the user
/// verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a usable GraphQL response (connect failure,
    /// timeout, non-2xx status, undecodable body).
    #[error("{0}")]
    Network(String),

    /// The server answered but reported an error in `errors[]`.
    #[error("{0}")]
    GraphQl(String),

    /// The response arrived without error but lacks a field the caller needs.
    #[error("{0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
