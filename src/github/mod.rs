pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod queries;
pub mod repository;
pub mod transport;

pub use client::{FetchPolicy, GraphqlClient, MutateOptions};
pub use error::ApiError;
pub use models::*;
pub use transport::{HttpTransport, Transport};
