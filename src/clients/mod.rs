pub mod api_client;
mod api_error;
mod api_structures;
pub mod sparql_client;

pub use api_client::{ApiClient, ApiError};
pub use sparql_client::{SparqlClient, SparqlError};

/// http client shared by the api and sparql clients
/// wikimedia services reject the requests without a user agent
fn http_client() -> Result<reqwest::blocking::Client, reqwest::Error> {
    reqwest::blocking::Client::builder()
        .user_agent(format!("airport-dump/{}", crate::GIT_VERSION))
        .build()
}
