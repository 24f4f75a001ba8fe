/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoint groups or changing client behavior
*/

pub mod client;
pub mod error;
pub mod transaction;

pub use error::{BlockcypherError, Result};

pub use client::{API_ROOT_URL, BlockcypherClient, ClientConfig};
