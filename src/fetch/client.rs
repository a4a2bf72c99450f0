use async_trait::async_trait;
use reqwest::{Request, Response};

/// Executes HTTP requests for the source loader. Implemented by
/// [`super::BasicClient`]; tests and embedders can supply their own.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
