use std::sync::Arc;

use http::Extensions;
use reqwest::{header::HeaderValue, Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Attaches the search service's `apiKey` header when a key is configured.
pub struct ApiKeyMiddleware {
    pub key_fn: Arc<dyn Fn() -> Option<String> + Send + Sync>,
}

#[async_trait::async_trait]
impl Middleware for ApiKeyMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        if let Some(key) = (self.key_fn)() {
            if let Ok(value) = HeaderValue::from_str(&key) {
                req.headers_mut().insert("apiKey", value);
            }
        }
        next.run(req, extensions).await
    }
}
