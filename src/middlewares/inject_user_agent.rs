use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, USER_AGENT},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

static SDK_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Identifies this SDK to Moov as `moov-rust/<version>` on every request.
///
/// A `User-Agent` set on a [`MoovRequest`](crate::request::MoovRequest) is replaced.
#[derive(Debug, Default)]
pub struct InjectUserAgentMiddleware;

#[async_trait]
impl Middleware for InjectUserAgentMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        req.headers_mut()
            .insert(USER_AGENT, HeaderValue::from_static(SDK_USER_AGENT));

        next.run(req, extensions).await
    }
}
