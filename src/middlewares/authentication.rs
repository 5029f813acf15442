use crate::{authenticator::Authenticator, Error};
use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the Basic credentials into outgoing HTTP requests.
///
/// Requests are rejected before reaching the network if the credentials are incomplete,
/// or if the caller already set an `Authorization` header.
pub struct AuthenticationMiddleware {
    pub(crate) authenticator: Authenticator,
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let header_value = self.authenticator.authorization_header()?;

        if req.headers().contains_key(AUTHORIZATION) {
            return Err(Error::ProtocolViolationError.into());
        }

        req.headers_mut().insert(AUTHORIZATION, header_value);

        // Run the rest of the middlewares
        next.run(req, extensions).await
    }
}
