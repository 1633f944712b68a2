//! HTTP plumbing shared by the typed clients.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, header};
use tokio::sync::OnceCell;

use crate::error::ClientError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Supplies the bearer token attached to every request.
///
/// Implementations may go to an identity provider; the trait keeps the
/// clients oblivious to where tokens come from.
pub trait TokenProvider {
    /// Produce a token for the next request.
    fn token(&self) -> impl Future<Output = Result<String, ClientError>> + Send;
}

/// Provider wrapping one fixed token.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<String, ClientError> {
        Ok(self.token.clone())
    }
}

/// Low-level API client: base URL, token provider, and one lazily built
/// [`reqwest::Client`] reused for the client's whole lifetime.
pub struct ApiClient<T> {
    base_url: String,
    provider: T,
    client: OnceCell<Client>,
}

impl<T> ApiClient<T>
where
    T: TokenProvider + Send + Sync,
{
    /// Build a client for the API at `base_url`.
    ///
    /// The underlying connection pool is not created here; the first
    /// request initializes it once, and every later request reuses it.
    #[must_use]
    pub fn new(base_url: impl Into<String>, provider: T) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            provider,
            client: OnceCell::new(),
        }
    }

    /// The normalized base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start an authenticated request for `path`, relative to the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the underlying client cannot
    /// be built and [`ClientError::Token`] when the provider fails.
    pub async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let client = self.client().await?;
        let token = self.provider.token().await?;
        Ok(client
            .request(method, self.url(path))
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json"))
    }

    async fn client(&self) -> Result<&Client, ClientError> {
        self.client
            .get_or_try_init(|| async {
                Client::builder()
                    .timeout(REQUEST_TIMEOUT)
                    .build()
                    .map_err(ClientError::Transport)
            })
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Turn a non-success response into [`ClientError::Api`].
pub(crate) fn expect_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Api {
            status,
            message: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_the_same_token_every_time() {
        let provider = StaticTokenProvider::new("secret");

        assert_eq!(provider.token().await.unwrap(), "secret");
        assert_eq!(provider.token().await.unwrap(), "secret");
    }

    #[test]
    fn should_trim_trailing_slashes_from_base_url() {
        let api = ApiClient::new("http://localhost:8080/", StaticTokenProvider::new("t"));

        assert_eq!(api.base_url(), "http://localhost:8080");
        assert_eq!(api.url("customers"), "http://localhost:8080/customers");
        assert_eq!(api.url("/customer/4"), "http://localhost:8080/customer/4");
    }
}
