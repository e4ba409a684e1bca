use reqwest::blocking::Client;
use reqwest::redirect;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Redirects followed before a request fails.
const MAX_REDIRECTS: usize = 30;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Source of page bodies for the archiver.
pub trait PageFetcher {
    fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP fetcher.
///
/// A non-2xx status is not an error: the body is returned as-is and left to
/// the article lookup, which usually finds nothing on an error page.
pub struct HttpFetcher {
    client: Client,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    pub fn with_user_agent(user_agent: &str) -> Result<Self, FetchError> {
        let custom_redirect_policy = redirect::Policy::custom(|attempt| {
            if attempt.previous().len() >= MAX_REDIRECTS {
                attempt.error("Too many redirects")
            } else {
                attempt.follow()
            }
        });

        let client = reqwest::blocking::Client::builder()
            .redirect(custom_redirect_policy)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let request_error = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let resp = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .map_err(request_error)?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, %status, "non-success response, parsing body anyway");
        }

        resp.text().map_err(request_error)
    }
}
