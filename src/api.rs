use once_cell::unsync::OnceCell;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::FrontendConfig;
use crate::feed::FetchRequest;
use crate::models::conversation::ConversationPage;
use crate::models::user::MeResponse;

thread_local! {
    static SHARED_CLIENT: OnceCell<CoachClient> = const { OnceCell::new() };
}

/// Errors surfaced by the API client. Failures are never retried here; the
/// user's next organic trigger (scroll, new search, reload) is the recovery
/// path.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never completed.
    #[error("request failed: {0}")]
    Network(String),
    /// The transport enforced a deadline and hit it.
    #[error("request timed out")]
    Timeout,
    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Server { status: u16 },
}

impl FetchError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Server { status } => StatusCode::from_u16(*status).ok(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if let Some(status) = error.status() {
            Self::Server {
                status: status.as_u16(),
            }
        } else {
            Self::Network(error.to_string())
        }
    }
}

/// Lightweight API client for the coach backend.
#[derive(Clone, Debug)]
pub struct CoachClient {
    base_url: String,
    client: Client,
}

impl CoachClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetch one page of the conversation listing described by `request`.
    pub async fn list_conversations(
        &self,
        request: &FetchRequest,
    ) -> Result<ConversationPage, FetchError> {
        let key = &request.key;
        let mut builder = self
            .client
            .get(self.api_url("conversations"))
            .query(&[("user_id", key.user_id())])
            .query(&[("limit", key.page_size()), ("offset", request.offset)]);
        if let Some(search) = key.search() {
            builder = builder.query(&[("search", search)]);
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Server {
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    /// Retrieve the authenticated user profile.
    pub async fn get_profile(&self) -> Result<MeResponse, FetchError> {
        let response = self.client.get(self.api_url("auth/me")).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Server {
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    /// Terminate the current session.
    pub async fn logout(&self) -> Result<(), FetchError> {
        let response = self.client.post(self.api_url("auth/logout")).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Server {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_without_doubled_slashes() {
        let client = CoachClient::new("/api/");
        assert_eq!(client.api_url("conversations"), "/api/conversations");
        assert_eq!(client.api_url("/auth/me"), "/api/auth/me");

        let absolute = CoachClient::new("http://localhost:8080/api");
        assert_eq!(
            absolute.api_url("conversations"),
            "http://localhost:8080/api/conversations"
        );
    }

    #[test]
    fn server_errors_expose_their_status() {
        let error = FetchError::Server { status: 503 };
        assert_eq!(error.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
        assert!(error.to_string().contains("503"));

        assert_eq!(FetchError::Timeout.status(), None);
        assert_eq!(FetchError::Network("dns failure".to_string()).status(), None);
    }

    #[test]
    fn error_messages_read_for_the_console() {
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "request failed: connection refused"
        );
    }
}
