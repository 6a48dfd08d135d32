//! HTTP client that posts the form entries as JSON
//!
//! One `POST` per submission with the entries serialized as a JSON array.
//! No retries and no client-side timeout: the call waits until the transport
//! settles.

use super::traits::EntrySubmitter;
use super::SubmitError;
use crate::state::Entry;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use url::Url;

/// Public mock endpoint the form posts to unless configured otherwise
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Submitter backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpSubmitter {
    /// Create a submitter posting to `endpoint`
    pub fn new(endpoint: Url) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|source| SubmitError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EntrySubmitter for HttpSubmitter {
    async fn submit(&self, entries: &[Entry]) -> Result<(), SubmitError> {
        tracing::info!(endpoint = %self.endpoint, entries = entries.len(), "posting entries");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(entries)
            .send()
            .await
            .map_err(|source| SubmitError::Transport {
                endpoint: self.endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "endpoint accepted entries");
            Ok(())
        } else {
            Err(SubmitError::Rejected {
                endpoint: self.endpoint.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn submitter_for(server: &MockServer) -> HttpSubmitter {
        let endpoint = format!("{}/users", server.uri()).parse().unwrap();
        HttpSubmitter::new(endpoint).unwrap()
    }

    fn alice() -> Vec<Entry> {
        vec![Entry::new("Alice", "a@x.com")]
    }

    #[test]
    fn test_default_endpoint_parses() {
        let url: Url = DEFAULT_ENDPOINT.parse().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.path(), "/users");
    }

    #[tokio::test]
    async fn submit_posts_json_array_with_content_type() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!([
                {"name": "Alice", "email": "a@x.com"},
                {"name": "Bob", "email": "b@x.com"}
            ])))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let entries = vec![Entry::new("Alice", "a@x.com"), Entry::new("Bob", "b@x.com")];
        let result = submitter_for(&server).submit(&entries).await;
        tokio_test::assert_ok!(result);
    }

    #[tokio::test]
    async fn submit_treats_200_as_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ignored"))
            .mount(&server)
            .await;

        assert!(submitter_for(&server).submit(&alice()).await.is_ok());
    }

    #[tokio::test]
    async fn submit_maps_server_error_to_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        match submitter_for(&server).submit(&alice()).await {
            Err(SubmitError::Rejected { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected Rejected, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn submit_maps_client_error_to_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = tokio_test::assert_err!(submitter_for(&server).submit(&alice()).await);
        assert!(matches!(err, SubmitError::Rejected { status: 404, .. }));
    }

    #[tokio::test]
    async fn submit_maps_unreachable_endpoint_to_transport() {
        // Reserve a free port, then release it so nothing is listening there
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let endpoint = format!("http://127.0.0.1:{port}/users").parse().unwrap();
        let submitter = HttpSubmitter::new(endpoint).unwrap();

        let err = tokio_test::assert_err!(submitter.submit(&alice()).await);
        assert!(matches!(err, SubmitError::Transport { .. }));
    }
}
