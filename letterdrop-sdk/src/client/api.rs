//! Letter generation and mail-order API client.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::{ClientError, parse_response};
use crate::objects::{CreateOrderRequest, GenerateLetterRequest, GenerateLetterResponse, OrderResponse};

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed HTTP client for the Letterdrop API.
///
/// Every request carries an explicit timeout so a hung connection surfaces
/// as [`ClientError::Http`] instead of blocking the caller forever.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new `ApiClient`.
    ///
    /// * `base_url` – root URL of the API (e.g. `https://api.letterdrop.ai`).
    ///   Endpoint paths are resolved relative to it, so a base with a path
    ///   prefix such as `http://localhost:8004/v1` keeps that prefix.
    /// * `timeout` – total per-request timeout.
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http,
            base_url: with_trailing_slash(base_url),
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST /generate` – generate a letter from the user's description.
    pub async fn generate_letter(
        &self,
        request: &GenerateLetterRequest,
    ) -> Result<GenerateLetterResponse, ClientError> {
        let url = self.base_url.join("generate")?;
        let resp = self.http.post(url).json(request).send().await?;
        parse_response(resp).await
    }

    /// `POST /order` – create a mail order and obtain payment instructions.
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<OrderResponse, ClientError> {
        let url = self.base_url.join("order")?;
        let resp = self.http.post(url).json(request).send().await?;
        parse_response(resp).await
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::LetterType;
    use mockito::Server;

    fn generate_request() -> GenerateLetterRequest {
        GenerateLetterRequest {
            prompt: "Wrong balance".to_string(),
            letter_type: LetterType::CreditDispute,
            sender_name: None,
            sender_address: None,
        }
    }

    fn client_for(server: &Server) -> ApiClient {
        ApiClient::new(Url::parse(&server.url()).unwrap(), Duration::from_secs(5))
    }

    #[test]
    fn test_endpoints_keep_base_path_prefix() {
        let client = ApiClient::new(
            Url::parse("http://localhost:8004/v1").unwrap(),
            DEFAULT_TIMEOUT,
        );
        assert_eq!(
            client.base_url().join("generate").unwrap().as_str(),
            "http://localhost:8004/v1/generate"
        );

        let client = ApiClient::new(
            Url::parse("https://api.letterdrop.ai").unwrap(),
            DEFAULT_TIMEOUT,
        );
        assert_eq!(
            client.base_url().join("order").unwrap().as_str(),
            "https://api.letterdrop.ai/order"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let client = ApiClient::new(
            Url::parse("http://127.0.0.1:9").unwrap(),
            Duration::from_secs(2),
        );
        let err = client.generate_letter(&generate_request()).await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }

    #[tokio::test]
    async fn test_generate_letter_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/generate")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "prompt": "Wrong balance",
                "letter_type": "credit_dispute",
                "sender_name": null,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"letter":"Dear TransUnion"}"#)
            .create_async()
            .await;

        let response = client_for(&server)
            .generate_letter(&generate_request())
            .await
            .unwrap();

        assert_eq!(response.letter, "Dear TransUnion");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_status_is_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/generate")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let err = client_for(&server)
            .generate_letter(&generate_request())
            .await
            .unwrap_err();

        match err {
            ClientError::Api { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected api error, got {other:?}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_undecodable_body_is_json_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/order")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"order_id": 42"#)
            .create_async()
            .await;

        let request = CreateOrderRequest {
            letter_content: "Dear Equifax".to_string(),
            sender: crate::objects::SenderAddress {
                name: "Jane Doe".to_string(),
                address_line1: "1 Elm Rd".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                postal_code: "62704".to_string(),
            },
            recipient_bureau: crate::objects::RecipientBureau::Equifax,
            mail_type: crate::objects::MailType::Standard,
        };
        let err = client_for(&server).create_order(&request).await.unwrap_err();

        assert!(matches!(err, ClientError::Json(_)));
        mock.assert_async().await;
    }
}
