//! Third-party QR image rendering.

use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use url::Url;

use super::ClientError;

/// Public QR rendering endpoint used when none is configured.
pub const DEFAULT_QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Build the image URL that renders `payload` as a 200x200 QR code.
pub fn qr_image_url(service: &Url, payload: &str) -> Url {
    let mut url = service.clone();
    url.set_query(Some(&format!(
        "size=200x200&data={}",
        urlencoding::encode(payload)
    )));
    url
}

/// Downloads rendered QR images.
#[derive(Debug, Clone)]
pub struct QrClient {
    http: Client,
    service: Url,
}

impl QrClient {
    pub fn new(service: Url, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { http, service }
    }

    /// `GET {service}?size=200x200&data={payload}` – fetch the PNG bytes.
    pub async fn fetch(&self, payload: &str) -> Result<Bytes, ClientError> {
        let resp = self
            .http
            .get(qr_image_url(&self.service, payload))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, body });
        }
        Ok(resp.bytes().await?)
    }
}
