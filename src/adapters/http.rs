use crate::domain::ports::Transport;
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// reqwest 實作的 Transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// 不設 timeout 時行為與一般 `Client::new()` 相同
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> std::result::Result<Vec<u8>, FetchError> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        // 不檢查狀態碼，非 2xx 的 body 一樣交給解碼判斷
        tracing::debug!("API response status: {}", response.status());
        let body = response.bytes().await?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FetchErrorKind;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_get_returns_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/random/1");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("[]");
        });

        let transport = HttpTransport::new(None).unwrap();
        let url = Url::parse(&server.url("/random/1")).unwrap();
        let body = transport.get(&url).await.unwrap();

        api_mock.assert();
        assert_eq!(body, b"[]");
    }

    #[tokio::test]
    async fn test_get_non_success_status_returns_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/random/1");
            then.status(500).body(r#"{"status":500,"reason":"Internal error"}"#);
        });

        let transport = HttpTransport::new(None).unwrap();
        let url = Url::parse(&server.url("/random/1")).unwrap();
        let body = transport.get(&url).await.unwrap();

        api_mock.assert();
        assert_eq!(body, br#"{"status":500,"reason":"Internal error"}"#);
    }

    #[tokio::test]
    async fn test_get_times_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .body("[]")
                .delay(Duration::from_secs(2));
        });

        let transport = HttpTransport::new(Some(Duration::from_millis(100))).unwrap();
        let url = Url::parse(&server.url("/slow")).unwrap();
        let err = transport.get(&url).await.unwrap_err();

        assert_eq!(err.kind(), FetchErrorKind::TransportFailed);
    }
}
