use crate::adapters::diagnostics::StderrDiagnostics;
use crate::core::{Diagnostics, Poem, Transport};
use crate::utils::error::FetchError;
use url::Url;

pub const POETRYDB_RANDOM_ENDPOINT: &str = "https://poetrydb.org/random/1";

/// 單次請求：取得一首隨機的詩
pub struct PoemFetcher<T: Transport, D: Diagnostics = StderrDiagnostics> {
    endpoint: String,
    transport: T,
    diagnostics: D,
}

impl<T: Transport> PoemFetcher<T> {
    pub fn new(endpoint: impl Into<String>, transport: T) -> Self {
        Self::with_diagnostics(endpoint, transport, StderrDiagnostics)
    }
}

impl<T: Transport, D: Diagnostics> PoemFetcher<T, D> {
    pub fn with_diagnostics(endpoint: impl Into<String>, transport: T, diagnostics: D) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
            diagnostics,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches and decodes once. `Ok(None)` means the API returned an empty array.
    pub async fn try_fetch(&self) -> Result<Option<Poem>, FetchError> {
        let url = Url::parse(&self.endpoint)?;

        let body = self.transport.get(&url).await?;
        tracing::debug!("Received {} bytes from {}", body.len(), url);

        let poems: Vec<Poem> = serde_json::from_slice(&body)?;
        tracing::debug!("Decoded {} poem(s)", poems.len());

        Ok(poems.into_iter().next())
    }

    /// Like `try_fetch`, but every failure is reported to the diagnostics sink
    /// and turned into `None`.
    pub async fn fetch(&self) -> Option<Poem> {
        match self.try_fetch().await {
            Ok(Some(poem)) => {
                tracing::info!(
                    "Fetched \"{}\" by {} ({} lines)",
                    poem.title,
                    poem.author,
                    poem.declared_line_count().unwrap_or(poem.lines.len())
                );
                Some(poem)
            }
            Ok(None) => {
                tracing::debug!("API returned no poems");
                None
            }
            Err(e) => {
                tracing::debug!("Fetch failed ({:?}): {}", e.kind(), e);
                self.diagnostics.report(&e);
                None
            }
        }
    }
}
