use crate::domain::model::Poem;
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// One HTTP GET, returning the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> std::result::Result<Vec<u8>, FetchError>;
}

/// Where fetch failures are reported. Failures never reach the caller of `fetch`.
pub trait Diagnostics: Send + Sync {
    fn report(&self, error: &FetchError);
}

pub trait Presenter {
    fn present(&mut self, poem: Option<&Poem>) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
}
