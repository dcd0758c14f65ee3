use crate::core::fetch::PoemFetcher;
use crate::core::{Diagnostics, Poem, Presenter, Transport};
use crate::utils::error::Result;

/// Runs the fetch-then-present pipeline.
pub struct PoemFinder<T: Transport, D: Diagnostics, P: Presenter> {
    fetcher: PoemFetcher<T, D>,
    presenter: P,
}

impl<T: Transport, D: Diagnostics, P: Presenter> PoemFinder<T, D, P> {
    pub fn new(fetcher: PoemFetcher<T, D>, presenter: P) -> Self {
        Self { fetcher, presenter }
    }

    /// 取得一首詩並交給 presenter。失敗時 presenter 會收到 `None`。
    pub async fn run(&mut self) -> Result<Option<Poem>> {
        tracing::info!("Fetching a poem from {}", self.fetcher.endpoint());

        let poem = self.fetcher.fetch().await;
        self.presenter.present(poem.as_ref())?;

        Ok(poem)
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
