pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{
    diagnostics::StderrDiagnostics, http::HttpTransport, presenter::ConsolePresenter,
};
pub use config::AppConfig;
pub use self::core::{
    fetch::{PoemFetcher, POETRYDB_RANDOM_ENDPOINT},
    finder::PoemFinder,
};
pub use domain::model::Poem;
pub use utils::error::{FetchError, FetchErrorKind, FinderError, Result};
