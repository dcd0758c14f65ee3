pub mod fetch;
pub mod finder;

pub use crate::domain::model::Poem;
pub use crate::domain::ports::{ConfigProvider, Diagnostics, Presenter, Transport};
pub use crate::utils::error::Result;
