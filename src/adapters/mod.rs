// Adapters layer: concrete implementations of the domain ports (http, console, stderr).

pub mod diagnostics;
pub mod http;
pub mod presenter;
