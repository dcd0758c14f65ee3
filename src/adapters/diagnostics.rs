use crate::domain::ports::Diagnostics;
use crate::utils::error::{FetchError, FetchErrorKind};

pub const INVALID_ADDRESS_MESSAGE: &str = "Invalid address";
pub const FETCH_FAILED_MESSAGE: &str =
    "Could not retrieve data from endpoint, or could not decode data.";
pub const SEPARATOR: &str = "----";

/// 把錯誤轉成要印出的診斷訊息行
pub fn render_diagnostic(error: &FetchError) -> Vec<String> {
    match error.kind() {
        FetchErrorKind::AddressInvalid => vec![INVALID_ADDRESS_MESSAGE.to_string()],
        FetchErrorKind::TransportFailed | FetchErrorKind::DecodeFailed => vec![
            FETCH_FAILED_MESSAGE.to_string(),
            SEPARATOR.to_string(),
            error.to_string(),
        ],
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn report(&self, error: &FetchError) {
        for line in render_diagnostic(error) {
            eprintln!("{}", line);
        }
    }
}
