use std::fmt;

use crate::domain::value::{RecipientNo, RequestId};

/// Gateway result code (`header.resultCode`).
///
/// Toast sends it either as a JSON string or a JSON number; the literal token is kept
/// so `-1000` stays `-1000` and `"E01"` stays `E01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultCode(String);

impl ResultCode {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, when the code is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decoded response header shared by every gateway response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeader {
    pub is_successful: bool,
    pub result_code: ResultCode,
    pub result_message: String,
}

/// Typed view of the `body.data` returned by the send endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendData {
    pub request_id: Option<RequestId>,
    pub status_code: Option<ResultCode>,
    pub sender_grouping_key: Option<String>,
    pub send_results: Vec<SendResult>,
}

/// Per-recipient outcome inside [`SendData`]. Order follows the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    pub recipient_no: Option<RecipientNo>,
    pub result_code: Option<ResultCode>,
    pub result_message: Option<String>,
    pub recipient_seq: Option<u64>,
    pub recipient_grouping_key: Option<String>,
}

impl SendResult {
    /// `true` when the gateway accepted this recipient (result code `0`).
    pub fn is_accepted(&self) -> bool {
        self.result_code
            .as_ref()
            .and_then(ResultCode::as_i64)
            .is_some_and(|code| code == 0)
    }
}
