use serde::Deserialize;
use serde_json::Value;

use super::TransportError;
use super::result_code::TransportCode;
use crate::domain::{ResponseHeader, ResultCode};

/// Decoded gateway response: header plus the optional `body.data` payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub header: ResponseHeader,
    /// `None` when the response has no `body` object at all.
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeJson {
    header: HeaderJson,
    #[serde(default)]
    body: Option<BodyJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeaderJson {
    is_successful: bool,
    #[serde(default)]
    result_code: Option<TransportCode>,
    #[serde(default)]
    result_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct BodyJson {
    #[serde(default)]
    data: Value,
}

pub fn decode_envelope(json: &str) -> Result<Envelope, TransportError> {
    let parsed: EnvelopeJson = serde_json::from_str(json)?;

    Ok(Envelope {
        header: ResponseHeader {
            is_successful: parsed.header.is_successful,
            result_code: parsed
                .header
                .result_code
                .map(ResultCode::from)
                .unwrap_or_else(|| ResultCode::new("")),
            result_message: parsed.header.result_message.unwrap_or_default(),
        },
        data: parsed.body.map(|body| body.data),
    })
}
