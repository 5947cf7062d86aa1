use serde::Deserialize;
use serde_json::Value;

use super::result_code::TransportCode;
use crate::domain::{RecipientNo, RequestId, ResultCode, SendData, SendResult};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendDataJson {
    #[serde(default)]
    request_id: Option<RequestId>,
    #[serde(default)]
    status_code: Option<TransportCode>,
    #[serde(default)]
    sender_grouping_key: Option<String>,
    #[serde(default)]
    send_result_list: Vec<SendResultJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendResultJson {
    #[serde(default)]
    recipient_no: Option<RecipientNo>,
    #[serde(default)]
    result_code: Option<TransportCode>,
    #[serde(default)]
    result_message: Option<String>,
    #[serde(default)]
    recipient_seq: Option<u64>,
    #[serde(default)]
    recipient_grouping_key: Option<String>,
}

impl TryFrom<Value> for SendData {
    type Error = serde_json::Error;

    /// Decode the `body.data` value returned by a send operation.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        // `TransportCode` reads raw JSON tokens; `from_value` cannot provide them.
        let json = serde_json::to_string(&value)?;
        let parsed: SendDataJson = serde_json::from_str(&json)?;

        Ok(SendData {
            request_id: parsed.request_id,
            status_code: parsed.status_code.map(ResultCode::from),
            sender_grouping_key: parsed.sender_grouping_key,
            send_results: parsed
                .send_result_list
                .into_iter()
                .map(|item| SendResult {
                    recipient_no: item.recipient_no,
                    result_code: item.result_code.map(ResultCode::from),
                    result_message: item.result_message,
                    recipient_seq: item.recipient_seq,
                    recipient_grouping_key: item.recipient_grouping_key,
                })
                .collect(),
        })
    }
}
