//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod cancel;
mod envelope;
mod result_code;
mod send_data;
mod send_message;

pub use cancel::encode_cancel_body;
pub use envelope::{Envelope, decode_envelope};
pub use send_message::encode_send_message_body;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response has no body")]
    MissingBody,
}
