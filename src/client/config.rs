use std::fmt;
use std::time::Duration;

use serde::Deserialize;

pub(crate) const DEFAULT_HOST: &str = "https://api-sms.cloud.toast.com";
pub(crate) const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// Connection settings for [`ToastSmsClient`](super::ToastSmsClient).
///
/// Every field is optional when deserialized (`appKey`, `secretKey`, `sendNo`, `host`,
/// `timeoutMs`); missing ones take the [`Default`] values.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    pub app_key: String,
    pub secret_key: String,
    /// Default sender number. When non-empty it is used for every send, even if the
    /// call supplies its own [`SendOptions::send_no`](crate::SendOptions::send_no).
    pub send_no: String,
    pub host: String,
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Per-request timeout; `timeout_ms == 0` means no timeout.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            app_key: String::new(),
            secret_key: String::new(),
            send_no: String::new(),
            host: DEFAULT_HOST.to_owned(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("app_key", &self.app_key)
            .field("secret_key", &"<redacted>")
            .field("send_no", &self.send_no)
            .field("host", &self.host)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
