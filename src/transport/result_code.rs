use serde::Deserialize;
use serde::de::Error as DeError;

use crate::domain::ResultCode;

/// Code value returned by Toast as either JSON string or JSON number.
///
/// For numbers, the raw JSON token is preserved (`-1000` stays `"-1000"`, `1.0` is not
/// reformatted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportCode(String);

impl From<TransportCode> for ResultCode {
    fn from(value: TransportCode) -> Self {
        ResultCode::new(value.0)
    }
}

impl<'de> Deserialize<'de> for TransportCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected code field to be JSON string or number",
            )),
        }
    }
}
