use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Template identifier registered in the Toast console (`templateId`).
///
/// Invariant: not blank. The value is sent exactly as given.
pub struct TemplateId(String);

impl TemplateId {
    /// JSON field name used by Toast (`templateId`).
    pub const FIELD: &'static str = "templateId";

    /// Create a validated [`TemplateId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the template id as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TemplateId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TemplateId> for String {
    fn from(value: TemplateId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Destination number as sent to Toast (`recipientNo`).
///
/// Invariant: non-empty after trimming. The number format itself is not checked; the
/// gateway decides what it accepts.
pub struct RecipientNo(String);

impl RecipientNo {
    /// JSON field name used by Toast (`recipientNo`).
    pub const FIELD: &'static str = "recipientNo";

    /// Create a validated (non-empty) recipient number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to Toast.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RecipientNo {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecipientNo> for String {
    fn from(value: RecipientNo) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Request id returned by a send call and used to address reservations (`requestId`).
///
/// Invariant: not blank. The value is sent exactly as given.
pub struct RequestId(String);

impl RequestId {
    /// JSON field name used by Toast (`requestId`).
    pub const FIELD: &'static str = "requestId";

    /// Create a validated [`RequestId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated request id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RequestId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RequestId> for String {
    fn from(value: RequestId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Name recorded by Toast as the author of a reservation change (`updateUser`).
///
/// Invariant: not blank. The value is sent exactly as given.
pub struct UpdateUser(String);

impl UpdateUser {
    /// JSON field name used by Toast (`updateUser`).
    pub const FIELD: &'static str = "updateUser";

    /// Create a validated [`UpdateUser`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated user name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
/// Message title (`title`), used by LMS/MMS.
pub struct MessageTitle(String);

impl MessageTitle {
    /// JSON field name used by Toast (`title`).
    pub const FIELD: &'static str = "title";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
/// Free-text message body (`body`).
///
/// Empty bodies are allowed: templated sends transmit `""` and let the template fill it.
pub struct MessageBody(String);

impl MessageBody {
    /// JSON field name used by Toast (`body`).
    pub const FIELD: &'static str = "body";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MessageBody {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MessageBody {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for MessageTitle {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MessageTitle {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
