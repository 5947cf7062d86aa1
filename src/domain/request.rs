use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    MessageBody, MessageTitle, RecipientNo, RequestId, TemplateId, UpdateUser,
};

/// One message destination.
///
/// Keys the gateway accepts but this type does not model are kept in `extra` and sent
/// back unchanged; `extra` must not repeat a modeled key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub recipient_no: RecipientNo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_parameter: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub international_recipient_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_grouping_key: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipient {
    pub fn new(recipient_no: RecipientNo) -> Self {
        Self {
            recipient_no,
            template_parameter: None,
            country_code: None,
            international_recipient_no: None,
            recipient_grouping_key: None,
            extra: Map::new(),
        }
    }

    /// Add one template substitution (`templateParameter[key] = value`).
    ///
    /// Values are passed through as JSON; the template decides what it accepts.
    pub fn with_template_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.template_parameter
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    pub fn with_international_recipient_no(mut self, recipient_no: impl Into<String>) -> Self {
        self.international_recipient_no = Some(recipient_no.into());
        self
    }

    pub fn with_recipient_grouping_key(mut self, key: impl Into<String>) -> Self {
        self.recipient_grouping_key = Some(key.into());
        self
    }
}

/// Ordered list of recipients (`recipientList`). Order is kept on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RecipientList(Vec<Recipient>);

impl RecipientList {
    /// JSON field name used by Toast (`recipientList`).
    pub const FIELD: &'static str = "recipientList";

    pub fn as_slice(&self) -> &[Recipient] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Recipient>> for RecipientList {
    fn from(value: Vec<Recipient>) -> Self {
        Self(value)
    }
}

impl FromIterator<Recipient> for RecipientList {
    fn from_iter<I: IntoIterator<Item = Recipient>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<Value> for RecipientList {
    type Error = ValidationError;

    /// Accept an untyped JSON payload, e.g. one relayed from another service.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        decode_sequence(value, Self::FIELD).map(Self)
    }
}

/// A scheduled message addressed for cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub request_id: RequestId,
    pub recipient_seq: u64,
}

impl Reservation {
    pub fn new(request_id: RequestId, recipient_seq: u64) -> Self {
        Self {
            request_id,
            recipient_seq,
        }
    }
}

/// List of reservations (`reservationList`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ReservationList(Vec<Reservation>);

impl ReservationList {
    /// JSON field name used by Toast (`reservationList`).
    pub const FIELD: &'static str = "reservationList";

    pub fn as_slice(&self) -> &[Reservation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Reservation>> for ReservationList {
    fn from(value: Vec<Reservation>) -> Self {
        Self(value)
    }
}

impl FromIterator<Reservation> for ReservationList {
    fn from_iter<I: IntoIterator<Item = Reservation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<Value> for ReservationList {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        decode_sequence(value, Self::FIELD).map(Self)
    }
}

fn decode_sequence<T>(value: Value, field: &'static str) -> Result<Vec<T>, ValidationError>
where
    T: DeserializeOwned,
{
    let Value::Array(items) = value else {
        return Err(ValidationError::NotASequence { field });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|err| ValidationError::InvalidElement {
                field,
                index,
                reason: err.to_string(),
            })
        })
        .collect()
}

/// Per-call options layered over the fields an operation sets itself.
///
/// `send_no` is only used when the client has no configured send number.
/// `body` replaces the operation's body, including the `""` of templated SMS.
/// `extra` carries any other gateway field; it cannot replace `sendNo` or
/// `recipientList`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendOptions {
    pub send_no: Option<String>,
    pub body: Option<MessageBody>,
    /// Reservation time, `yyyy-MM-dd HH:mm`.
    pub request_date: Option<String>,
    pub sender_grouping_key: Option<String>,
    pub user_id: Option<String>,
    pub stats_id: Option<String>,
    pub extra: Map<String, Value>,
}

/// Gateway endpoint family a message is sent through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Short message (`sender/sms`).
    Sms,
    /// Long or multimedia message (`sender/mms`).
    Mms,
    /// Authentication-code SMS (`sender/auth/sms`).
    AuthSms,
}

impl Channel {
    pub fn path_segments(self) -> &'static [&'static str] {
        match self {
            Self::Sms => &["sender", "sms"],
            Self::Mms => &["sender", "mms"],
            Self::AuthSms => &["sender", "auth", "sms"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Mms => "mms",
            Self::AuthSms => "auth_sms",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Template(TemplateId),
    Raw {
        title: Option<MessageTitle>,
        body: MessageBody,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendMessage {
    channel: Channel,
    content: Content,
    recipients: RecipientList,
    options: SendOptions,
}

impl SendMessage {
    pub fn templated_sms(
        template_id: TemplateId,
        recipients: RecipientList,
        options: SendOptions,
    ) -> Self {
        Self::new(Channel::Sms, Content::Template(template_id), recipients, options)
    }

    pub fn raw_sms(body: MessageBody, recipients: RecipientList, options: SendOptions) -> Self {
        Self::new(
            Channel::Sms,
            Content::Raw { title: None, body },
            recipients,
            options,
        )
    }

    pub fn templated_lms(
        template_id: TemplateId,
        recipients: RecipientList,
        options: SendOptions,
    ) -> Self {
        Self::new(Channel::Mms, Content::Template(template_id), recipients, options)
    }

    pub fn raw_lms(
        title: MessageTitle,
        body: MessageBody,
        recipients: RecipientList,
        options: SendOptions,
    ) -> Self {
        Self::new(
            Channel::Mms,
            Content::Raw {
                title: Some(title),
                body,
            },
            recipients,
            options,
        )
    }

    pub fn templated_auth_sms(
        template_id: TemplateId,
        recipients: RecipientList,
        options: SendOptions,
    ) -> Self {
        Self::new(
            Channel::AuthSms,
            Content::Template(template_id),
            recipients,
            options,
        )
    }

    pub fn raw_auth_sms(
        body: MessageBody,
        recipients: RecipientList,
        options: SendOptions,
    ) -> Self {
        Self::new(
            Channel::AuthSms,
            Content::Raw { title: None, body },
            recipients,
            options,
        )
    }

    fn new(
        channel: Channel,
        content: Content,
        recipients: RecipientList,
        options: SendOptions,
    ) -> Self {
        Self {
            channel,
            content,
            recipients,
            options,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn recipients(&self) -> &RecipientList {
        &self.recipients
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelReservations {
    reservations: ReservationList,
    update_user: UpdateUser,
}

impl CancelReservations {
    pub fn new(reservations: ReservationList, update_user: UpdateUser) -> Self {
        Self {
            reservations,
            update_user,
        }
    }

    pub fn reservations(&self) -> &ReservationList {
        &self.reservations
    }

    pub fn update_user(&self) -> &UpdateUser {
        &self.update_user
    }
}
