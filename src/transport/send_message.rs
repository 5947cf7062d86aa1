use serde_json::{Map, Value};

use super::TransportError;
use crate::domain::{
    Channel, Content, MessageBody, MessageTitle, RecipientList, SendMessage, SendOptions,
    TemplateId,
};

const SEND_NO_FIELD: &str = "sendNo";
const REQUEST_DATE_FIELD: &str = "requestDate";
const SENDER_GROUPING_KEY_FIELD: &str = "senderGroupingKey";
const USER_ID_FIELD: &str = "userId";
const STATS_ID_FIELD: &str = "statsId";

/// Build the JSON body for a send request.
///
/// Fields are applied in a fixed order and later writes win:
///
/// 1. `sendNo` from [`resolve_send_no`]; nothing overrides it.
/// 2. `templateId` / `title` / `body` from the request content. Templated SMS and
///    templated auth SMS set `body` to `""`.
/// 3. `recipientList`; nothing overrides it.
/// 4. `body` from [`SendOptions::body`].
/// 5. `requestDate`, `senderGroupingKey`, `userId`, `statsId` from the options.
/// 6. [`SendOptions::extra`], skipping `sendNo` and `recipientList`.
pub fn encode_send_message_body(
    request: &SendMessage,
    configured_send_no: &str,
) -> Result<Map<String, Value>, TransportError> {
    let options = request.options();
    let mut body = Map::new();

    if let Some(send_no) = resolve_send_no(configured_send_no, options) {
        body.insert(SEND_NO_FIELD.to_owned(), Value::String(send_no.to_owned()));
    }

    match request.content() {
        Content::Template(template_id) => {
            body.insert(
                TemplateId::FIELD.to_owned(),
                Value::String(template_id.as_str().to_owned()),
            );
            if request.channel() != Channel::Mms {
                body.insert(MessageBody::FIELD.to_owned(), Value::String(String::new()));
            }
        }
        Content::Raw { title, body: text } => {
            if let Some(title) = title {
                body.insert(
                    MessageTitle::FIELD.to_owned(),
                    Value::String(title.as_str().to_owned()),
                );
            }
            body.insert(
                MessageBody::FIELD.to_owned(),
                Value::String(text.as_str().to_owned()),
            );
        }
    }

    body.insert(
        RecipientList::FIELD.to_owned(),
        serde_json::to_value(request.recipients())?,
    );

    push_options(&mut body, options);

    Ok(body)
}

/// The configured send number wins whenever it is non-empty; the per-call value is
/// only a fallback.
pub fn resolve_send_no<'a>(configured: &'a str, options: &'a SendOptions) -> Option<&'a str> {
    if !configured.is_empty() {
        return Some(configured);
    }
    options.send_no.as_deref()
}

fn push_options(body: &mut Map<String, Value>, options: &SendOptions) {
    if let Some(text) = options.body.as_ref() {
        body.insert(
            MessageBody::FIELD.to_owned(),
            Value::String(text.as_str().to_owned()),
        );
    }

    let named = [
        (REQUEST_DATE_FIELD, options.request_date.as_ref()),
        (SENDER_GROUPING_KEY_FIELD, options.sender_grouping_key.as_ref()),
        (USER_ID_FIELD, options.user_id.as_ref()),
        (STATS_ID_FIELD, options.stats_id.as_ref()),
    ];
    for (field, value) in named {
        if let Some(value) = value {
            body.insert(field.to_owned(), Value::String(value.clone()));
        }
    }

    for (key, value) in &options.extra {
        if key == SEND_NO_FIELD || key == RecipientList::FIELD {
            continue;
        }
        body.insert(key.clone(), value.clone());
    }
}
