//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod config;

use std::convert::Infallible;
use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};
use url::Url;

pub use config::ClientConfig;

use crate::domain::{
    CancelReservations, MessageBody, MessageTitle, RecipientList, ReservationList, ResultCode,
    SendMessage, SendOptions, TemplateId, UpdateUser, ValidationError,
};
use crate::transport::{Envelope, TransportError};

const SECRET_KEY_HEADER: &str = "x-secret-key";
const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";
const API_PATH: [&str; 3] = ["sms", "v2.1", "appKeys"];
const CANCEL_PATH: [&str; 2] = ["reservations", "cancel"];

type BoxError = Box<dyn StdError + Send + Sync>;
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Post,
    Put,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        method: HttpMethod,
        url: &'a Url,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        method: HttpMethod,
        url: &'a Url,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let request = match method {
                HttpMethod::Post => self.client.post(url.clone()),
                HttpMethod::Put => self.client.put(url.clone()),
            };
            let response = request.body(body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ToastSmsClient`].
///
/// The `Display` output is the caller-facing message:
/// - [`ToastSmsError::Transport`] always reads `Fail to request to toast`; the cause is
///   available through [`std::error::Error::source`],
/// - [`ToastSmsError::Remote`] reads `{resultCode} : {resultMessage}`.
pub enum ToastSmsError {
    /// An argument was rejected before any request was sent.
    #[error(transparent)]
    InvalidArgument(#[from] ValidationError),

    /// The HTTP exchange failed: connection, timeout, non-2xx status, or an
    /// unreadable response envelope.
    #[error("Fail to request to toast")]
    Transport(#[source] BoxError),

    /// The gateway answered with `header.isSuccessful == false`.
    #[error("{code} : {message}")]
    Remote { code: ResultCode, message: String },
}

impl From<Infallible> for ToastSmsError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

/// Non-2xx HTTP status, kept as the source of [`ToastSmsError::Transport`].
#[derive(Debug, thiserror::Error)]
#[error("unexpected HTTP status: {status}")]
pub struct HttpStatusError {
    pub status: u16,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// Builder for [`ToastSmsClient`].
///
/// Starts from [`ClientConfig::default`].
pub struct ToastSmsClientBuilder {
    config: ClientConfig,
    user_agent: Option<String>,
}

impl ToastSmsClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one deserialized from a file.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn app_key(mut self, app_key: impl Into<String>) -> Self {
        self.config.app_key = app_key.into();
        self
    }

    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.config.secret_key = secret_key.into();
        self
    }

    pub fn send_no(mut self, send_no: impl Into<String>) -> Self {
        self.config.send_no = send_no.into();
        self
    }

    /// Override the gateway base URL. A path in the URL is kept as a prefix.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the HTTP timeout applied to each whole request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`ToastSmsClient`].
    ///
    /// Fails with [`ToastSmsError::InvalidArgument`] when the host is not an absolute
    /// base URL or the secret key cannot be sent as a header value.
    pub fn build(self) -> Result<ToastSmsClient, ToastSmsError> {
        let base_url = parse_host(&self.config.host)?;

        let mut secret_key = HeaderValue::from_str(&self.config.secret_key).map_err(|_| {
            ValidationError::InvalidHeaderValue {
                header: SECRET_KEY_HEADER,
            }
        })?;
        secret_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(SECRET_KEY_HEADER), secret_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ToastSmsError::Transport(Box::new(err)))?;

        tracing::debug!(
            host = %base_url,
            timeout_ms = self.config.timeout_ms,
            "create a client"
        );

        Ok(ToastSmsClient {
            app_key: self.config.app_key,
            send_no: self.config.send_no,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn parse_host(host: &str) -> Result<Url, ValidationError> {
    let invalid = || ValidationError::InvalidHost {
        input: host.to_owned(),
    };
    let url = Url::parse(host).map_err(|_| invalid())?;
    if url.cannot_be_a_base() {
        return Err(invalid());
    }
    Ok(url)
}

#[derive(Clone)]
/// High-level Toast SMS client.
///
/// Every operation is a single request/response round trip: no retries, no shared
/// mutable state. Clones share the underlying connection pool.
///
/// Send operations resolve with the gateway's `body.data` value as-is; decode it with
/// [`SendData::try_from`](crate::SendData) when a typed view is needed.
pub struct ToastSmsClient {
    app_key: String,
    send_no: String,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl ToastSmsClient {
    /// Create a client from a full configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ToastSmsError> {
        ToastSmsClientBuilder::new().config(config).build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> ToastSmsClientBuilder {
        ToastSmsClientBuilder::new()
    }

    /// Send a templated SMS. The request carries `body: ""` unless
    /// [`SendOptions::body`] is set.
    pub async fn send_templated_sms<R, E>(
        &self,
        template_id: TemplateId,
        recipients: R,
        options: SendOptions,
    ) -> Result<Value, ToastSmsError>
    where
        R: TryInto<RecipientList, Error = E>,
        ToastSmsError: From<E>,
    {
        let recipients = recipients.try_into()?;
        self.send(SendMessage::templated_sms(template_id, recipients, options))
            .await
    }

    pub async fn send_raw_sms<R, E>(
        &self,
        body: MessageBody,
        recipients: R,
        options: SendOptions,
    ) -> Result<Value, ToastSmsError>
    where
        R: TryInto<RecipientList, Error = E>,
        ToastSmsError: From<E>,
    {
        let recipients = recipients.try_into()?;
        self.send(SendMessage::raw_sms(body, recipients, options))
            .await
    }

    pub async fn send_templated_lms<R, E>(
        &self,
        template_id: TemplateId,
        recipients: R,
        options: SendOptions,
    ) -> Result<Value, ToastSmsError>
    where
        R: TryInto<RecipientList, Error = E>,
        ToastSmsError: From<E>,
    {
        let recipients = recipients.try_into()?;
        self.send(SendMessage::templated_lms(template_id, recipients, options))
            .await
    }

    pub async fn send_raw_lms<R, E>(
        &self,
        title: MessageTitle,
        body: MessageBody,
        recipients: R,
        options: SendOptions,
    ) -> Result<Value, ToastSmsError>
    where
        R: TryInto<RecipientList, Error = E>,
        ToastSmsError: From<E>,
    {
        let recipients = recipients.try_into()?;
        self.send(SendMessage::raw_lms(title, body, recipients, options))
            .await
    }

    /// Send an authentication-code SMS from a template. The request carries
    /// `body: ""` unless [`SendOptions::body`] is set.
    pub async fn send_templated_auth_sms<R, E>(
        &self,
        template_id: TemplateId,
        recipients: R,
        options: SendOptions,
    ) -> Result<Value, ToastSmsError>
    where
        R: TryInto<RecipientList, Error = E>,
        ToastSmsError: From<E>,
    {
        let recipients = recipients.try_into()?;
        self.send(SendMessage::templated_auth_sms(
            template_id,
            recipients,
            options,
        ))
        .await
    }

    pub async fn send_raw_auth_sms<R, E>(
        &self,
        body: MessageBody,
        recipients: R,
        options: SendOptions,
    ) -> Result<Value, ToastSmsError>
    where
        R: TryInto<RecipientList, Error = E>,
        ToastSmsError: From<E>,
    {
        let recipients = recipients.try_into()?;
        self.send(SendMessage::raw_auth_sms(body, recipients, options))
            .await
    }

    /// Cancel scheduled messages. Resolves with the gateway's `header.resultMessage`.
    pub async fn cancel_reservations<R, E>(
        &self,
        reservations: R,
        update_user: UpdateUser,
    ) -> Result<String, ToastSmsError>
    where
        R: TryInto<ReservationList, Error = E>,
        ToastSmsError: From<E>,
    {
        let reservations = reservations.try_into()?;
        self.cancel(CancelReservations::new(reservations, update_user))
            .await
    }

    /// Send a prebuilt message request.
    ///
    /// Errors:
    /// - [`ToastSmsError::Transport`] when the exchange fails or the response has no body,
    /// - [`ToastSmsError::Remote`] when the gateway reports a failure.
    pub async fn send(&self, request: SendMessage) -> Result<Value, ToastSmsError> {
        let url = self.endpoint(request.channel().path_segments())?;
        let body = crate::transport::encode_send_message_body(&request, &self.send_no)
            .map_err(|err| ToastSmsError::Transport(Box::new(err)))?;

        tracing::debug!(
            channel = request.channel().as_str(),
            recipients = request.recipients().len(),
            "send a message"
        );

        let envelope = self.execute(HttpMethod::Post, &url, body).await?;
        envelope
            .data
            .ok_or_else(|| ToastSmsError::Transport(Box::new(TransportError::MissingBody)))
    }

    /// Cancel reservations from a prebuilt request.
    pub async fn cancel(&self, request: CancelReservations) -> Result<String, ToastSmsError> {
        let url = self.endpoint(&CANCEL_PATH)?;
        let body = crate::transport::encode_cancel_body(&request)
            .map_err(|err| ToastSmsError::Transport(Box::new(err)))?;

        tracing::debug!(
            reservations = request.reservations().len(),
            "cancel reservations"
        );

        let envelope = self.execute(HttpMethod::Put, &url, body).await?;
        Ok(envelope.header.result_message)
    }

    fn endpoint(&self, tail: &[&str]) -> Result<Url, ValidationError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ValidationError::InvalidHost {
                input: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(API_PATH)
            .push(&self.app_key)
            .extend(tail);
        Ok(url)
    }

    async fn execute(
        &self,
        method: HttpMethod,
        url: &Url,
        body: Map<String, Value>,
    ) -> Result<Envelope, ToastSmsError> {
        let payload = serde_json::to_vec(&body)
            .map_err(|err| ToastSmsError::Transport(Box::new(err)))?;
        let result = self.http.send(method, url, payload).await;
        normalize(result)
    }
}

/// Turn a raw HTTP outcome into the gateway envelope or a typed error.
fn normalize(result: Result<HttpResponse, BoxError>) -> Result<Envelope, ToastSmsError> {
    let response = result.map_err(|err| {
        tracing::warn!(error = %err, "request to toast failed");
        ToastSmsError::Transport(err)
    })?;

    if !(200..=299).contains(&response.status) {
        tracing::warn!(status = response.status, "toast answered with an error status");
        let body = if response.body.trim().is_empty() {
            None
        } else {
            Some(response.body)
        };
        return Err(ToastSmsError::Transport(Box::new(HttpStatusError {
            status: response.status,
            body,
        })));
    }

    let envelope = crate::transport::decode_envelope(&response.body).map_err(|err| {
        tracing::warn!(error = %err, "unreadable response from toast");
        ToastSmsError::Transport(Box::new(err))
    })?;

    if !envelope.header.is_successful {
        tracing::debug!(
            code = %envelope.header.result_code,
            message = %envelope.header.result_message,
            "toast rejected the request"
        );
        return Err(ToastSmsError::Remote {
            code: envelope.header.result_code,
            message: envelope.header.result_message,
        });
    }

    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use crate::domain::{Recipient, RecipientNo, Reservation, RequestId};

    use super::*;

    #[derive(Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    struct FakeTransportState {
        calls: usize,
        last_method: Option<HttpMethod>,
        last_url: Option<String>,
        last_body: Option<Value>,
        response: Result<(u16, String), String>,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self::with_response(Ok((response_status, response_body.into())))
        }

        fn failing(message: impl Into<String>) -> Self {
            Self::with_response(Err(message.into()))
        }

        fn with_response(response: Result<(u16, String), String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    calls: 0,
                    last_method: None,
                    last_url: None,
                    last_body: None,
                    response,
                })),
            }
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().calls
        }

        fn last_request(&self) -> (Option<HttpMethod>, Option<String>, Option<Value>) {
            let state = self.state.lock().unwrap();
            (
                state.last_method,
                state.last_url.clone(),
                state.last_body.clone(),
            )
        }
    }

    impl HttpTransport for FakeTransport {
        fn send<'a>(
            &'a self,
            method: HttpMethod,
            url: &'a Url,
            body: Vec<u8>,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async move {
                let response = {
                    let mut state = self.state.lock().unwrap();
                    state.calls += 1;
                    state.last_method = Some(method);
                    state.last_url = Some(url.to_string());
                    state.last_body = Some(serde_json::from_slice(&body).unwrap());
                    state.response.clone()
                };
                match response {
                    Ok((status, body)) => Ok(HttpResponse { status, body }),
                    Err(message) => Err(BoxError::from(message)),
                }
            })
        }
    }

    const OK_SEND: &str = r#"
    {
      "header": { "isSuccessful": true, "resultCode": 0, "resultMessage": "SUCCESS" },
      "body": { "data": { "requestId": "20240501-abc", "statusCode": "2", "sendResultList": [] } }
    }
    "#;

    fn make_client(send_no: &str, transport: FakeTransport) -> ToastSmsClient {
        ToastSmsClient {
            app_key: "APPKEY".to_owned(),
            send_no: send_no.to_owned(),
            base_url: Url::parse("https://example.invalid").unwrap(),
            http: Arc::new(transport),
        }
    }

    fn recipients() -> Vec<Recipient> {
        vec![Recipient::new(RecipientNo::new("01000000001").unwrap())]
    }

    fn template() -> TemplateId {
        TemplateId::new("TPL_01").unwrap()
    }

    #[tokio::test]
    async fn templated_sms_posts_to_sms_endpoint_and_returns_data() {
        let transport = FakeTransport::new(200, OK_SEND);
        let client = make_client("0212345678", transport.clone());

        let data = client
            .send_templated_sms(template(), recipients(), SendOptions::default())
            .await
            .unwrap();
        assert_eq!(
            data,
            json!({ "requestId": "20240501-abc", "statusCode": "2", "sendResultList": [] })
        );

        let (method, url, body) = transport.last_request();
        assert_eq!(method, Some(HttpMethod::Post));
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/sms/v2.1/appKeys/APPKEY/sender/sms")
        );
        assert_eq!(
            body,
            Some(json!({
                "sendNo": "0212345678",
                "templateId": "TPL_01",
                "body": "",
                "recipientList": [{ "recipientNo": "01000000001" }]
            }))
        );
    }

    #[tokio::test]
    async fn each_operation_targets_its_endpoint() {
        let transport = FakeTransport::new(200, OK_SEND);
        let client = make_client("0212345678", transport.clone());
        let base = "https://example.invalid/sms/v2.1/appKeys/APPKEY";

        client
            .send_raw_sms(MessageBody::new("hi"), recipients(), SendOptions::default())
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().1,
            Some(format!("{base}/sender/sms"))
        );

        client
            .send_templated_lms(template(), recipients(), SendOptions::default())
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().1,
            Some(format!("{base}/sender/mms"))
        );

        client
            .send_raw_lms(
                MessageTitle::new("title"),
                MessageBody::new("long"),
                recipients(),
                SendOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().1,
            Some(format!("{base}/sender/mms"))
        );

        client
            .send_templated_auth_sms(template(), recipients(), SendOptions::default())
            .await
            .unwrap();
        let (_, url, body) = transport.last_request();
        assert_eq!(url, Some(format!("{base}/sender/auth/sms")));
        assert_eq!(body.unwrap()["body"], json!(""));

        client
            .send_raw_auth_sms(MessageBody::new("1234"), recipients(), SendOptions::default())
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().1,
            Some(format!("{base}/sender/auth/sms"))
        );

        assert_eq!(transport.calls(), 5);
    }

    fn assert_not_array(result: Result<impl std::fmt::Debug, ToastSmsError>, field: &str) {
        let err = result.unwrap_err();
        assert!(
            matches!(
                &err,
                ToastSmsError::InvalidArgument(ValidationError::NotASequence { field: f })
                    if *f == field
            ),
            "unexpected error: {err:?}"
        );
        assert_eq!(err.to_string(), format!("{field} is not array"));
    }

    #[tokio::test]
    async fn non_array_lists_fail_before_any_request_for_every_operation() {
        let transport = FakeTransport::new(200, OK_SEND);
        let client = make_client("0212345678", transport.clone());
        let not_array = || json!({ "recipientNo": "01000000001" });

        assert_not_array(
            client
                .send_templated_sms(template(), not_array(), SendOptions::default())
                .await,
            "recipientList",
        );
        assert_not_array(
            client
                .send_raw_sms(MessageBody::new("b"), json!("01000000001"), SendOptions::default())
                .await,
            "recipientList",
        );
        assert_not_array(
            client
                .send_templated_lms(template(), json!(null), SendOptions::default())
                .await,
            "recipientList",
        );
        assert_not_array(
            client
                .send_raw_lms(
                    MessageTitle::new("t"),
                    MessageBody::new("b"),
                    json!(42),
                    SendOptions::default(),
                )
                .await,
            "recipientList",
        );
        assert_not_array(
            client
                .send_templated_auth_sms(template(), not_array(), SendOptions::default())
                .await,
            "recipientList",
        );
        assert_not_array(
            client
                .send_raw_auth_sms(MessageBody::new("1234"), not_array(), SendOptions::default())
                .await,
            "recipientList",
        );
        assert_not_array(
            client
                .cancel_reservations(json!(null), UpdateUser::new("ops").unwrap())
                .await,
            "reservationList",
        );

        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn json_recipient_arrays_are_accepted() {
        let transport = FakeTransport::new(200, OK_SEND);
        let client = make_client("0212345678", transport.clone());

        client
            .send_raw_sms(
                MessageBody::new("hi"),
                json!([{ "recipientNo": "01000000009" }]),
                SendOptions::default(),
            )
            .await
            .unwrap();

        let (_, _, body) = transport.last_request();
        assert_eq!(
            body.unwrap()["recipientList"],
            json!([{ "recipientNo": "01000000009" }])
        );
    }

    #[tokio::test]
    async fn json_recipients_reach_the_wire_unchanged() {
        let transport = FakeTransport::new(200, OK_SEND);
        let client = make_client("0212345678", transport.clone());
        let recipients = json!([
            {
                "recipientNo": "01000000001",
                "templateParameter": { "code": 1234, "expires": { "minutes": 3 } },
                "customKey": "v"
            }
        ]);

        client
            .send_templated_auth_sms(template(), recipients.clone(), SendOptions::default())
            .await
            .unwrap();

        let (_, _, body) = transport.last_request();
        assert_eq!(body.unwrap()["recipientList"], recipients);
    }

    #[tokio::test]
    async fn configured_send_no_overrides_per_call_send_no() {
        // Kept on purpose: a non-empty configured number always wins over the call's.
        let transport = FakeTransport::new(200, OK_SEND);
        let client = make_client("A", transport.clone());
        let options = SendOptions {
            send_no: Some("B".to_owned()),
            ..Default::default()
        };

        client
            .send_raw_sms(MessageBody::new("hi"), recipients(), options)
            .await
            .unwrap();

        let (_, _, body) = transport.last_request();
        assert_eq!(body.unwrap()["sendNo"], json!("A"));
    }

    #[tokio::test]
    async fn per_call_send_no_is_used_without_configured_one() {
        let transport = FakeTransport::new(200, OK_SEND);
        let client = make_client("", transport.clone());
        let options = SendOptions {
            send_no: Some("B".to_owned()),
            ..Default::default()
        };

        client
            .send_templated_sms(template(), recipients(), options)
            .await
            .unwrap();

        let (_, _, body) = transport.last_request();
        assert_eq!(body.unwrap()["sendNo"], json!("B"));
    }

    #[tokio::test]
    async fn option_body_overrides_templated_empty_body() {
        let transport = FakeTransport::new(200, OK_SEND);
        let client = make_client("0212345678", transport.clone());
        let options = SendOptions {
            body: Some(MessageBody::new("override")),
            request_date: Some("2024-05-01 09:30".to_owned()),
            ..Default::default()
        };

        client
            .send_templated_auth_sms(template(), recipients(), options)
            .await
            .unwrap();

        let body = transport.last_request().2.unwrap();
        assert_eq!(body["body"], json!("override"));
        assert_eq!(body["requestDate"], json!("2024-05-01 09:30"));
    }

    #[tokio::test]
    async fn remote_failure_maps_to_code_and_message() {
        let json = r#"
        {
          "header": { "isSuccessful": false, "resultCode": "4000", "resultMessage": "bad request" }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client("0212345678", transport);

        let err = client
            .send_templated_sms(template(), recipients(), SendOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "4000 : bad request");
        match err {
            ToastSmsError::Remote { code, message } => {
                assert_eq!(code.as_str(), "4000");
                assert_eq!(message, "bad request");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn numeric_remote_code_is_rendered_verbatim() {
        let json = r#"
        {
          "header": { "isSuccessful": false, "resultCode": -1000, "resultMessage": "Invalid appKey" }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client("0212345678", transport);

        let err = client
            .send_raw_sms(MessageBody::new("hi"), recipients(), SendOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "-1000 : Invalid appKey");
    }

    #[tokio::test]
    async fn transport_failure_has_fixed_message_and_keeps_cause() {
        let transport = FakeTransport::failing("operation timed out");
        let client = make_client("0212345678", transport.clone());

        let err = client
            .send_templated_sms(template(), recipients(), SendOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Fail to request to toast");
        assert!(matches!(err, ToastSmsError::Transport(_)));
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("operation timed out")
        );
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn non_success_http_status_is_a_transport_failure() {
        let json = r#"{ "header": { "isSuccessful": false, "resultCode": 401, "resultMessage": "x" } }"#;
        let transport = FakeTransport::new(401, json);
        let client = make_client("0212345678", transport);

        let err = client
            .send_raw_sms(MessageBody::new("hi"), recipients(), SendOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Fail to request to toast");
        let status = err
            .source()
            .and_then(|source| source.downcast_ref::<HttpStatusError>())
            .map(|source| source.status);
        assert_eq!(status, Some(401));
    }

    #[tokio::test]
    async fn unreadable_envelope_is_a_transport_failure() {
        let transport = FakeTransport::new(200, "<html>gateway</html>");
        let client = make_client("0212345678", transport);

        let err = client
            .send_raw_sms(MessageBody::new("hi"), recipients(), SendOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Fail to request to toast");
    }

    #[tokio::test]
    async fn successful_send_without_body_is_a_transport_failure() {
        let json = r#"{ "header": { "isSuccessful": true, "resultCode": 0, "resultMessage": "SUCCESS" } }"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client("0212345678", transport);

        let err = client
            .send_raw_sms(MessageBody::new("hi"), recipients(), SendOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ToastSmsError::Transport(_)));
    }

    #[tokio::test]
    async fn cancel_uses_put_and_returns_result_message() {
        let json = r#"
        {
          "header": { "isSuccessful": true, "resultCode": 0, "resultMessage": "SUCCESS" },
          "body": { "data": { "ignored": true } }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client("0212345678", transport.clone());

        let message = client
            .cancel_reservations(
                vec![Reservation::new(RequestId::new("20240501-abc").unwrap(), 1)],
                UpdateUser::new("ops").unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(message, "SUCCESS");

        let (method, url, body) = transport.last_request();
        assert_eq!(method, Some(HttpMethod::Put));
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/sms/v2.1/appKeys/APPKEY/reservations/cancel")
        );
        assert_eq!(
            body,
            Some(json!({
                "reservationList": [{ "requestId": "20240501-abc", "recipientSeq": 1 }],
                "updateUser": "ops"
            }))
        );
    }

    #[tokio::test]
    async fn cancel_maps_transport_failure() {
        let transport = FakeTransport::failing("connection reset");
        let client = make_client("0212345678", transport.clone());

        let err = client
            .cancel_reservations(
                vec![Reservation::new(RequestId::new("r").unwrap(), 1)],
                UpdateUser::new("ops").unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ToastSmsError::Transport(_)));
        assert_eq!(err.to_string(), "Fail to request to toast");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("connection reset")
        );
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn cancel_maps_remote_failure() {
        let json = r#"
        {
          "header": { "isSuccessful": false, "resultCode": -2000, "resultMessage": "not found" }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client("0212345678", transport);

        let err = client
            .cancel_reservations(
                vec![Reservation::new(RequestId::new("r").unwrap(), 1)],
                UpdateUser::new("ops").unwrap(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "-2000 : not found");
    }

    #[test]
    fn endpoint_keeps_host_path_prefix_and_encodes_app_key() {
        let client = ToastSmsClient {
            app_key: "app key".to_owned(),
            send_no: String::new(),
            base_url: Url::parse("https://proxy.example.invalid/toast/").unwrap(),
            http: Arc::new(FakeTransport::new(200, OK_SEND)),
        };

        let url = client.endpoint(&CANCEL_PATH).unwrap();
        assert_eq!(
            url.as_str(),
            "https://proxy.example.invalid/toast/sms/v2.1/appKeys/app%20key/reservations/cancel"
        );
    }

    #[test]
    fn builder_validates_host_and_secret_key() {
        let err = ToastSmsClient::builder()
            .host("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ToastSmsError::InvalidArgument(ValidationError::InvalidHost { .. })
        ));

        let err = ToastSmsClient::builder()
            .host("mailto:ops@example.invalid")
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ToastSmsError::InvalidArgument(ValidationError::InvalidHost { .. })
        ));

        let err = ToastSmsClient::builder()
            .secret_key("line\nbreak")
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ToastSmsError::InvalidArgument(ValidationError::InvalidHeaderValue { .. })
        ));
    }

    #[test]
    fn zero_timeout_config_builds_a_client() {
        let config = ClientConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(ToastSmsClient::new(config).is_ok());
    }

    #[test]
    fn builder_applies_settings() {
        let client = ToastSmsClient::builder()
            .app_key("app")
            .secret_key("secret")
            .send_no("0212345678")
            .host("https://example.invalid")
            .timeout(Duration::from_secs(3))
            .user_agent("toast-sms-tests")
            .build()
            .unwrap();
        assert_eq!(client.app_key, "app");
        assert_eq!(client.send_no, "0212345678");
        assert_eq!(client.base_url.as_str(), "https://example.invalid/");
    }

    #[test]
    fn client_can_be_shared_across_tasks() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<ToastSmsClient>();
    }
}
