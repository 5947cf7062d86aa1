//! Typed Rust client for the Toast (NHN Cloud) SMS HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for the
//! JSON wire format, and a small client layer that issues requests and normalizes the
//! gateway's `header`/`body` response envelope.
//!
//! ```rust,no_run
//! use toast_sms::{Recipient, RecipientNo, SendOptions, TemplateId, ToastSmsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ToastSmsClient::builder()
//!         .app_key("...")
//!         .secret_key("...")
//!         .send_no("0212345678")
//!         .build()?;
//!     let recipient = Recipient::new(RecipientNo::new("01012345678")?)
//!         .with_template_parameter("name", "Kim");
//!     let template_id = TemplateId::new("WELCOME")?;
//!     let data = client
//!         .send_templated_sms(template_id, vec![recipient], SendOptions::default())
//!         .await?;
//!     println!("{data}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ClientConfig, HttpStatusError, ToastSmsClient, ToastSmsClientBuilder, ToastSmsError,
};
pub use domain::{
    CancelReservations, Channel, Content, MessageBody, MessageTitle, Recipient, RecipientList,
    RecipientNo, RequestId, Reservation, ReservationList, ResponseHeader, ResultCode, SendData,
    SendMessage, SendOptions, SendResult, TemplateId, UpdateUser, ValidationError,
};
