//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CancelReservations, Channel, Content, Recipient, RecipientList, Reservation,
    ReservationList, SendMessage, SendOptions,
};
pub use response::{ResponseHeader, ResultCode, SendData, SendResult};
pub use validation::ValidationError;
pub use value::{MessageBody, MessageTitle, RecipientNo, RequestId, TemplateId, UpdateUser};
