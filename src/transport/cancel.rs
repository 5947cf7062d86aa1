use serde_json::{Map, Value};

use super::TransportError;
use crate::domain::{CancelReservations, ReservationList, UpdateUser};

pub fn encode_cancel_body(
    request: &CancelReservations,
) -> Result<Map<String, Value>, TransportError> {
    let mut body = Map::new();
    body.insert(
        ReservationList::FIELD.to_owned(),
        serde_json::to_value(request.reservations())?,
    );
    body.insert(
        UpdateUser::FIELD.to_owned(),
        Value::String(request.update_user().as_str().to_owned()),
    );
    Ok(body)
}
