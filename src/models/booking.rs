use super::event::Event;
use serde::{Deserialize, Serialize};

/// A booking owned by a user. Event fields are copied at booking time and
/// never synced afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub event_id: i64,
    pub event_title: String,
    pub event_date: String,
    pub event_location: String,
    pub booking_date: String,
}

impl Booking {
    pub fn for_event(ev: &Event, booking_date: String) -> Self {
        Self {
            event_id: ev.id,
            event_title: ev.title.clone(),
            event_date: ev.date_str(),
            event_location: ev.location.clone(),
            booking_date,
        }
    }
}
