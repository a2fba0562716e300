use super::booking::Booking;
use serde::{Deserialize, Serialize};

/// The signed-in user, persisted under the session `user` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl User {
    pub fn has_booked(&self, event_id: i64) -> bool {
        self.bookings.iter().any(|b| b.event_id == event_id)
    }

    pub fn role(&self) -> &'static str {
        if self.is_admin { "admin" } else { "user" }
    }
}
