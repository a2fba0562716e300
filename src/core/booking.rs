use crate::core::session::SessionContext;
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::event::Event;
use crate::store::KeyValueStore;
use crate::utils::date::format_date;
use chrono::NaiveDate;

pub const MIN_SEATS: u8 = 1;
pub const MAX_SEATS: u8 = 4;

/// High-level business logic for the `book` command.
pub struct BookingLogic;

impl BookingLogic {
    /// Book `event` for the signed-in user.
    ///
    /// The seat count is only validated; bookings do not record it. The
    /// event's `spotsLeft` is left untouched.
    pub fn apply<S: KeyValueStore>(
        session: &mut SessionContext<S>,
        event: &Event,
        seats: u8,
        today: NaiveDate,
        date_format: &str,
    ) -> AppResult<Booking> {
        if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
            return Err(AppError::InvalidSeats(seats));
        }

        session.require_user()?;

        if event.is_sold_out() {
            return Err(AppError::EventFull(event.id));
        }
        if session.has_booked(event.id) {
            return Err(AppError::AlreadyBooked(event.id));
        }

        let booking = Booking::for_event(event, format_date(today, date_format)?);
        session.add_booking(booking.clone())?;
        Ok(booking)
    }
}
