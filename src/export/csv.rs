use crate::errors::AppResult;
use crate::models::booking::Booking;
use crate::models::event::Event;
use csv::Writer;
use std::path::Path;

pub fn write_events_csv(path: &Path, events: &[Event]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "title",
        "date",
        "time",
        "location",
        "capacity",
        "spots_left",
        "tags",
        "is_past",
    ])?;

    for ev in events {
        wtr.write_record(&[
            ev.id.to_string(),
            ev.title.clone(),
            ev.date_str(),
            ev.time.clone(),
            ev.location.clone(),
            ev.capacity.to_string(),
            ev.spots_left.to_string(),
            ev.tags.join(";"),
            ev.is_past.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_bookings_csv(path: &Path, bookings: &[Booking]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "event_id",
        "event_title",
        "event_date",
        "event_location",
        "booking_date",
    ])?;

    for b in bookings {
        wtr.write_record(&[
            b.event_id.to_string(),
            b.event_title.clone(),
            b.event_date.clone(),
            b.event_location.clone(),
            b.booking_date.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
