use crate::cli::commands::{open_pool, session};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, muted};
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = open_pool(cfg)?;
    let ctx = session(&pool)?;
    let user = ctx.require_user()?;

    header(format!("{}'s bookings", user.name));

    if user.bookings.is_empty() {
        muted("You have no bookings yet. Browse events with `eventbuddy list`.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Event", 14),
        Column::new("Title", 32),
        Column::new("Date", 10),
        Column::new("Location", 24),
        Column::new("Booked on", 12),
    ]);

    for b in &user.bookings {
        table.add_row(vec![
            b.event_id.to_string(),
            b.event_title.clone(),
            b.event_date.clone(),
            b.event_location.clone(),
            b.booking_date.clone(),
        ]);
    }

    print!("{}", table.render());
    muted(format!("{} booking(s)", user.bookings.len()));
    Ok(())
}
