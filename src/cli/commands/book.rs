use crate::cli::commands::{event_store, open_pool, session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::BookingLogic;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{muted, ticket};
use crate::utils::date;
use crate::utils::formatting::seats_label;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Book { id, seats } = cmd {
        let pool = open_pool(cfg)?;
        let store = event_store(&pool, cfg);
        let mut ctx = session(&pool)?;

        // Signed-out users are sent to login before the event is even looked up.
        ctx.require_user()?;
        let event = store.find(*id)?;

        let booking = BookingLogic::apply(
            &mut ctx,
            &event,
            *seats,
            date::today(),
            &cfg.booking_date_format,
        )?;

        ticket(format!(
            "Booked {} for {}!",
            booking.event_title,
            seats_label(*seats)
        ));
        muted("See your bookings with `eventbuddy dashboard`.");

        let email = ctx
            .current_user()
            .map(|u| u.email.clone())
            .unwrap_or_default();
        ttlog_quiet(
            &pool.conn,
            "book",
            &format!("event {}", event.id),
            &format!("{} booked '{}' ({})", email, event.title, seats_label(*seats)),
        );
    }
    Ok(())
}
