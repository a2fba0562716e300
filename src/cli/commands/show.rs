use crate::cli::commands::{event_store, open_pool, session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::muted;
use crate::utils::date::long_date;
use crate::utils::formatting::{bold, italic, spots_label};

const WRAP_WIDTH: usize = 72;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = open_pool(cfg)?;
        let store = event_store(&pool, cfg);
        let ctx = session(&pool)?;

        let ev = store.find(*id)?;

        println!("{}", bold(&ev.title));
        println!("📅 {}  🕒 {}", long_date(ev.date), ev.time);
        println!("📍 {}", ev.location);
        if !ev.tags.is_empty() {
            println!("🏷  {}", italic(&ev.tags_joined()));
        }
        println!();

        for line in textwrap::wrap(&ev.description, WRAP_WIDTH) {
            println!("{}", line);
        }
        println!();

        println!(
            "🎟 {} (capacity {})",
            spots_label(ev.spots_left),
            ev.capacity
        );

        if ev.is_past {
            muted("This event has ended.");
        }

        if ctx.has_booked(ev.id) {
            muted("Already booked.");
        } else if ev.is_sold_out() {
            muted("Booking closed: no spots left.");
        } else if ctx.is_authenticated() {
            muted(format!("Book with `eventbuddy book {} --seats N`", ev.id));
        } else {
            muted("Sign in with `eventbuddy login` to book.");
        }
    }
    Ok(())
}
