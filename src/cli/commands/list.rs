use crate::cli::commands::{event_store, open_pool, session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::browse::{Page, paginate, partition, search};
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::ui::messages::{header, info, muted};
use crate::utils::formatting::spots_label;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search: query,
        page,
        past_page,
    } = cmd
    {
        let pool = open_pool(cfg)?;
        let store = event_store(&pool, cfg);
        let ctx = session(&pool)?;

        let events = store.all_events()?;
        let query = query.as_deref().unwrap_or("");
        let matched = search(&events, query);
        let (upcoming, previous) = partition(&matched);

        if let Some(user) = ctx.current_user() {
            muted(format!("Signed in as {} ({})", user.name, user.email));
        }

        if !query.trim().is_empty() {
            info(format!(
                "Found {} upcoming and {} previous events matching \"{}\"",
                upcoming.len(),
                previous.len(),
                query
            ));
        }

        header("Upcoming events");
        print_page(
            &paginate(&upcoming, *page, cfg.page_size),
            |ev| {
                if ctx.has_booked(ev.id) {
                    "Booked".to_string()
                } else {
                    spots_label(ev.spots_left)
                }
            },
            "--page",
        );

        header("Previous events");
        print_page(
            &paginate(&previous, *past_page, cfg.page_size),
            |_| "Ended".to_string(),
            "--past-page",
        );
    }
    Ok(())
}

fn print_page<F>(page: &Page<'_, &Event>, status: F, flag: &str)
where
    F: Fn(&Event) -> String,
{
    if page.items.is_empty() {
        muted("No events.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 14),
        Column::new("Date", 10),
        Column::new("Time", 22),
        Column::new("Title", 32),
        Column::new("Location", 24),
        Column::new("Status", 16),
    ]);

    for ev in page.items {
        table.add_row(vec![
            ev.id.to_string(),
            ev.date_str(),
            ev.time.clone(),
            ev.title.clone(),
            ev.location.clone(),
            status(*ev),
        ]);
    }

    print!("{}", table.render());

    if page.total_pages > 1 {
        let mut nav = format!("Page {} of {}", page.page, page.total_pages);
        if page.has_prev() {
            nav.push_str(&format!(" · previous: {} {}", flag, page.page - 1));
        }
        if page.has_next() {
            nav.push_str(&format!(" · next: {} {}", flag, page.page + 1));
        }
        muted(nav);
    }
}
