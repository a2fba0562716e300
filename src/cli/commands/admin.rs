use crate::cli::commands::{event_store, open_pool, session};
use crate::cli::parser::{AdminCommands, EventEditForm, EventForm};
use crate::config::Config;
use crate::core::events::Deletion;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::event::EventDraft;
use crate::ui::messages::{header, info, muted, success, warning};
use crate::utils::date;
use crate::utils::formatting::spots_label;
use crate::utils::table::{Column, Table};
use std::io::{self, Write};

impl From<&EventForm> for EventDraft {
    fn from(form: &EventForm) -> Self {
        Self {
            title: form.title.clone(),
            date: form.date.clone(),
            time: form.time.clone(),
            description: form.description.clone(),
            location: form.location.clone(),
            capacity: form.capacity,
            tags: form.tags.clone(),
            image: form.image.clone(),
        }
    }
}

impl EventEditForm {
    /// Overlay the provided fields on a pre-filled draft.
    pub fn apply_to(&self, draft: &mut EventDraft) {
        if let Some(v) = &self.title {
            draft.title = v.clone();
        }
        if let Some(v) = &self.date {
            draft.date = v.clone();
        }
        if let Some(v) = &self.time {
            draft.time = v.clone();
        }
        if let Some(v) = &self.description {
            draft.description = v.clone();
        }
        if let Some(v) = &self.location {
            draft.location = v.clone();
        }
        if let Some(v) = self.capacity {
            draft.capacity = v;
        }
        if let Some(v) = &self.tags {
            draft.tags = v.clone();
        }
        if let Some(v) = &self.image {
            draft.image = Some(v.clone());
        }
    }
}

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(action: &AdminCommands, cfg: &Config) -> AppResult<()> {
    let pool = open_pool(cfg)?;
    let ctx = session(&pool)?;
    let admin = ctx.require_admin()?;
    let mut store = event_store(&pool, cfg);

    match action {
        AdminCommands::List => {
            let events = store.all_events()?;
            let local_ids: Vec<i64> = store.local_events()?.iter().map(|e| e.id).collect();

            header("Manage events");

            let mut table = Table::new(vec![
                Column::new("ID", 14),
                Column::new("Date", 10),
                Column::new("Title", 32),
                Column::new("Location", 24),
                Column::new("Spots", 16),
                Column::new("Origin", 12),
            ]);

            for ev in &events {
                let origin = match (store.is_seed(ev.id), local_ids.contains(&ev.id)) {
                    (true, true) => "seed, edited",
                    (true, false) => "seed",
                    _ => "local",
                };
                table.add_row(vec![
                    ev.id.to_string(),
                    ev.date_str(),
                    ev.title.clone(),
                    ev.location.clone(),
                    format!("{} / {}", spots_label(ev.spots_left), ev.capacity),
                    origin.to_string(),
                ]);
            }

            if table.is_empty() {
                muted("No events. Create one with `eventbuddy admin create`.");
            } else {
                print!("{}", table.render());
            }
        }

        AdminCommands::Create(form) => {
            let draft = EventDraft::from(form);
            let ev = store.create(&draft, date::now())?;

            success(format!("Event created successfully! (id {})", ev.id));
            ttlog_quiet(
                &pool.conn,
                "create",
                &format!("event {}", ev.id),
                &format!("{} created '{}' on {}", admin.email, ev.title, ev.date_str()),
            );
        }

        AdminCommands::Edit { id, form } => {
            let current = store.find(*id)?;
            let mut draft = EventDraft::from_event(&current);
            form.apply_to(&mut draft);

            let ev = store.update(*id, &draft, date::now())?;

            success(format!("Event updated successfully! (id {})", ev.id));
            if ev.capacity != current.spots_left {
                info(format!("Spots left reset to capacity ({}).", ev.capacity));
            }
            ttlog_quiet(
                &pool.conn,
                "edit",
                &format!("event {}", ev.id),
                &format!("{} edited '{}'", admin.email, ev.title),
            );
        }

        AdminCommands::Delete { id, yes } => {
            let ev = store.find(*id)?;

            let prompt = format!("Delete '{}' ({})? This cannot be undone.", ev.title, ev.id);
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let how = match store.delete(*id)? {
                Deletion::SeedMarked => "seed event hidden",
                Deletion::LocalRemoved => "local event removed",
            };

            success(format!("Deleted '{}' ({}).", ev.title, how));
            ttlog_quiet(
                &pool.conn,
                "delete",
                &format!("event {}", ev.id),
                &format!("{} deleted '{}' ({})", admin.email, ev.title, how),
            );
        }
    }

    Ok(())
}
