use crate::cli::commands::{event_store, open_pool, session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportTarget};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        bookings,
        force,
    } = cmd
    {
        let pool = open_pool(cfg)?;
        let path = expand_tilde(file);

        let written = if *bookings {
            let ctx = session(&pool)?;
            let user = ctx.require_user()?;
            ExportLogic::export(ExportTarget::Bookings(&user.bookings), *format, &path, *force)?
        } else {
            let events = event_store(&pool, cfg).all_events()?;
            ExportLogic::export(ExportTarget::Events(&events), *format, &path, *force)?
        };

        if written > 0 {
            ttlog_quiet(
                &pool.conn,
                "export",
                format.as_str(),
                &format!("{} rows → {}", written, path.display()),
            );
        }
    }
    Ok(())
}
