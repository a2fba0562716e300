pub mod admin;
pub mod book;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod login;
pub mod show;

use crate::config::Config;
use crate::core::events::EventStore;
use crate::core::session::SessionContext;
use crate::db::initialize::init_db;
use crate::db::kv::SqliteStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::seed::seed_events;

/// Open the configured database, creating missing tables on the way.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

pub(crate) fn event_store<'c>(pool: &'c DbPool, cfg: &Config) -> EventStore<SqliteStore<'c>> {
    EventStore::new(pool.local_store(), seed_events()).with_default_image(&cfg.default_image)
}

pub(crate) fn session(pool: &DbPool) -> AppResult<SessionContext<SqliteStore<'_>>> {
    SessionContext::restore(pool.session_store())
}
