use crate::cli::commands::{open_pool, session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle_login(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let pool = open_pool(cfg)?;
        let mut ctx = session(&pool)?;

        let user = ctx.login(email, password)?;
        success(format!("Welcome, {}!", user.name));
        if user.is_admin {
            info("Signed in as administrator. Try `eventbuddy admin list`.");
        } else {
            info("Browse with `eventbuddy list`, then `eventbuddy book <ID>`.");
        }

        let target = format!("{} ({})", user.email, user.role());
        ttlog_quiet(&pool.conn, "login", &target, "Signed in");
    }
    Ok(())
}

pub fn handle_logout(cfg: &Config) -> AppResult<()> {
    let pool = open_pool(cfg)?;
    let mut ctx = session(&pool)?;

    match ctx.logout()? {
        Some(user) => {
            success(format!("Goodbye, {}.", user.name));
            ttlog_quiet(&pool.conn, "logout", &user.email, "Signed out");
        }
        None => info("Nobody is signed in."),
    }
    Ok(())
}

pub fn handle_whoami(cfg: &Config) -> AppResult<()> {
    let pool = open_pool(cfg)?;
    let ctx = session(&pool)?;

    match ctx.current_user() {
        Some(user) => {
            println!("👤 {} <{}>", user.name, user.email);
            println!("   role     : {}", user.role());
            println!("   bookings : {}", user.bookings.len());
        }
        None => info("Not signed in."),
    }
    Ok(())
}
