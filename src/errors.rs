//! Unified application error type.
//! All modules (db, store, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Form / input validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Capacity must be at least 1 (got {0})")]
    InvalidCapacity(i64),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid seat count: {0} (choose 1 to 4)")]
    InvalidSeats(u8),

    // ---------------------------
    // Events and bookings
    // ---------------------------
    #[error("Event not found: {0}")]
    EventNotFound(i64),

    #[error("Event {0} is sold out")]
    EventFull(i64),

    #[error("Event {0} is already booked by this user")]
    AlreadyBooked(i64),

    // ---------------------------
    // Session
    // ---------------------------
    #[error("You are not signed in. Run `eventbuddy login` first")]
    NotAuthenticated,

    #[error("This operation requires an admin account")]
    NotAuthorized,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
