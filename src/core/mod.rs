pub mod auth;
pub mod booking;
pub mod browse;
pub mod events;
pub mod log;
pub mod merge;
pub mod session;
