pub mod booking;
pub mod event;
pub mod seed;
pub mod user;
