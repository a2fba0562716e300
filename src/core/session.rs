use crate::core::auth;
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::user::User;
use crate::store::{KeyValueStore, USER_KEY, read_json, write_json};

/// Signed-in state, passed explicitly to every operation that needs it.
///
/// `restore` is the init step (reads the session `user` key) and `logout`
/// the teardown (clears it). Every mutation is written through immediately.
pub struct SessionContext<S: KeyValueStore> {
    store: S,
    user: Option<User>,
}

impl<S: KeyValueStore> SessionContext<S> {
    /// Resume a previous session if one is stored. A malformed record is
    /// treated as signed out.
    pub fn restore(store: S) -> AppResult<Self> {
        let user = read_json(&store, USER_KEY)?;
        Ok(Self { store, user })
    }

    pub fn login(&mut self, email: &str, password: &str) -> AppResult<&User> {
        let user = auth::authenticate(email, password);
        write_json(&mut self.store, USER_KEY, &user)?;
        let user: &User = self.user.insert(user);
        Ok(user)
    }

    pub fn logout(&mut self) -> AppResult<Option<User>> {
        self.store.remove(USER_KEY)?;
        Ok(self.user.take())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    pub fn has_booked(&self, event_id: i64) -> bool {
        self.user.as_ref().is_some_and(|u| u.has_booked(event_id))
    }

    pub fn require_user(&self) -> AppResult<&User> {
        self.user.as_ref().ok_or(AppError::NotAuthenticated)
    }

    pub fn require_admin(&self) -> AppResult<&User> {
        let user = self.require_user()?;
        if !user.is_admin {
            return Err(AppError::NotAuthorized);
        }
        Ok(user)
    }

    /// Append a booking and persist the user. Without a user this is a
    /// no-op.
    pub fn add_booking(&mut self, booking: Booking) -> AppResult<()> {
        if let Some(user) = self.user.as_mut() {
            user.bookings.push(booking);
            write_json(&mut self.store, USER_KEY, user)?;
        }
        Ok(())
    }
}
