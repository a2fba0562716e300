//! Mock sign-in: no credential store, no hashing. Any pair is accepted and
//! only the hardcoded admin pair grants the admin role.

use crate::models::user::User;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";

pub fn is_admin_credentials(email: &str, password: &str) -> bool {
    email == ADMIN_EMAIL && password == ADMIN_PASSWORD
}

/// Build the user record for a submitted email/password pair.
pub fn authenticate(email: &str, password: &str) -> User {
    let is_admin = is_admin_credentials(email, password);

    User {
        id: if is_admin { "admin1" } else { "user1" }.to_string(),
        email: email.to_string(),
        name: if is_admin { "Admin User" } else { "Regular User" }.to_string(),
        is_admin,
        bookings: Vec::new(),
    }
}
