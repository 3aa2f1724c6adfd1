//! Authentication module
//!
//! Salted PBKDF2 credential hashing, the in-process session store, and the
//! login gate that fronts every protected route.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod session;

pub use middleware::AuthUser;
pub use session::SessionStore;
