//! Session user data.

use serde::{Deserialize, Serialize};

/// The authenticated user's profile as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}
