use invite_core::User;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub phone: String,
    pub id: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            phone: user.phone.as_str().to_string(),
            id: user.id.into_inner(),
        }
    }
}
