use crate::{Identity, PhoneNumber};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Identity,
    pub phone: PhoneNumber,
}

impl User {
    pub fn new(id: Identity, phone: PhoneNumber) -> Self {
        Self { id, phone }
    }
}
