use crate::{Identity, mint_code_token};

use serde::{Deserialize, Serialize};

/// Invite code. `user` is `None` until claimed, then fixed forever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    pub id: String,
    pub creator: Identity,
    pub user: Option<Identity>,
}

impl Code {
    pub fn new(creator: Identity) -> Self {
        Self {
            id: mint_code_token(),
            creator,
            user: None,
        }
    }

    /// The two codes handed out per phone submission, with distinct ids
    pub fn mint_pair(creator: &Identity) -> [Code; 2] {
        let first = Code::new(creator.clone());
        let mut second = Code::new(creator.clone());
        while second.id == first.id {
            second = Code::new(creator.clone());
        }
        [first, second]
    }

    pub fn is_claimed(&self) -> bool {
        self.user.is_some()
    }
}
