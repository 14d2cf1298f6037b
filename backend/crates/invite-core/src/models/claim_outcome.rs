use serde::{Deserialize, Serialize};

/// Result of the compare-and-set on `codes.user`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimOutcome {
    /// Exactly one row moved from unclaimed to the caller
    Claimed,
    /// Unknown id, or someone else got there first
    Unavailable,
}

impl ClaimOutcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows == 1 {
            Self::Claimed
        } else {
            Self::Unavailable
        }
    }

    pub fn is_claimed(&self) -> bool {
        matches!(self, Self::Claimed)
    }
}

impl From<bool> for ClaimOutcome {
    fn from(claimed: bool) -> Self {
        if claimed { Self::Claimed } else { Self::Unavailable }
    }
}
