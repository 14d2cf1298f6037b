use crate::ClaimOutcome;

use serde::{Deserialize, Serialize};

/// Tri-state access flag gating the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    /// Not known yet (loading, or mid login handoff)
    #[default]
    Unset,
    Granted,
    Denied,
}

impl Access {
    pub fn as_option(&self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::Granted => Some(true),
            Self::Denied => Some(false),
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }
}

impl From<bool> for Access {
    fn from(granted: bool) -> Self {
        if granted { Self::Granted } else { Self::Denied }
    }
}

impl From<Option<bool>> for Access {
    fn from(value: Option<bool>) -> Self {
        value.map(Access::from).unwrap_or_default()
    }
}

impl From<ClaimOutcome> for Access {
    fn from(outcome: ClaimOutcome) -> Self {
        Access::from(outcome.is_claimed())
    }
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
