use std::fmt;

use crate::error::BstError;

/// What happened to a key passed to [`Bst::add`](crate::Bst::add).
///
/// Converts to and from the integer result code: `1` for a new key, `0` for a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddOutcome {
    AlreadyPresent,
    Inserted,
}

impl AddOutcome {
    pub fn code(self) -> i32 {
        match self {
            AddOutcome::AlreadyPresent => 0,
            AddOutcome::Inserted => 1,
        }
    }

    pub fn is_inserted(self) -> bool {
        self == AddOutcome::Inserted
    }
}

impl From<AddOutcome> for i32 {
    fn from(outcome: AddOutcome) -> i32 {
        outcome.code()
    }
}

impl TryFrom<i32> for AddOutcome {
    type Error = BstError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AddOutcome::AlreadyPresent),
            1 => Ok(AddOutcome::Inserted),
            other => Err(BstError::InvalidResultCode(other)),
        }
    }
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddOutcome::AlreadyPresent => write!(f, "already present"),
            AddOutcome::Inserted => write!(f, "inserted"),
        }
    }
}
