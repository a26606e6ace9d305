use shared::{
    domain::RosterStatus,
    error::{ApiError, ErrorCode},
};
use thiserror::Error;

use crate::partition::PartitionError;

/// Why a roll cannot run yet. Each cause has its own message so the caller
/// can tell the user what to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollBlock {
    #[error("set a group size first")]
    SizeUnset,
    #[error("group size {size} exceeds the {selected} selected members")]
    SizeExceedsSelected { size: usize, selected: usize },
}

impl RollBlock {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SizeUnset => ErrorCode::GroupSizeUnset,
            Self::SizeExceedsSelected { .. } => ErrorCode::GroupSizeTooLarge,
        }
    }
}

impl From<PartitionError> for RollBlock {
    fn from(value: PartitionError) -> Self {
        match value {
            PartitionError::ZeroGroupSize => Self::SizeUnset,
            PartitionError::SizeExceedsMembers { size, available } => Self::SizeExceedsSelected {
                size,
                selected: available,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouletteError {
    #[error("roster is not available: {0:?}")]
    RosterUnavailable(RosterStatus),
    #[error("roll blocked: {0}")]
    Blocked(#[from] RollBlock),
}

impl From<PartitionError> for RouletteError {
    fn from(value: PartitionError) -> Self {
        Self::Blocked(value.into())
    }
}

impl From<&RouletteError> for ApiError {
    fn from(value: &RouletteError) -> Self {
        match value {
            RouletteError::RosterUnavailable(_) => {
                ApiError::new(ErrorCode::RosterUnavailable, value.to_string())
            }
            RouletteError::Blocked(block) => ApiError::new(block.code(), block.to_string()),
        }
    }
}
