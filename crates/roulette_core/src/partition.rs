//! Random, balanced grouping.
//!
//! A roll is a uniform shuffle followed by a deterministic slicing of the
//! shuffled order into `ceil(len / group_size)` contiguous chunks whose sizes
//! differ by at most one.

use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("group size must be greater than zero")]
    ZeroGroupSize,
    #[error("group size {size} exceeds the {available} available members")]
    SizeExceedsMembers { size: usize, available: usize },
}

pub fn check_group_size(len: usize, group_size: usize) -> Result<(), PartitionError> {
    if group_size == 0 {
        return Err(PartitionError::ZeroGroupSize);
    }
    if group_size > len {
        return Err(PartitionError::SizeExceedsMembers {
            size: group_size,
            available: len,
        });
    }
    Ok(())
}

/// Chunk lengths for `len` members at `group_size`: the first `len % count`
/// chunks carry one extra member.
pub fn balanced_sizes(len: usize, group_size: usize) -> Result<Vec<usize>, PartitionError> {
    check_group_size(len, group_size)?;
    let count = len.div_ceil(group_size);
    let base = len / count;
    let extra = len % count;
    Ok((0..count).map(|i| base + usize::from(i < extra)).collect())
}

pub fn partition<T: Clone>(members: &[T], group_size: usize) -> Result<Vec<Vec<T>>, PartitionError> {
    let sizes = balanced_sizes(members.len(), group_size)?;
    let mut rest = members;
    let mut groups = Vec::with_capacity(sizes.len());
    for size in sizes {
        let (chunk, tail) = rest.split_at(size);
        groups.push(chunk.to_vec());
        rest = tail;
    }
    debug_assert!(rest.is_empty());
    Ok(groups)
}

/// Returns a uniformly shuffled copy; `members` itself is left untouched.
pub fn shuffle<T: Clone>(members: &[T]) -> Vec<T> {
    shuffle_with(members, &mut rand::thread_rng())
}

pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(members: &[T], rng: &mut R) -> Vec<T> {
    let mut out = members.to_vec();
    out.shuffle(rng);
    out
}

pub fn roll<T: Clone>(members: &[T], group_size: usize) -> Result<Vec<Vec<T>>, PartitionError> {
    roll_with(members, group_size, &mut rand::thread_rng())
}

pub fn roll_with<T: Clone, R: Rng + ?Sized>(
    members: &[T],
    group_size: usize,
    rng: &mut R,
) -> Result<Vec<Vec<T>>, PartitionError> {
    check_group_size(members.len(), group_size)?;
    partition(&shuffle_with(members, rng), group_size)
}
