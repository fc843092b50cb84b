//! Append-only collections with a fixed maximum length.
use std::ops::Deref;

use crate::wire::constants::MAX_BLOCK_LOCATORS_PER_MSG;
use crate::wire::error::{Result, WireError};
use crate::wire::hash::BlockHash;

/// An append-only list that never grows beyond `MAX` elements.
///
/// There is no mutable access to the backing storage: elements only enter
/// through [`BoundedVec::push`], which rejects the element once the list is
/// full. Decoders use [`BoundedVec::check_count`] on the announced count
/// before reading any element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedVec<T, const MAX: usize> {
    what: &'static str,
    items: Vec<T>,
}

/// Locator hashes carried by `getheaders` and `getblocks`, newest first.
pub type BlockLocator = BoundedVec<BlockHash, MAX_BLOCK_LOCATORS_PER_MSG>;

impl<T, const MAX: usize> BoundedVec<T, MAX> {
    /// `what` names the collection in [`WireError::LimitExceeded`].
    pub const fn new(what: &'static str) -> Self {
        Self {
            what,
            items: Vec::new(),
        }
    }

    pub const fn max_len(&self) -> usize {
        MAX
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX
    }

    /// Appends `item`, or fails with `LimitExceeded` leaving the list as it was.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(self.limit_exceeded(self.items.len() as u64 + 1));
        }
        self.items.push(item);
        Ok(())
    }

    /// Validates an announced element count against `MAX`.
    pub fn check_count(&self, count: u64) -> Result<usize> {
        if count > MAX as u64 {
            return Err(self.limit_exceeded(count));
        }
        Ok(count as usize)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    /// Reserves room for `count` more elements, which must already have
    /// passed [`BoundedVec::check_count`].
    pub(crate) fn reserve(&mut self, count: usize) {
        self.items
            .reserve(count.min(MAX.saturating_sub(self.items.len())));
    }

    fn limit_exceeded(&self, count: u64) -> WireError {
        WireError::LimitExceeded {
            what: self.what,
            count,
            max: MAX,
        }
    }
}

impl BlockLocator {
    pub const fn locator() -> Self {
        Self::new("block locator hashes")
    }
}

impl Default for BlockLocator {
    fn default() -> Self {
        Self::locator()
    }
}

impl<T, const MAX: usize> Deref for BoundedVec<T, MAX> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T, const MAX: usize> IntoIterator for &'a BoundedVec<T, MAX> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_insertion_order() {
        let mut list: BoundedVec<u8, 3> = BoundedVec::new("bytes");
        list.push(3).unwrap();
        list.push(1).unwrap();
        list.push(2).unwrap();
        assert_eq!(list.as_slice(), &[3, 1, 2]);
    }

    #[test]
    fn push_past_max_fails_and_leaves_list_unchanged() {
        let mut list: BoundedVec<u8, 2> = BoundedVec::new("bytes");
        list.push(1).unwrap();
        list.push(2).unwrap();

        let err = list.push(3).unwrap_err();
        assert!(matches!(
            err,
            WireError::LimitExceeded {
                what: "bytes",
                count: 3,
                max: 2
            }
        ));
        assert_eq!(list.as_slice(), &[1, 2]);
    }

    #[test]
    fn locator_holds_exactly_max_hashes() {
        let mut locator = BlockLocator::default();
        for i in 0..MAX_BLOCK_LOCATORS_PER_MSG {
            let mut wire = [0u8; 32];
            wire[..8].copy_from_slice(&(i as u64).to_le_bytes());
            locator.push(BlockHash::from_wire_bytes(wire)).unwrap();
        }
        assert!(locator.is_full());

        assert!(matches!(
            locator.push(BlockHash::ZERO),
            Err(WireError::LimitExceeded { max: 500, .. })
        ));
        assert_eq!(locator.len(), MAX_BLOCK_LOCATORS_PER_MSG);
    }

    #[test]
    fn check_count_rejects_announced_overflow() {
        let locator = BlockLocator::default();
        assert_eq!(locator.check_count(500).unwrap(), 500);
        assert!(locator.check_count(501).is_err());
        assert!(locator.check_count(u64::MAX).is_err());
    }
}
