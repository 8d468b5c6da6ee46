//! Owner set and threshold rules
//!
//! Pure functions over owner lists. They know nothing about accounts, so
//! the same checks back account creation, governance changes and the
//! approval bitmap lookups.

use anchor_lang::prelude::*;

use crate::error::MultisigError;

/// Validates a complete owner set together with its threshold.
///
/// The threshold is checked first: an empty owner list can never satisfy
/// `1 <= threshold <= owners.len()`.
pub fn validate(owners: &[Pubkey], threshold: u8) -> Result<()> {
    validate_threshold(threshold, owners.len())?;
    assert_unique(owners)
}

pub fn validate_threshold(threshold: u8, owner_count: usize) -> Result<()> {
    require!(
        threshold > 0 && usize::from(threshold) <= owner_count,
        MultisigError::InvalidThreshold
    );
    Ok(())
}

/// Validates a replacement owner list against the account's owner capacity.
pub fn validate_new_owners(owners: &[Pubkey], capacity: usize) -> Result<()> {
    assert_unique(owners)?;
    require!(!owners.is_empty(), MultisigError::NotEnoughOwners);
    // Growing past the allocated size would need a reallocation, and the
    // multisig signer that runs governance cannot pay for it.
    require!(owners.len() <= capacity, MultisigError::TooManyOwners);
    Ok(())
}

pub fn assert_unique(owners: &[Pubkey]) -> Result<()> {
    for (i, owner) in owners.iter().enumerate() {
        require!(
            !owners[i + 1..].contains(owner),
            MultisigError::UniqueOwners
        );
    }
    Ok(())
}

/// Position of `key` in the owner list, i.e. its slot in an approval bitmap.
pub fn index_of(owners: &[Pubkey], key: &Pubkey) -> Result<usize> {
    owners
        .iter()
        .position(|owner| owner == key)
        .ok_or_else(|| error!(MultisigError::InvalidOwner))
}

/// Threshold after replacing the owner list: clamped down, never raised.
pub fn clamp_threshold(threshold: u8, owner_count: usize) -> u8 {
    u8::try_from(owner_count).map_or(threshold, |count| threshold.min(count))
}
