//! Manual access to pending transaction accounts
//!
//! Approve, execute and cancel take the transaction as a raw account so
//! that a closed or foreign account is reported as
//! `MalformedTransactionAccount` rather than a generic Anchor error.

use anchor_lang::prelude::*;

use crate::error::MultisigError;
use crate::state::PendingTransaction;

pub fn load<'info>(account: &AccountInfo<'info>) -> Result<PendingTransaction> {
    require_keys_eq!(
        *account.owner,
        crate::ID,
        MultisigError::MalformedTransactionAccount
    );
    let data = account.try_borrow_data()?;
    PendingTransaction::try_deserialize(&mut &data[..])
        .map_err(|_| error!(MultisigError::MalformedTransactionAccount))
}

pub fn store<'info>(account: &AccountInfo<'info>, transaction: &PendingTransaction) -> Result<()> {
    let mut data = account.try_borrow_mut_data()?;
    transaction.try_serialize(&mut &mut data[..])
}

/// Deletes the account, handing its whole storage deposit to `refundee`.
pub fn close<'info>(account: &AccountInfo<'info>, refundee: &AccountInfo<'info>) -> Result<u64> {
    let deposit = account.lamports();
    let refunded = refundee
        .lamports()
        .checked_add(deposit)
        .ok_or(MultisigError::AccountCloseFailure)?;

    **refundee.try_borrow_mut_lamports()? = refunded;
    **account.try_borrow_mut_lamports()? = 0;

    account.assign(&System::id());
    account.resize(0)?;
    Ok(deposit)
}
