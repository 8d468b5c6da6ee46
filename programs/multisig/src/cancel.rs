use anchor_lang::prelude::*;

use crate::error::MultisigError;
use crate::record;
use crate::state::Multisig;

// ---------------------------------------------------------------------------
// Cancel Transaction
// ---------------------------------------------------------------------------
// Any current owner may close a pending transaction, whatever its approval
// count. The epoch is not compared, so transactions stranded by a
// governance change can still be cleaned up.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct CancelTransaction<'info> {
    pub multisig: Account<'info, Multisig>,

    /// CHECK: Deserialized and validated in `cancel`.
    pub transaction: UncheckedAccount<'info>,

    /// CHECK: Receives the transaction account's lamports; any account may be used.
    pub refundee: UncheckedAccount<'info>,

    /// CHECK: Signer status and ownership are checked in `cancel`.
    pub executor: UncheckedAccount<'info>,
}

impl<'info> CancelTransaction<'info> {
    pub fn cancel(&mut self) -> Result<()> {
        let transaction = record::load(&self.transaction)?;

        require!(
            self.executor.is_signer && self.multisig.is_owner(&self.executor.key()),
            MultisigError::InvalidExecutor
        );
        require_keys_eq!(
            transaction.multisig,
            self.multisig.key(),
            MultisigError::InvalidTransactionAccount
        );
        require!(
            self.transaction.is_writable,
            MultisigError::ImmutableTransactionAccount
        );
        require_keys_neq!(
            self.refundee.key(),
            self.transaction.key(),
            MultisigError::InvalidRefundeeAccount
        );
        require!(
            self.refundee.is_writable,
            MultisigError::ImmutableRefundeeAccount
        );

        let deposit = record::close(&self.transaction, &self.refundee)?;

        msg!(
            "Transaction {} cancelled by {} with {} approval(s), {} lamports refunded to {}",
            self.transaction.key(),
            self.executor.key(),
            transaction.approval_count(),
            deposit,
            self.refundee.key()
        );
        Ok(())
    }
}
