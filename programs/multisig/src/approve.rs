use anchor_lang::prelude::*;

use crate::error::MultisigError;
use crate::record;
use crate::state::Multisig;

// ---------------------------------------------------------------------------
// Approve Transaction
// ---------------------------------------------------------------------------
// Sets the approver's slot in the approval bitmap. Approving twice is a
// no-op, so repeated approvals never count twice towards the threshold.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct ApproveTransaction<'info> {
    pub multisig: Account<'info, Multisig>,

    /// CHECK: Deserialized and validated in `approve`.
    pub transaction: UncheckedAccount<'info>,

    /// CHECK: Signer status and ownership are checked in `approve`.
    pub approver: UncheckedAccount<'info>,
}

impl<'info> ApproveTransaction<'info> {
    pub fn approve(&mut self) -> Result<()> {
        let mut transaction = record::load(&self.transaction)?;

        require_keys_eq!(
            transaction.multisig,
            self.multisig.key(),
            MultisigError::InvalidTransactionAccount
        );
        require!(self.approver.is_signer, MultisigError::ApproverNotSigner);
        let owner_index = self.multisig.owner_index(&self.approver.key())?;
        require!(
            self.transaction.is_writable,
            MultisigError::ImmutableTransactionAccount
        );
        require!(
            transaction.is_current(&self.multisig),
            MultisigError::InvalidOwnerSetSequenceNumber
        );

        if transaction.approve(owner_index)? {
            record::store(&self.transaction, &transaction)?;
            msg!(
                "Transaction {} approved by {} ({}/{})",
                self.transaction.key(),
                self.approver.key(),
                transaction.approval_count(),
                self.multisig.threshold
            );
        } else {
            msg!(
                "Transaction {} already approved by {}",
                self.transaction.key(),
                self.approver.key()
            );
        }
        Ok(())
    }
}
