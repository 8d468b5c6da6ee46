use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke_signed;

use crate::error::MultisigError;
use crate::record;
use crate::state::Multisig;

// ---------------------------------------------------------------------------
// Execute Transaction
// ---------------------------------------------------------------------------
// Runs every stored instruction with the multisig signer PDA signing, then
// closes the transaction account. A failing instruction fails the whole
// execution, so the runtime discards all effects and the account survives.
//
// `multisig` must not be `mut`: governance instructions rewrite it through
// CPI, and Anchor would serialize the stale copy back on exit.
// Accounts referenced by the instructions are passed as remaining accounts.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct ExecuteTransaction<'info> {
    pub multisig: Account<'info, Multisig>,

    /// CHECK: PDA signer of the multisig, verified by seeds.
    #[account(
        seeds = [multisig.key().as_ref()],
        bump = multisig.nonce
    )]
    pub multisig_signer: UncheckedAccount<'info>,

    /// CHECK: Deserialized and validated in `execute`.
    pub transaction: UncheckedAccount<'info>,

    /// CHECK: Receives the transaction account's lamports; any account may be used.
    pub refundee: UncheckedAccount<'info>,

    /// CHECK: Signer status and ownership are checked in `execute`.
    pub executor: UncheckedAccount<'info>,
}

impl<'info> ExecuteTransaction<'info> {
    pub fn execute(&mut self, remaining_accounts: &[AccountInfo<'info>]) -> Result<()> {
        let transaction = record::load(&self.transaction)?;

        require!(
            self.executor.is_signer && self.multisig.is_owner(&self.executor.key()),
            MultisigError::InvalidExecutor
        );
        require!(
            self.transaction.is_writable,
            MultisigError::ImmutableTransactionAccount
        );
        require_keys_eq!(
            transaction.multisig,
            self.multisig.key(),
            MultisigError::InvalidTransactionAccount
        );
        require!(
            transaction.is_current(&self.multisig),
            MultisigError::InvalidOwnerSetSequenceNumber
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
        require!(
            transaction.has_quorum(self.multisig.threshold),
            MultisigError::NotEnoughSigners
        );

        let multisig_key = self.multisig.key();
        let multisig_signer_key = self.multisig_signer.key();
        let nonce = [self.multisig.nonce];
        let signer_seeds: &[&[u8]] = &[multisig_key.as_ref(), &nonce];

        let mut account_infos = remaining_accounts.to_vec();
        account_infos.push(self.multisig.to_account_info());
        account_infos.push(self.multisig_signer.to_account_info());

        for ix in transaction.instructions.iter() {
            invoke_signed(
                &ix.to_instruction(&multisig_signer_key),
                &account_infos,
                &[signer_seeds],
            )?;
        }

        let deposit = record::close(&self.transaction, &self.refundee)?;

        msg!(
            "Transaction {} executed by {} with {}/{} approvals, {} lamports refunded to {}",
            self.transaction.key(),
            self.executor.key(),
            transaction.approval_count(),
            self.multisig.threshold,
            deposit,
            self.refundee.key()
        );
        Ok(())
    }
}
