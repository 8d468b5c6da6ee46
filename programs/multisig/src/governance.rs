//! Owner set and threshold changes
//!
//! These handlers only accept the multisig signer PDA as authority, which
//! can sign solely through `execute_transaction`. Every change therefore
//! goes through the same propose/approve/execute quorum as any transfer.

use anchor_lang::prelude::*;

use crate::state::Multisig;

#[derive(Accounts)]
pub struct Govern<'info> {
    #[account(mut)]
    pub multisig: Account<'info, Multisig>,

    /// Any other signer, including an owner's own key, fails the seeds check.
    #[account(
        seeds = [multisig.key().as_ref()],
        bump = multisig.nonce
    )]
    pub multisig_signer: Signer<'info>,
}

impl<'info> Govern<'info> {
    /// Owner slots available in the account as allocated at creation.
    fn owner_capacity(&self) -> usize {
        Multisig::owner_capacity(self.multisig.to_account_info().data_len())
    }

    pub fn set_owners(&mut self, owners: Vec<Pubkey>) -> Result<()> {
        let capacity = self.owner_capacity();
        self.multisig.set_owners(owners, capacity)?;
        self.log_change();
        Ok(())
    }

    pub fn change_threshold(&mut self, threshold: u8) -> Result<()> {
        self.multisig.change_threshold(threshold)?;
        self.log_change();
        Ok(())
    }

    pub fn set_owners_and_change_threshold(
        &mut self,
        owners: Vec<Pubkey>,
        threshold: u8,
    ) -> Result<()> {
        let capacity = self.owner_capacity();
        self.multisig.set_owners_and_change_threshold(owners, threshold, capacity)?;
        self.log_change();
        Ok(())
    }

    fn log_change(&self) {
        msg!(
            "Multisig {} now {} of {} owners, owner set seqno {}",
            self.multisig.key(),
            self.multisig.threshold,
            self.multisig.owners.len(),
            self.multisig.owner_set_seqno
        );
    }
}
