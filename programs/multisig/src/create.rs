use anchor_lang::prelude::*;

use crate::owners;
use crate::state::Multisig;

// ---------------------------------------------------------------------------
// Create Multisig
// ---------------------------------------------------------------------------
// The multisig account is a fresh keypair account sized for its initial
// owners. Its signer is the PDA `[multisig.key()]` with bump `nonce`; a
// nonce that does not derive a valid address fails the seeds constraint.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
#[instruction(owners: Vec<Pubkey>, threshold: u8, nonce: u8)]
pub struct CreateMultisig<'info> {
    #[account(
        init,
        payer = payer,
        space = Multisig::space(owners.len())
    )]
    pub multisig: Account<'info, Multisig>,

    /// CHECK: Only the address is used; it must derive from the multisig key and nonce.
    #[account(
        seeds = [multisig.key().as_ref()],
        bump = nonce
    )]
    pub multisig_signer: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateMultisig<'info> {
    pub fn create(&mut self, owners: Vec<Pubkey>, threshold: u8, nonce: u8) -> Result<()> {
        owners::validate(&owners, threshold)?;

        let owner_count = owners.len();
        self.multisig.set_inner(Multisig {
            owners,
            threshold,
            nonce,
            owner_set_seqno: 0,
        });

        msg!(
            "Multisig {} created: {} of {} owners, signer {}",
            self.multisig.key(),
            threshold,
            owner_count,
            self.multisig_signer.key()
        );
        Ok(())
    }
}
