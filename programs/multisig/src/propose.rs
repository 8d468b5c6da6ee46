use anchor_lang::prelude::*;

use crate::error::MultisigError;
use crate::state::{Multisig, PendingTransaction, TransactionInstruction};

// ---------------------------------------------------------------------------
// Propose Transaction
// ---------------------------------------------------------------------------
// Creates a pending transaction at a fresh keypair address. The rent payer
// is separate from the proposer, who must be a signing owner and counts as
// the first approval.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
#[instruction(instructions: Vec<TransactionInstruction>)]
pub struct ProposeTransaction<'info> {
    pub multisig: Account<'info, Multisig>,

    #[account(
        init,
        payer = payer,
        space = PendingTransaction::space(&instructions, multisig.owners.len())
    )]
    pub transaction: Account<'info, PendingTransaction>,

    /// CHECK: Signer status and ownership are checked in `propose`.
    pub proposer: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ProposeTransaction<'info> {
    pub fn propose(&mut self, instructions: Vec<TransactionInstruction>) -> Result<()> {
        require!(self.proposer.is_signer, MultisigError::ProposerNotSigner);
        require!(!instructions.is_empty(), MultisigError::MissingInstructions);
        let proposer_index = self.multisig.owner_index(&self.proposer.key())?;

        let instruction_count = instructions.len();
        self.transaction.set_inner(PendingTransaction::new(
            self.multisig.key(),
            &self.multisig,
            instructions,
            proposer_index,
        ));

        msg!(
            "Transaction {} proposed by {} with {} instruction(s), owner set seqno {}",
            self.transaction.key(),
            self.proposer.key(),
            instruction_count,
            self.multisig.owner_set_seqno
        );
        Ok(())
    }
}
