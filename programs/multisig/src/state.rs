//! Persistent records: the multisig account and its pending transactions

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};

use crate::error::MultisigError;
use crate::owners;

const DISCRIMINATOR_LEN: usize = 8;
const PUBKEY_LEN: usize = 32;

/// Root record of a multisig: who the owners are and how many must agree.
#[account]
#[derive(Debug)]
pub struct Multisig {
    /// Owner identities; their order defines approval bitmap slots
    pub owners: Vec<Pubkey>,
    /// Distinct approvals required to execute
    pub threshold: u8,
    /// Bump for the multisig signer PDA, seeds `[multisig.key()]`
    pub nonce: u8,
    /// Epoch, bumped once by every governance change
    pub owner_set_seqno: u32,
}

impl Multisig {
    /// Account size for a multisig holding up to `owner_capacity` owners.
    pub fn space(owner_capacity: usize) -> usize {
        // discriminator, owners, threshold, nonce, owner_set_seqno
        DISCRIMINATOR_LEN + (4 + PUBKEY_LEN * owner_capacity) + 1 + 1 + 4
    }

    /// Number of owner slots an account of `data_len` bytes can hold.
    pub fn owner_capacity(data_len: usize) -> usize {
        data_len.saturating_sub(Self::space(0)) / PUBKEY_LEN
    }

    pub fn owner_index(&self, key: &Pubkey) -> Result<usize> {
        owners::index_of(&self.owners, key)
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owners.contains(key)
    }

    pub fn set_owners(&mut self, owners: Vec<Pubkey>, capacity: usize) -> Result<()> {
        owners::validate_new_owners(&owners, capacity)?;
        self.threshold = owners::clamp_threshold(self.threshold, owners.len());
        self.owners = owners;
        self.bump_owner_set_seqno()
    }

    pub fn change_threshold(&mut self, threshold: u8) -> Result<()> {
        owners::validate_threshold(threshold, self.owners.len())?;
        self.threshold = threshold;
        self.bump_owner_set_seqno()
    }

    /// Replaces owners and threshold as one change: everything is validated
    /// before anything is written, and the epoch moves exactly once.
    pub fn set_owners_and_change_threshold(
        &mut self,
        owners: Vec<Pubkey>,
        threshold: u8,
        capacity: usize,
    ) -> Result<()> {
        owners::validate_new_owners(&owners, capacity)?;
        owners::validate_threshold(threshold, owners.len())?;
        self.owners = owners;
        self.threshold = threshold;
        self.bump_owner_set_seqno()
    }

    fn bump_owner_set_seqno(&mut self) -> Result<()> {
        self.owner_set_seqno = self
            .owner_set_seqno
            .checked_add(1)
            .ok_or(MultisigError::InvalidOwnerSetSequenceNumber)?;
        Ok(())
    }
}

/// An account reference of a proposed instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransactionAccount {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// An instruction to run on behalf of the multisig, stored verbatim.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransactionInstruction {
    pub program_id: Pubkey,
    pub accounts: Vec<TransactionAccount>,
    pub data: Vec<u8>,
}

impl TransactionInstruction {
    pub fn serialized_len(&self) -> usize {
        // program_id, accounts, data
        PUBKEY_LEN + (4 + (PUBKEY_LEN + 1 + 1) * self.accounts.len()) + (4 + self.data.len())
    }

    /// Builds the instruction to invoke, marking every reference to
    /// `multisig_signer` as a signer for this one call.
    pub fn to_instruction(&self, multisig_signer: &Pubkey) -> Instruction {
        let accounts = self
            .accounts
            .iter()
            .map(|account| {
                let is_signer = account.is_signer || account.pubkey == *multisig_signer;
                if account.is_writable {
                    AccountMeta::new(account.pubkey, is_signer)
                } else {
                    AccountMeta::new_readonly(account.pubkey, is_signer)
                }
            })
            .collect();

        Instruction {
            program_id: self.program_id,
            accounts,
            data: self.data.clone(),
        }
    }
}

/// A proposal awaiting approvals, owned by the multisig that created it.
#[account]
#[derive(Debug)]
pub struct PendingTransaction {
    /// The multisig this transaction belongs to
    pub multisig: Pubkey,
    /// Instructions to execute, in order
    pub instructions: Vec<TransactionInstruction>,
    /// `signers[i]` is true iff `owners[i]` of the proposal-time owner set approved
    pub signers: Vec<bool>,
    /// Epoch of the multisig when this was proposed
    pub owner_set_seqno: u32,
}

impl PendingTransaction {
    pub fn space(instructions: &[TransactionInstruction], owner_count: usize) -> usize {
        let instructions_len: usize = instructions
            .iter()
            .map(TransactionInstruction::serialized_len)
            .sum();
        // discriminator, multisig, instructions, signers, owner_set_seqno
        DISCRIMINATOR_LEN + PUBKEY_LEN + (4 + instructions_len) + (4 + owner_count) + 4
    }

    /// A fresh proposal, already approved by the proposer.
    pub fn new(
        multisig_key: Pubkey,
        multisig: &Multisig,
        instructions: Vec<TransactionInstruction>,
        proposer_index: usize,
    ) -> Self {
        let mut signers = vec![false; multisig.owners.len()];
        signers[proposer_index] = true;

        Self {
            multisig: multisig_key,
            instructions,
            signers,
            owner_set_seqno: multisig.owner_set_seqno,
        }
    }

    /// Records an approval. Returns false if the slot was already set.
    pub fn approve(&mut self, owner_index: usize) -> Result<bool> {
        let slot = self
            .signers
            .get_mut(owner_index)
            .ok_or(MultisigError::MalformedTransactionAccount)?;
        let newly_approved = !*slot;
        *slot = true;
        Ok(newly_approved)
    }

    pub fn approval_count(&self) -> usize {
        self.signers.iter().filter(|&&approved| approved).count()
    }

    pub fn has_quorum(&self, threshold: u8) -> bool {
        self.approval_count() >= usize::from(threshold)
    }

    /// Only proposals from the live epoch can be approved or executed.
    pub fn is_current(&self, multisig: &Multisig) -> bool {
        self.owner_set_seqno == multisig.owner_set_seqno
    }
}
