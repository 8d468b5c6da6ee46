//! Multisig Account - Anchor Program
//!
//! A group of owners jointly controls a PDA signer. Any owner can propose
//! a transaction made of arbitrary instructions; once enough distinct
//! owners approve it, any owner can execute it and the PDA signs each
//! instruction. Changes to the owner set or threshold are themselves
//! proposals and bump an owner set sequence number that strands every
//! transaction proposed under the previous owner set.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

pub mod approve;
pub mod cancel;
pub mod create;
pub mod error;
pub mod execute;
pub mod governance;
pub mod owners;
pub mod propose;
pub mod record;
pub mod state;

use approve::*;
use cancel::*;
use create::*;
use execute::*;
use governance::*;
use propose::*;
use state::TransactionInstruction;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "LMAX Multisig",
    project_url: "https://www.lmax.com",
    contacts: "email:infosec@lmax.com",
    policy: "https://lmax.com/.well-known/security.txt",
    preferred_languages: "en",
    auditors: "none (yet)"
}

declare_id!("MSig8vGZaTz1sb3pyWzLoX6Q9cU2iCxEhNqBdKr4JfH");

#[program]
pub mod multisig {
    use super::*;

    /// Create a multisig with the given owners and threshold.
    /// `nonce` is the bump of the signer PDA `[multisig.key()]`.
    pub fn create_multisig(
        ctx: Context<CreateMultisig>,
        owners: Vec<Pubkey>,
        threshold: u8,
        nonce: u8,
    ) -> Result<()> {
        ctx.accounts.create(owners, threshold, nonce)
    }

    /// Replace the owner set. Callable only by the multisig signer.
    pub fn set_owners(ctx: Context<Govern>, owners: Vec<Pubkey>) -> Result<()> {
        ctx.accounts.set_owners(owners)
    }

    /// Change the threshold. Callable only by the multisig signer.
    pub fn change_threshold(ctx: Context<Govern>, threshold: u8) -> Result<()> {
        ctx.accounts.change_threshold(threshold)
    }

    /// Replace the owner set and threshold in one step.
    /// Callable only by the multisig signer.
    pub fn set_owners_and_change_threshold(
        ctx: Context<Govern>,
        owners: Vec<Pubkey>,
        threshold: u8,
    ) -> Result<()> {
        ctx.accounts.set_owners_and_change_threshold(owners, threshold)
    }

    /// Propose a transaction; the proposer's approval is recorded.
    pub fn propose_transaction(
        ctx: Context<ProposeTransaction>,
        instructions: Vec<TransactionInstruction>,
    ) -> Result<()> {
        ctx.accounts.propose(instructions)
    }

    /// Approve a pending transaction.
    pub fn approve_transaction(ctx: Context<ApproveTransaction>) -> Result<()> {
        ctx.accounts.approve()
    }

    /// Execute a pending transaction that reached the threshold.
    pub fn execute_transaction<'info>(
        ctx: Context<'_, '_, '_, 'info, ExecuteTransaction<'info>>,
    ) -> Result<()> {
        ctx.accounts.execute(ctx.remaining_accounts)
    }

    /// Cancel a pending transaction and refund its rent.
    pub fn cancel_transaction(ctx: Context<CancelTransaction>) -> Result<()> {
        ctx.accounts.cancel()
    }
}
