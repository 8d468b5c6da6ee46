//! Error definitions
//!
//! Anchor numbers custom errors from 6000 in declaration order, so new
//! variants go at the end.

use anchor_lang::prelude::*;

#[error_code]
pub enum MultisigError {
    #[msg("Threshold must be less than or equal to the number of owners and greater than zero.")]
    InvalidThreshold,
    #[msg("Owners must be unique.")]
    UniqueOwners,
    #[msg("The given owner is not part of this multisig.")]
    InvalidOwner,
    #[msg("The proposer must be a signer.")]
    ProposerNotSigner,
    #[msg("The number of instructions must be greater than zero.")]
    MissingInstructions,
    #[msg("The owner set sequence attributes of the multisig account and transaction account must match.")]
    InvalidOwnerSetSequenceNumber,
    #[msg("The number of owners must be greater than zero.")]
    NotEnoughOwners,
    #[msg("The number of owners must not exceed the capacity of the multisig account.")]
    TooManyOwners,
    #[msg("The executor must be a signer and an owner of this multisig.")]
    InvalidExecutor,
    #[msg("The approver must be a signer.")]
    ApproverNotSigner,
    #[msg("The transaction account does not belong to this multisig.")]
    InvalidTransactionAccount,
    #[msg("The given transaction account is missing or not in the expected format.")]
    MalformedTransactionAccount,
    #[msg("The transaction account must be writable.")]
    ImmutableTransactionAccount,
    #[msg("The refundee account must not be the transaction account.")]
    InvalidRefundeeAccount,
    #[msg("The refundee account must be writable.")]
    ImmutableRefundeeAccount,
    #[msg("Not enough owners have approved this transaction.")]
    NotEnoughSigners,
    #[msg("Failed to close the transaction account.")]
    AccountCloseFailure,
}
