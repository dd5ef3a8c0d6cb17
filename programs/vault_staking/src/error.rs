//! Error types for the Vault Staking program.
//!
//! This module defines all custom error codes that can be returned by the program.
//! Each error has a unique code and descriptive message.
//!
//! ## Error Code Ranges
//! - 6000-6009: Input validation errors
//! - 6010-6019: State/lookup errors
//! - 6020-6029: Time/lock errors
//! - 6030-6039: Math/overflow errors
//! - 6040-6049: Authorization errors
//! - 6050-6059: Account validation errors

use anchor_lang::prelude::*;

/// Custom error codes for the Vault Staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset). Explicit
/// discriminants keep each range stable as variants are added.
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors (6000-6009) ==========

    /// [6000] Cannot stake zero tokens.
    #[msg("Amount must be greater than zero")]
    ZeroAmount = 0,

    /// [6001] The duration is not in the project's allow-list.
    #[msg("Invalid staking duration. The provided duration is not in the allowed list for this project")]
    InvalidDuration = 1,

    /// [6002] Fee is outside 0..=10000 basis points.
    #[msg("Fee cannot exceed 10000 basis points (100%)")]
    InvalidFeeBps = 2,

    /// [6003] Project name is longer than 32 bytes.
    #[msg("Project name cannot exceed 32 characters")]
    NameTooLong = 3,

    /// [6004] Too many allowed durations supplied.
    #[msg("Too many durations provided. Maximum is 10")]
    TooManyDurations = 4,

    /// [6005] The authority set is full.
    #[msg("Too many platform authorities. Maximum is 10")]
    TooManyAuthorities = 5,

    // ========== State/Lookup Errors (6010-6019) ==========

    /// [6010] The stake has already been withdrawn.
    #[msg("Stake is not active")]
    StakeNotActive = 10,

    /// [6011] The authority to add is already in the set.
    #[msg("The authority to add already exists")]
    AuthorityAlreadyExists = 11,

    /// [6012] The authority to remove is not in the set.
    #[msg("The authority to remove was not found")]
    AuthorityNotFound = 12,

    /// [6013] The vault holds less than the stake being released.
    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance = 13,

    /// [6014] An audit-mode project needs the withdrawal record account.
    #[msg("Withdrawal record account is required for this project")]
    MissingWithdrawalRecord = 14,

    /// [6015] A close-mode project does not keep withdrawal records.
    #[msg("Withdrawal record account must not be supplied for this project")]
    UnexpectedWithdrawalRecord = 15,

    // ========== Time/Lock Errors (6020-6029) ==========

    /// [6020] Normal unstake attempted before maturity.
    #[msg("Lockup period has not ended yet")]
    LockupPeriodNotEnded = 20,

    /// [6021] Emergency unstake attempted at or after maturity.
    #[msg("Lockup period has already ended. Use the standard unstake instruction")]
    LockupPeriodEnded = 21,

    // ========== Math/Overflow Errors (6030-6039) ==========

    /// [6030] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow = 30,

    /// [6031] Arithmetic underflow occurred during calculation.
    #[msg("Arithmetic underflow occurred during calculation")]
    MathUnderflow = 31,

    // ========== Authorization Errors (6040-6049) ==========

    /// [6040] Signer is not in the platform authority set.
    #[msg("Signer is not a platform authority")]
    NotPlatformAuthority = 40,

    /// [6041] Removing the target would leave no authorities.
    #[msg("Cannot remove the last authority")]
    CannotRemoveLastAuthority = 41,

    /// [6042] Signer does not own the stake.
    #[msg("Unauthorized: signer does not match stake owner")]
    InvalidStakeOwner = 42,

    // ========== Account Validation Errors (6050-6059) ==========

    /// [6050] Token account mint does not match the project's mint.
    #[msg("Token mint mismatch - wrong token for this project")]
    MintMismatch = 50,

    /// [6051] The provided vault does not match the project's vault.
    #[msg("Vault address mismatch")]
    VaultMismatch = 51,

    /// [6052] Fee token account is not owned by the configured fee recipient.
    #[msg("Invalid fee recipient token account")]
    InvalidFeeRecipient = 52,

    /// [6053] Token program does not match the one the project was registered with.
    #[msg("Token program mismatch")]
    TokenProgramMismatch = 53,

    /// [6054] Stake record does not belong to this project.
    #[msg("Stake record does not belong to this project")]
    ProjectMismatch = 54,
}
