//! # Vault Staking Program
//!
//! A multi-project, time-locked staking program. Platform authorities register
//! projects; each project escrows user deposits of one token in a vault that
//! only this program can debit.
//!
//! ## Features
//! - Platform authority set with add/remove and a non-empty guarantee
//! - Per-project vault owned by a keyless PDA
//! - Optional per-project allow-list of lock-up durations
//! - Multiple concurrent stakes per user, keyed by a caller-chosen stake id
//! - Normal unstake after maturity and emergency unstake before it, each
//!   with its own basis-point exit fee
//! - Withdrawn stakes either kept with an audit record or closed
//! - SPL Token and Token-2022 mints
//!
//! This is a custody program only: it pays no rewards.

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod pda;
pub mod state;
pub mod vault;

#[cfg(test)]
mod test_utils;

use instructions::*;
use state::FinalizeMode;

#[program]
pub mod vault_staking {
    use super::*;

    /// Creates the platform registry with the signer as its first authority.
    ///
    /// # Errors
    /// Fails if the platform has already been initialized.
    pub fn initialize_platform(ctx: Context<InitializePlatform>) -> Result<()> {
        instructions::initialize_platform::handler(ctx)
    }

    /// Adds a platform authority.
    ///
    /// # Arguments
    /// * `ctx` - The context containing the platform registry
    /// * `new_authority` - Pubkey to add
    ///
    /// # Errors
    /// Returns an error if:
    /// - Signer is not a platform authority
    /// - `new_authority` is already an authority
    /// - The authority set is full
    pub fn add_authority(ctx: Context<ManageAuthority>, new_authority: Pubkey) -> Result<()> {
        instructions::authority::add_authority_handler(ctx, new_authority)
    }

    /// Removes a platform authority.
    ///
    /// # Arguments
    /// * `ctx` - The context containing the platform registry
    /// * `authority_to_remove` - Pubkey to remove
    ///
    /// # Errors
    /// Returns an error if:
    /// - Signer is not a platform authority
    /// - `authority_to_remove` is not an authority
    /// - It is the last remaining authority
    pub fn remove_authority(
        ctx: Context<ManageAuthority>,
        authority_to_remove: Pubkey,
    ) -> Result<()> {
        instructions::authority::remove_authority_handler(ctx, authority_to_remove)
    }

    /// Registers a new project with its own vault.
    ///
    /// # Arguments
    /// * `ctx` - The context containing the registry, mint and new accounts
    /// * `name` - Project name (max 32 bytes)
    /// * `allowed_durations` - Allowed lock-ups in days; `None` for unrestricted
    /// * `finalize_mode` - How withdrawn stakes are finalized
    ///
    /// # Errors
    /// Returns an error if:
    /// - Signer is not a platform authority
    /// - Name is too long or too many durations are given
    pub fn register_project(
        ctx: Context<RegisterProject>,
        name: String,
        allowed_durations: Option<Vec<u16>>,
        finalize_mode: FinalizeMode,
    ) -> Result<()> {
        instructions::register_project::handler(ctx, name, allowed_durations, finalize_mode)
    }

    /// Updates a project's fee recipient and exit fees.
    ///
    /// # Arguments
    /// * `ctx` - The context containing the registry and project
    /// * `fee_recipient` - Wallet receiving exit fees
    /// * `unstake_fee_bps` - Normal unstake fee (basis points, max 10000)
    /// * `emergency_unstake_fee_bps` - Emergency unstake fee (basis points, max 10000)
    ///
    /// # Errors
    /// Returns an error if:
    /// - Signer is not a platform authority
    /// - Either fee exceeds 10000 basis points
    pub fn update_project_config(
        ctx: Context<ProjectAdmin>,
        fee_recipient: Pubkey,
        unstake_fee_bps: u16,
        emergency_unstake_fee_bps: u16,
    ) -> Result<()> {
        instructions::project_admin::update_project_config_handler(
            ctx,
            fee_recipient,
            unstake_fee_bps,
            emergency_unstake_fee_bps,
        )
    }

    /// Replaces a project's allowed lock-up durations.
    ///
    /// # Errors
    /// Returns an error if the signer is not a platform authority or more
    /// than 10 durations are given.
    pub fn update_allowed_durations(
        ctx: Context<ProjectAdmin>,
        new_durations: Vec<u16>,
    ) -> Result<()> {
        instructions::project_admin::update_allowed_durations_handler(ctx, new_durations)
    }

    /// Stakes tokens into a project's vault.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for staking
    /// * `amount` - Amount of tokens to stake
    /// * `duration_days` - Lock-up duration in days
    /// * `stake_id` - Caller-chosen id, unique per user per project
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - Duration is not allowed by the project
    /// - A stake with this id already exists
    /// - Insufficient balance
    pub fn stake(ctx: Context<Stake>, amount: u64, duration_days: u16, stake_id: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount, duration_days, stake_id)
    }

    /// Withdraws a matured stake minus the unstake fee.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Signer does not own the stake, or it is no longer active
    /// - Lock-up period has not ended
    pub fn unstake(ctx: Context<Withdraw>, stake_id: u64) -> Result<()> {
        instructions::withdraw::unstake_handler(ctx, stake_id)
    }

    /// Withdraws a stake before maturity minus the emergency unstake fee.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Signer does not own the stake, or it is no longer active
    /// - Lock-up period has already ended
    pub fn emergency_unstake(ctx: Context<Withdraw>, stake_id: u64) -> Result<()> {
        instructions::withdraw::emergency_unstake_handler(ctx, stake_id)
    }
}
