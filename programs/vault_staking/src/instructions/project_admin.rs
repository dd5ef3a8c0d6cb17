/// Project configuration handlers.
///
/// ## Security Guarantees
/// - Any current platform authority may configure any project
/// - Fee values outside 0..=10000 bps are rejected, never clamped
/// - Identity fields (mint, token program, vault) are never touched here

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::{AllowedDurationsUpdated, ProjectConfigUpdated};
use crate::state::{PlatformConfig, ProjectConfig};

/// Accounts required for project configuration.
///
/// ## Security Notes
/// - Authority must be signer and a member of `platform_config.authorities`
/// - Project PDA validated via seeds and its stored bump
#[derive(Accounts)]
pub struct ProjectAdmin<'info> {
    /// A platform authority.
    pub authority: Signer<'info>,

    /// The platform registry holding the authority set.
    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform_config.bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    /// The project to modify.
    #[account(
        mut,
        seeds = [PROJECT_SEED, project_config.project_id.to_le_bytes().as_ref()],
        bump = project_config.bump
    )]
    pub project_config: Account<'info, ProjectConfig>,
}

/// Update the fee recipient and both exit fees.
///
/// # Arguments
/// * `ctx` - ProjectAdmin accounts context
/// * `fee_recipient` - Wallet whose token account receives exit fees
/// * `unstake_fee_bps` - Fee for a matured unstake (basis points)
/// * `emergency_unstake_fee_bps` - Fee for an early unstake (basis points)
pub fn update_project_config_handler(
    ctx: Context<ProjectAdmin>,
    fee_recipient: Pubkey,
    unstake_fee_bps: u16,
    emergency_unstake_fee_bps: u16,
) -> Result<()> {
    let admin = ctx.accounts.authority.key();
    ctx.accounts.platform_config.require_authority(&admin)?;

    let project_config = &mut ctx.accounts.project_config;

    msg!(
        "Updating project {} fees - Old: unstake={}bp, emergency={}bp",
        project_config.project_id,
        project_config.unstake_fee_bps,
        project_config.emergency_unstake_fee_bps
    );

    project_config.set_fees(fee_recipient, unstake_fee_bps, emergency_unstake_fee_bps)?;

    msg!(
        "New fees - unstake={}bp, emergency={}bp, recipient={}",
        unstake_fee_bps,
        emergency_unstake_fee_bps,
        fee_recipient
    );
    msg!("Admin: {}", admin);

    emit!(ProjectConfigUpdated {
        admin,
        project_id: project_config.project_id,
        fee_recipient,
        unstake_fee_bps,
        emergency_unstake_fee_bps,
    });

    Ok(())
}

/// Replace the project's allowed lock-up durations.
///
/// An empty list removes the restriction. Existing stakes keep their duration.
///
/// # Arguments
/// * `ctx` - ProjectAdmin accounts context
/// * `new_durations` - New allow-list in days (at most 10 entries)
pub fn update_allowed_durations_handler(
    ctx: Context<ProjectAdmin>,
    new_durations: Vec<u16>,
) -> Result<()> {
    let admin = ctx.accounts.authority.key();
    ctx.accounts.platform_config.require_authority(&admin)?;

    let project_config = &mut ctx.accounts.project_config;
    project_config.set_allowed_durations(new_durations)?;

    msg!(
        "Project {} allowed durations: {:?}",
        project_config.project_id,
        project_config.allowed_durations
    );
    msg!("Admin: {}", admin);

    emit!(AllowedDurationsUpdated {
        admin,
        project_id: project_config.project_id,
        allowed_durations: project_config.allowed_durations.clone(),
    });

    Ok(())
}
