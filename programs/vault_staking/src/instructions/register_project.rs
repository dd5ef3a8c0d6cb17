/// Register project instruction handler.
///
/// Creates a project config and its vault, and advances the platform's
/// project counter.
///
/// ## Security Guarantees
/// - Only a platform authority can register a project
/// - The vault is a PDA token account owned by a keyless vault-authority PDA
/// - Mint, token program and vault are locked into the project permanently

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::ProjectRegistered;
use crate::state::{FinalizeMode, PlatformConfig, ProjectConfig};

/// Accounts required for project registration.
///
/// ## Security Notes
/// - `project_config`, `vault` and `vault_authority` are derived from the
///   current `project_count`, so a client cannot pick the index
/// - `vault` authority is set to `vault_authority` at creation and the program
///   never changes it
#[derive(Accounts)]
pub struct RegisterProject<'info> {
    /// The registering platform authority; pays for the new accounts.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The platform registry.
    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform_config.bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    /// The project config to be created at index `project_count`.
    #[account(
        init,
        payer = authority,
        space = ProjectConfig::LEN,
        seeds = [PROJECT_SEED, platform_config.project_count.to_le_bytes().as_ref()],
        bump
    )]
    pub project_config: Account<'info, ProjectConfig>,

    /// The mint of the token staked in this project.
    #[account(
        constraint = token_mint.to_account_info().owner == &token_program.key() @ StakingError::TokenProgramMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The project's custody account.
    #[account(
        init,
        payer = authority,
        seeds = [VAULT_SEED, platform_config.project_count.to_le_bytes().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = vault_authority
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Keyless PDA that owns the vault; validated by seeds and never read.
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, platform_config.project_count.to_le_bytes().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// SPL Token or Token-2022 program owning `token_mint`.
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Register a new staking project.
///
/// # Arguments
/// * `ctx` - RegisterProject accounts context
/// * `name` - Human-readable project name (at most 32 bytes)
/// * `allowed_durations` - Permitted lock-up durations in days; `None` leaves staking unrestricted
/// * `finalize_mode` - Whether withdrawn stakes are flagged with an audit record or closed
pub fn handler(
    ctx: Context<RegisterProject>,
    name: String,
    allowed_durations: Option<Vec<u16>>,
    finalize_mode: FinalizeMode,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    // === INPUT VALIDATION ===

    ctx.accounts.platform_config.require_authority(&authority)?;
    ProjectConfig::validate_name(&name)?;
    let allowed_durations = allowed_durations.unwrap_or_default();
    ProjectConfig::validate_durations(&allowed_durations)?;

    require_keys_eq!(
        ctx.accounts.vault.owner,
        ctx.accounts.vault_authority.key(),
        StakingError::VaultMismatch
    );

    let clock = Clock::get()?;
    let project_id = ctx.accounts.platform_config.next_project_id()?;

    // === STATE INITIALIZATION ===

    let project_config = &mut ctx.accounts.project_config;
    project_config.project_id = project_id;
    project_config.name = name;
    project_config.token_mint = ctx.accounts.token_mint.key();
    project_config.token_program = ctx.accounts.token_program.key();
    project_config.vault = ctx.accounts.vault.key();
    project_config.vault_authority = ctx.accounts.vault_authority.key();
    project_config.fee_recipient = authority;
    project_config.unstake_fee_bps = 0;
    project_config.emergency_unstake_fee_bps = 0;
    project_config.allowed_durations = allowed_durations;
    project_config.finalize_mode = finalize_mode;
    project_config.total_staked = 0;
    project_config.active_stakes = 0;
    project_config.created_at = clock.unix_timestamp;
    project_config.bump = ctx.bumps.project_config;
    project_config.vault_bump = ctx.bumps.vault;
    project_config.vault_authority_bump = ctx.bumps.vault_authority;

    msg!("Project {} registered: {}", project_id, project_config.name);
    msg!("Mint: {}", project_config.token_mint);
    msg!("Vault: {}", project_config.vault);
    msg!("Allowed durations: {:?}", project_config.allowed_durations);

    emit!(ProjectRegistered {
        admin: authority,
        project_id,
        name: project_config.name.clone(),
        mint: project_config.token_mint,
        vault: project_config.vault,
    });

    Ok(())
}
