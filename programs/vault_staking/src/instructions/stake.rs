//! Stake instruction handler.
//!
//! Handles depositing tokens into a project's vault under a caller-chosen
//! stake id.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::StakeEvent;
use crate::math::received_amount;
use crate::state::{ProjectConfig, StakeRecord};

/// Accounts required for staking.
#[derive(Accounts)]
#[instruction(amount: u64, duration_days: u16, stake_id: u64)]
pub struct Stake<'info> {
    /// The user staking tokens.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The project being staked into.
    #[account(
        mut,
        seeds = [PROJECT_SEED, project_config.project_id.to_le_bytes().as_ref()],
        bump = project_config.bump,
        has_one = vault @ StakingError::VaultMismatch,
        has_one = token_mint @ StakingError::MintMismatch,
        has_one = token_program @ StakingError::TokenProgramMismatch
    )]
    pub project_config: Account<'info, ProjectConfig>,

    /// The new stake record. `init` rejects a reused stake id.
    #[account(
        init,
        payer = user,
        space = StakeRecord::LEN,
        seeds = [
            STAKE_SEED,
            project_config.key().as_ref(),
            user.key().as_ref(),
            stake_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub stake_record: Account<'info, StakeRecord>,

    /// The project's token mint.
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// User's token account for the staking token.
    #[account(
        mut,
        constraint = user_token_account.mint == token_mint.key() @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The project's vault.
    #[account(mut)]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program the project was registered with.
    pub token_program: Interface<'info, TokenInterface>,
}

/// Stake tokens into a project.
///
/// # Arguments
/// * `ctx` - Stake accounts context
/// * `amount` - Amount of tokens to stake
/// * `duration_days` - Lock-up duration; must be allowed by the project
/// * `stake_id` - Caller-chosen id, unique per user per project
pub fn handler(ctx: Context<Stake>, amount: u64, duration_days: u16, stake_id: u64) -> Result<()> {
    let project_config = &ctx.accounts.project_config;

    // Validate amount
    require!(amount > 0, StakingError::ZeroAmount);

    // Validate duration against the project's allow-list
    require!(
        project_config.is_duration_allowed(duration_days),
        StakingError::InvalidDuration
    );

    let clock = Clock::get()?;
    let vault_before = ctx.accounts.vault.amount;

    // Transfer tokens from user to vault
    let cpi_accounts = TransferChecked {
        from: ctx.accounts.user_token_account.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token_interface::transfer_checked(cpi_ctx, amount, ctx.accounts.token_mint.decimals)?;

    // Reload vault to book what actually arrived
    ctx.accounts.vault.reload()?;
    let received = received_amount(vault_before, ctx.accounts.vault.amount)?;
    if received != amount {
        msg!("Transfer fee withheld: {}", amount.saturating_sub(received));
    }

    // Create the stake record
    let project_key = ctx.accounts.project_config.key();
    let stake_record = &mut ctx.accounts.stake_record;
    stake_record.owner = ctx.accounts.user.key();
    stake_record.project = project_key;
    stake_record.project_id = ctx.accounts.project_config.project_id;
    stake_record.stake_id = stake_id;
    stake_record.amount = received;
    stake_record.duration_days = duration_days;
    stake_record.start_timestamp = clock.unix_timestamp;
    stake_record.active = true;
    stake_record.bump = ctx.bumps.stake_record;

    // Update project totals
    let project_config = &mut ctx.accounts.project_config;
    project_config.record_deposit(received)?;

    msg!(
        "Staked {} tokens for {} days in project {} (stake id {})",
        received,
        duration_days,
        project_config.project_id,
        stake_id
    );
    msg!("Total staked in project: {}", project_config.total_staked);

    emit!(StakeEvent {
        user: stake_record.owner,
        project_id: project_config.project_id,
        stake_id,
        amount: received,
        duration_days,
    });

    Ok(())
}
