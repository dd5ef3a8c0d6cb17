//! Unstake and emergency unstake instruction handlers.
//!
//! Both paths release a stake's full principal from the vault, split between
//! the owner and the project's fee recipient. They differ only in the timing
//! gate and the fee schedule.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::{EmergencyUnstakeEvent, UnstakeEvent};
use crate::pda::derive_withdrawal_address;
use crate::state::{FinalizeMode, ProjectConfig, StakeRecord, WithdrawalKind, WithdrawalRecord};
use crate::vault::{Settlement, VaultSigner};

/// Accounts required for either withdrawal path.
///
/// `withdrawal_record` is passed only for projects in `FinalizeMode::Audit`.
#[derive(Accounts)]
#[instruction(stake_id: u64)]
pub struct Withdraw<'info> {
    /// The stake owner.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The project the stake belongs to.
    #[account(
        mut,
        seeds = [PROJECT_SEED, project_config.project_id.to_le_bytes().as_ref()],
        bump = project_config.bump,
        has_one = vault @ StakingError::VaultMismatch,
        has_one = vault_authority,
        has_one = token_mint @ StakingError::MintMismatch,
        has_one = token_program @ StakingError::TokenProgramMismatch
    )]
    pub project_config: Account<'info, ProjectConfig>,

    /// The stake being withdrawn.
    #[account(
        mut,
        seeds = [
            STAKE_SEED,
            project_config.key().as_ref(),
            user.key().as_ref(),
            stake_id.to_le_bytes().as_ref()
        ],
        bump = stake_record.bump,
        constraint = stake_record.project == project_config.key() @ StakingError::ProjectMismatch
    )]
    pub stake_record: Account<'info, StakeRecord>,

    /// Audit record, created here. A second withdrawal finds it in place and
    /// is rejected by the stake's inactive flag.
    #[account(
        init_if_needed,
        payer = user,
        space = WithdrawalRecord::LEN,
        seeds = [UNSTAKE_SEED, stake_record.key().as_ref()],
        bump
    )]
    pub withdrawal_record: Option<Account<'info, WithdrawalRecord>>,

    /// The project's token mint.
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// User's token account receiving the payout.
    #[account(
        mut,
        constraint = user_token_account.mint == token_mint.key() @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key()
    )]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Token account of the project's fee recipient.
    #[account(
        mut,
        constraint = fee_token_account.mint == token_mint.key() @ StakingError::MintMismatch,
        constraint = fee_token_account.owner == project_config.fee_recipient @ StakingError::InvalidFeeRecipient
    )]
    pub fee_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The project's vault.
    #[account(
        mut,
        seeds = [VAULT_SEED, project_config.project_id.to_le_bytes().as_ref()],
        bump = project_config.vault_bump
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Keyless PDA that owns the vault; validated by seeds.
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, project_config.project_id.to_le_bytes().as_ref()],
        bump = project_config.vault_authority_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Token program the project was registered with.
    pub token_program: Interface<'info, TokenInterface>,

    /// System program.
    pub system_program: Program<'info, System>,
}

/// Withdraw a matured stake, charging the project's unstake fee.
///
/// # Arguments
/// * `ctx` - Withdraw accounts context
/// * `stake_id` - Id of the stake to withdraw (used for PDA derivation)
pub fn unstake_handler(ctx: Context<Withdraw>, stake_id: u64) -> Result<()> {
    settle(ctx, stake_id, WithdrawalKind::NormalExit)
}

/// Withdraw a stake before maturity, charging the project's emergency fee.
///
/// # Arguments
/// * `ctx` - Withdraw accounts context
/// * `stake_id` - Id of the stake to withdraw (used for PDA derivation)
pub fn emergency_unstake_handler(ctx: Context<Withdraw>, stake_id: u64) -> Result<()> {
    settle(ctx, stake_id, WithdrawalKind::EarlyExit)
}

fn settle(ctx: Context<Withdraw>, stake_id: u64, kind: WithdrawalKind) -> Result<()> {
    let clock = Clock::get()?;
    let user = ctx.accounts.user.key();

    // === VALIDATION ===

    let split = ctx.accounts.project_config.plan_withdrawal(
        &ctx.accounts.stake_record,
        &user,
        kind,
        clock.unix_timestamp,
        ctx.accounts.vault.amount,
        ctx.accounts.withdrawal_record.is_some(),
    )?;
    let amount = ctx.accounts.stake_record.amount;
    let signer = VaultSigner::for_project(&ctx.accounts.project_config);

    // === TOKEN TRANSFERS ===

    Settlement {
        token_program: ctx.accounts.token_program.to_account_info(),
        vault: ctx.accounts.vault.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        vault_authority: ctx.accounts.vault_authority.to_account_info(),
        owner_account: ctx.accounts.user_token_account.to_account_info(),
        fee_account: ctx.accounts.fee_token_account.to_account_info(),
        decimals: ctx.accounts.token_mint.decimals,
    }
    .pay(&signer, split)?;

    // === STATE UPDATE ===

    let project_config = &mut ctx.accounts.project_config;
    project_config.record_withdrawal(amount)?;
    let project_id = project_config.project_id;

    match project_config.finalize_mode {
        FinalizeMode::Audit => {
            let stake_key = ctx.accounts.stake_record.key();
            let (_, bump) = derive_withdrawal_address(ctx.program_id, &stake_key);
            let record = WithdrawalRecord::finalize(
                &mut ctx.accounts.stake_record,
                stake_key,
                split,
                kind,
                clock.unix_timestamp,
                bump,
            )?;
            let withdrawal_record = ctx
                .accounts
                .withdrawal_record
                .as_mut()
                .ok_or(StakingError::MissingWithdrawalRecord)?;
            withdrawal_record.set_inner(record);
        }
        FinalizeMode::Close => {
            ctx.accounts
                .stake_record
                .close(ctx.accounts.user.to_account_info())?;
        }
    }

    msg!(
        "Withdrew stake {} from project {}: amount={}, fee={}, payout={}",
        stake_id,
        project_id,
        amount,
        split.fee,
        split.payout
    );
    msg!("Remaining staked in project: {}", project_config.total_staked);

    match kind {
        WithdrawalKind::NormalExit => {
            emit!(UnstakeEvent {
                user,
                project_id,
                stake_id,
                amount,
                fee: split.fee,
            });
        }
        WithdrawalKind::EarlyExit => {
            emit!(EmergencyUnstakeEvent {
                user,
                project_id,
                stake_id,
                amount,
                fee: split.fee,
            });
        }
    }

    Ok(())
}
