//! Initialize platform instruction handler.
//!
//! Creates the singleton platform registry with the caller as its first
//! authority. The `init` constraint makes a second call fail.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::PlatformInitialized;
use crate::state::PlatformConfig;

/// Accounts required for platform initialization.
#[derive(Accounts)]
pub struct InitializePlatform<'info> {
    /// The first platform authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The platform registry to be created.
    #[account(
        init,
        payer = authority,
        space = PlatformConfig::LEN,
        seeds = [PLATFORM_SEED],
        bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,
}

/// Initialize the platform registry.
pub fn handler(ctx: Context<InitializePlatform>) -> Result<()> {
    let platform_config = &mut ctx.accounts.platform_config;
    let authority = ctx.accounts.authority.key();

    platform_config.authorities = vec![authority];
    platform_config.project_count = 0;
    platform_config.bump = ctx.bumps.platform_config;

    msg!("Staking platform initialized");
    msg!("Authority: {}", authority);

    emit!(PlatformInitialized { authority });

    Ok(())
}
