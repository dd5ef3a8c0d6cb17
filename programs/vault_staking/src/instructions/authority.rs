/// Platform authority management.
///
/// ## Security Guarantees
/// - Only a current platform authority can add or remove authorities
/// - The authority set never becomes empty
/// - Duplicate authorities are rejected

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::{AuthorityAdded, AuthorityRemoved};
use crate::state::PlatformConfig;

/// Accounts required to change the platform authority set.
#[derive(Accounts)]
pub struct ManageAuthority<'info> {
    /// A current platform authority.
    /// SECURITY: Membership is checked against `platform_config.authorities` in the handler.
    pub authority: Signer<'info>,

    /// The platform registry.
    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform_config.bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,
}

/// Add a platform authority.
///
/// # Arguments
/// * `ctx` - ManageAuthority accounts context
/// * `new_authority` - Pubkey to grant platform authority
pub fn add_authority_handler(ctx: Context<ManageAuthority>, new_authority: Pubkey) -> Result<()> {
    let admin = ctx.accounts.authority.key();
    let platform_config = &mut ctx.accounts.platform_config;

    platform_config.add_authority(&admin, new_authority)?;

    msg!("Authority added: {}", new_authority);
    msg!("Admin: {}", admin);

    emit!(AuthorityAdded {
        admin,
        authority: new_authority,
        authority_count: platform_config.authorities.len() as u64,
    });

    Ok(())
}

/// Remove a platform authority.
///
/// # Arguments
/// * `ctx` - ManageAuthority accounts context
/// * `authority_to_remove` - Pubkey whose platform authority is revoked
pub fn remove_authority_handler(
    ctx: Context<ManageAuthority>,
    authority_to_remove: Pubkey,
) -> Result<()> {
    let admin = ctx.accounts.authority.key();
    let platform_config = &mut ctx.accounts.platform_config;

    platform_config.remove_authority(&admin, &authority_to_remove)?;

    msg!("Authority removed: {}", authority_to_remove);
    msg!("Remaining authorities: {}", platform_config.authorities.len());

    emit!(AuthorityRemoved {
        admin,
        authority: authority_to_remove,
        authority_count: platform_config.authorities.len() as u64,
    });

    Ok(())
}
