//! Vault custody.
//!
//! Each project's vault is a token account whose owner is the keyless
//! vault-authority PDA. `VaultSigner` is the only way to produce that PDA's
//! signature; it is built from a project config and used solely to debit the
//! vault.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, TransferChecked};

use crate::constants::VAULT_AUTHORITY_SEED;
use crate::math::FeeSplit;
use crate::state::ProjectConfig;

/// Signing capability for one project's vault authority.
pub struct VaultSigner {
    project_id: [u8; 8],
    bump: [u8; 1],
}

impl VaultSigner {
    pub(crate) fn for_project(project: &ProjectConfig) -> Self {
        Self {
            project_id: project.project_id.to_le_bytes(),
            bump: [project.vault_authority_bump],
        }
    }

    /// Moves `amount` out of the vault. Zero-value transfers are skipped.
    pub(crate) fn release<'info>(
        &self,
        token_program: AccountInfo<'info>,
        vault: AccountInfo<'info>,
        mint: AccountInfo<'info>,
        destination: AccountInfo<'info>,
        vault_authority: AccountInfo<'info>,
        amount: u64,
        decimals: u8,
    ) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        let seeds: &[&[u8]] = &[VAULT_AUTHORITY_SEED, &self.project_id, &self.bump];
        let signer_seeds = &[seeds];

        let cpi_accounts = TransferChecked {
            from: vault,
            mint,
            to: destination,
            authority: vault_authority,
        };
        let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds);
        token_interface::transfer_checked(cpi_ctx, amount, decimals)
    }
}

/// Accounts taking part in a vault settlement.
pub(crate) struct Settlement<'info> {
    pub token_program: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub vault_authority: AccountInfo<'info>,
    pub owner_account: AccountInfo<'info>,
    pub fee_account: AccountInfo<'info>,
    pub decimals: u8,
}

impl<'info> Settlement<'info> {
    /// Pays the fee leg then the owner leg out of the vault.
    ///
    /// Both transfers run inside the calling instruction, so either both land
    /// or the whole instruction fails.
    pub fn pay(self, signer: &VaultSigner, split: FeeSplit) -> Result<()> {
        signer.release(
            self.token_program.clone(),
            self.vault.clone(),
            self.mint.clone(),
            self.fee_account,
            self.vault_authority.clone(),
            split.fee,
            self.decimals,
        )?;
        signer.release(
            self.token_program,
            self.vault,
            self.mint,
            self.owner_account,
            self.vault_authority,
            split.payout,
            self.decimals,
        )
    }
}
