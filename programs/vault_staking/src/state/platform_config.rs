use anchor_lang::prelude::*;

use crate::constants::MAX_AUTHORITIES;
use crate::error::StakingError;

/// Singleton registry of platform administrators.
///
/// Derived from `[PLATFORM_SEED]`. Any listed authority may register
/// projects and manage their configuration.
#[account]
#[derive(Default, Debug)]
pub struct PlatformConfig {
    /// Administrators, in insertion order. Never empty once initialized.
    pub authorities: Vec<Pubkey>,
    /// Number of registered projects; the next project's index.
    pub project_count: u64,
    pub bump: u8,
}

impl PlatformConfig {
    pub const LEN: usize = 8 + (4 + 32 * MAX_AUTHORITIES) + 8 + 1;

    pub fn is_authority(&self, key: &Pubkey) -> bool {
        self.authorities.contains(key)
    }

    pub fn require_authority(&self, key: &Pubkey) -> Result<()> {
        require!(self.is_authority(key), StakingError::NotPlatformAuthority);
        Ok(())
    }

    /// Appends `new_authority`, rejecting duplicates.
    pub fn add_authority(&mut self, caller: &Pubkey, new_authority: Pubkey) -> Result<()> {
        self.require_authority(caller)?;
        require!(
            !self.is_authority(&new_authority),
            StakingError::AuthorityAlreadyExists
        );
        require!(
            self.authorities.len() < MAX_AUTHORITIES,
            StakingError::TooManyAuthorities
        );
        self.authorities.push(new_authority);
        Ok(())
    }

    /// Removes `target`, keeping the remaining authorities in order.
    pub fn remove_authority(&mut self, caller: &Pubkey, target: &Pubkey) -> Result<()> {
        self.require_authority(caller)?;
        let pos = self
            .authorities
            .iter()
            .position(|key| key == target)
            .ok_or(StakingError::AuthorityNotFound)?;
        require!(
            self.authorities.len() > 1,
            StakingError::CannotRemoveLastAuthority
        );
        self.authorities.remove(pos);
        Ok(())
    }

    /// Hands out the next project index and advances the counter.
    pub fn next_project_id(&mut self) -> Result<u64> {
        let id = self.project_count;
        self.project_count = id.checked_add(1).ok_or(StakingError::MathOverflow)?;
        Ok(id)
    }
}
